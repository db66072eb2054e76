mod cli;
mod terminal_host;

use anyhow::Result;
use clap::Parser;
use specswitch_core::{
    activate, deactivate, CommandRegistry, ConfigOverrides, Host, Outcome, Resolution,
    SwitchToSpec, SWITCH_TO_SPEC,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use terminal_host::TerminalHost;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout 留给宿主读取路径，日志走 stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let host = TerminalHost::from_cli(&cli)?;

    if cli.print_only {
        match SwitchToSpec::new(cli.overrides()).plan(&host).await? {
            Resolution::Ready(plan) => println!("{}", plan.target().display()),
            Resolution::Skipped(reason) => debug!(%reason, "nothing to print"),
        }
        return Ok(());
    }

    let mut registry = CommandRegistry::new();
    match switch(&mut registry, cli.overrides(), &host).await? {
        Outcome::Opened { path, created } => {
            info!(path = %path.display(), created, "switched");
        }
        Outcome::Skipped(reason) => debug!(%reason, "nothing to switch to"),
    }
    Ok(())
}

/// 注册、执行一次、撤销；执行失败时也先撤销再返回错误
async fn switch<H: Host>(
    registry: &mut CommandRegistry,
    overrides: ConfigOverrides,
    host: &H,
) -> Result<Outcome> {
    let registration = activate(registry, overrides)?;
    let result = registry.execute(SWITCH_TO_SPEC, host).await;
    deactivate(registry, registration);
    Ok(result?)
}
