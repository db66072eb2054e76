//! 终端宿主 - 用命令行参数扮演编辑器
//!
//! 当前文档来自 FILE 参数；"显示文档"是把路径交给 `--open-with` 程序，或打印到 stdout。

use anyhow::{Context, Result};
use specswitch_core::{normalize_path, Host, HostError, Workspace};
use std::env;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use crate::cli::Cli;

pub struct TerminalHost {
    active: Option<PathBuf>,
    workspace: Workspace,
    open_with: Option<String>,
}

impl TerminalHost {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = env::current_dir().context("failed to read the current directory")?;
        let active = cli.file.as_deref().map(|file| absolutize(&cwd, file));

        let workspace = if cli.workspaces.is_empty() {
            let root = active
                .as_deref()
                .and_then(discover_root)
                .unwrap_or_else(|| cwd.clone());
            Workspace::with_folders([root])
        } else {
            Workspace::with_folders(cli.workspaces.iter().map(|dir| absolutize(&cwd, dir)))
        };
        debug!(folders = ?workspace.folders(), "workspace folders");

        Ok(Self {
            active,
            workspace,
            open_with: cli.open_with.clone().filter(|p| !p.trim().is_empty()),
        })
    }
}

impl Host for TerminalHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn workspace_root(&self, file: &Path) -> Option<PathBuf> {
        self.workspace.folder_for(file).map(Path::to_path_buf)
    }

    async fn show_document(&self, path: &Path) -> Result<(), HostError> {
        let Some(open_with) = &self.open_with else {
            println!("{}", path.display());
            return Ok(());
        };

        // `code -r` 之类带参数的程序
        let mut parts = open_with.split_whitespace();
        let program = parts.next().unwrap_or_default();
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .await
            .map_err(|source| HostError::Show {
                path: path.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(HostError::Rejected {
                program: program.to_string(),
                path: path.to_path_buf(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// 拼接 cwd 并消去 `.`/`..`，否则 `ws/../other` 会被当成 `ws` 的子路径
fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&cwd.join(path))
    }
}

/// 从文件所在目录向上找第一个含 `.git` 的目录
fn discover_root(file: &Path) -> Option<PathBuf> {
    file.parent()?
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
