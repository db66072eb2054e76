//! 命令 - `extension.switchToSpec` 及其注册
//!
//! 执行流程是一条直线：当前文档 -> 工作区根目录 -> 测试目录 -> 对应路径 -> 确保存在并打开。
//! 任何一步缺少信息都静默结束（[`Outcome::Skipped`]），只有文件系统或宿主失败才返回错误。

use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::config::{Config, ConfigOverrides};
use crate::error::{Result, SwitchError};
use crate::host::Host;
use crate::mapper::{alternate_path, locate_test_folder};
use crate::opener::ensure_and_open;

pub const SWITCH_TO_SPEC: &str = "extension.switchToSpec";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoActiveDocument,
    OutsideWorkspace,
    NoTestFolder,
    NoAlternate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NoActiveDocument => "no active document",
            SkipReason::OutsideWorkspace => "file is outside every workspace folder",
            SkipReason::NoTestFolder => "no test folder found",
            SkipReason::NoAlternate => "no alternate file for this path",
        };
        f.write_str(text)
    }
}

/// 一次调用解析出的全部信息，执行前可单独查看（dry run）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub root: PathBuf,
    pub relative: PathBuf,
    pub test_folder: String,
    /// 相对于 `root`
    pub alternate: PathBuf,
}

impl Plan {
    pub fn target(&self) -> PathBuf {
        self.root.join(&self.alternate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Ready(Plan),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened { path: PathBuf, created: bool },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Default)]
pub struct SwitchToSpec {
    overrides: ConfigOverrides,
}

impl SwitchToSpec {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }

    /// 解析当前文档对应的目标文件，不修改文件系统（只读取配置和探测目录）
    pub async fn plan<H: Host>(&self, host: &H) -> Result<Resolution> {
        let Some(file) = host.active_document() else {
            return Ok(skip(SkipReason::NoActiveDocument));
        };
        let Some(root) = host.workspace_root(&file) else {
            return Ok(skip(SkipReason::OutsideWorkspace));
        };
        let Ok(relative) = file.strip_prefix(&root).map(Path::to_path_buf) else {
            return Ok(skip(SkipReason::OutsideWorkspace));
        };
        // `ws/../other/a.js` 按分段比较也以 `ws` 开头，实际在工作区之外
        if relative.components().any(|c| c == Component::ParentDir) {
            return Ok(skip(SkipReason::OutsideWorkspace));
        }

        // 每次调用都重新读取，不缓存
        let config = Config::load(&root).await?.with_overrides(&self.overrides);

        let Some(test_folder) = locate_test_folder(&root, &config.test_folders) else {
            return Ok(skip(SkipReason::NoTestFolder));
        };
        let Some(alternate) = alternate_path(
            &test_folder,
            &relative,
            &config.convention(),
            config.prefix_match,
        ) else {
            return Ok(skip(SkipReason::NoAlternate));
        };

        debug!(
            root = %root.display(),
            relative = %relative.display(),
            test_folder = %test_folder,
            alternate = %alternate.display(),
            "resolved alternate file"
        );
        Ok(Resolution::Ready(Plan {
            root,
            relative,
            test_folder,
            alternate,
        }))
    }

    pub async fn run<H: Host>(&self, host: &H) -> Result<Outcome> {
        match self.plan(host).await? {
            Resolution::Skipped(reason) => Ok(Outcome::Skipped(reason)),
            Resolution::Ready(plan) => {
                let path = plan.target();
                let created = ensure_and_open(host, &path).await?;
                Ok(Outcome::Opened { path, created })
            }
        }
    }
}

fn skip(reason: SkipReason) -> Resolution {
    debug!(%reason, "switch skipped");
    Resolution::Skipped(reason)
}

#[derive(Debug, Clone)]
pub enum Command {
    SwitchToSpec(SwitchToSpec),
}

impl Command {
    pub fn id(&self) -> &'static str {
        match self {
            Command::SwitchToSpec(_) => SWITCH_TO_SPEC,
        }
    }

    pub async fn execute<H: Host>(&self, host: &H) -> Result<Outcome> {
        match self {
            Command::SwitchToSpec(command) => command.run(host).await,
        }
    }
}

/// 注册凭证，交回 [`CommandRegistry::dispose`] 即撤销注册；直接丢弃不会撤销
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a registration must be disposed on teardown"]
pub struct Registration {
    id: String,
}

impl Registration {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) -> Result<Registration> {
        let id = command.id().to_string();
        if self.commands.contains_key(&id) {
            return Err(SwitchError::DuplicateCommand(id));
        }
        debug!(%id, "command registered");
        self.commands.insert(id.clone(), command);
        Ok(Registration { id })
    }

    pub fn dispose(&mut self, registration: Registration) -> bool {
        debug!(id = %registration.id, "command disposed");
        self.commands.remove(&registration.id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub async fn execute<H: Host>(&self, id: &str, host: &H) -> Result<Outcome> {
        let command = self
            .commands
            .get(id)
            .ok_or_else(|| SwitchError::UnknownCommand(id.to_string()))?;
        command.execute(host).await
    }
}

/// 初始化钩子：注册 `extension.switchToSpec`
pub fn activate(registry: &mut CommandRegistry, overrides: ConfigOverrides) -> Result<Registration> {
    registry.register(Command::SwitchToSpec(SwitchToSpec::new(overrides)))
}

/// 卸载钩子
pub fn deactivate(registry: &mut CommandRegistry, registration: Registration) {
    registry.dispose(registration);
}
