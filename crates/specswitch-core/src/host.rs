//! 宿主编辑器接口
//!
//! 命令本身不关心宿主是谁：当前文档、工作区根目录、显示文档都通过 [`Host`] 取得。

use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to show {path}: {source}")]
    Show {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status} while showing {path}")]
    Rejected {
        program: String,
        path: PathBuf,
        status: String,
    },
}

#[allow(async_fn_in_trait)]
pub trait Host {
    /// 当前获得焦点的文档（绝对路径）
    fn active_document(&self) -> Option<PathBuf>;

    /// 包含 `file` 的工作区根目录
    fn workspace_root(&self, file: &Path) -> Option<PathBuf>;

    /// 加载并显示文档，使其成为当前文档
    async fn show_document(&self, path: &Path) -> Result<(), HostError>;
}

/// 工作区目录集合
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    folders: Vec<PathBuf>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folders(folders: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut workspace = Self::new();
        for folder in folders {
            workspace.add_folder(folder);
        }
        workspace
    }

    pub fn add_folder(&mut self, folder: PathBuf) {
        if !self.folders.contains(&folder) {
            self.folders.push(folder);
        }
    }

    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// 包含 `file` 的最深一层目录；按路径分段比较
    pub fn folder_for(&self, file: &Path) -> Option<&Path> {
        self.folders
            .iter()
            .filter(|folder| file.starts_with(folder))
            .max_by_key(|folder| folder.components().count())
            .map(PathBuf::as_path)
    }
}

/// 去掉 `.`，并让 `..` 抵消前一个普通分段；不访问文件系统
///
/// 根目录之上的 `..` 直接丢弃，相对路径开头的 `..` 保留。
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last().copied() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}
