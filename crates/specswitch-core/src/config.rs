//! 配置 - 测试目录候选、命名约定、目录前缀匹配方式
//!
//! 工作区根目录下的 `.specswitch.yml` 可覆盖默认值，命令行参数再覆盖文件。

use serde::Deserialize;
use std::io;
use std::path::Path;
use tokio::fs;

use crate::error::{Result, SwitchError};

pub const CONFIG_FILE: &str = ".specswitch.yml";

/// 判断"目录位于测试目录之下"的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMatch {
    /// 按路径分段匹配：`tests-helpers` 不属于 `tests`
    #[default]
    Segment,
    /// 纯字符串前缀匹配：`tests-helpers` 也被视为在 `tests` 之下
    Raw,
}

/// 源文件与 spec 文件的命名约定：`name.js` <-> `name.spec.js`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convention {
    spec_marker: String,
    extensions: Vec<String>,
}

impl Convention {
    pub fn new(spec_marker: impl Into<String>, extensions: Vec<String>) -> Self {
        Self {
            spec_marker: spec_marker.into(),
            extensions,
        }
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// `.js`
    pub fn source_suffix(&self, ext: &str) -> String {
        format!(".{ext}")
    }

    /// `.spec.js`
    pub fn spec_suffix(&self, ext: &str) -> String {
        format!(".{}.{ext}", self.spec_marker)
    }

    pub fn is_spec_name(&self, file_name: &str) -> bool {
        self.extensions()
            .any(|ext| file_name.ends_with(&self.spec_suffix(ext)))
    }
}

impl Default for Convention {
    fn default() -> Self {
        Self::new("spec", vec!["js".to_string()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 按优先级排列的测试目录名
    pub test_folders: Vec<String>,
    pub spec_marker: String,
    pub extensions: Vec<String>,
    pub prefix_match: PrefixMatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_folders: vec!["tests".to_string(), "test".to_string()],
            spec_marker: "spec".to_string(),
            extensions: vec!["js".to_string()],
            prefix_match: PrefixMatch::Segment,
        }
    }
}

impl Config {
    /// 读取 `root/.specswitch.yml`，文件不存在时返回默认配置
    pub async fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(SwitchError::io(path, err)),
        };
        Self::from_yaml(&text).map_err(|source| SwitchError::Config { path, source })
    }

    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // 空文件等同于没有配置
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn convention(&self) -> Convention {
        Convention::new(self.spec_marker.clone(), self.extensions.clone())
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if !overrides.test_folders.is_empty() {
            self.test_folders = overrides.test_folders.clone();
        }
        if !overrides.extensions.is_empty() {
            self.extensions = overrides.extensions.clone();
        }
        if let Some(prefix_match) = overrides.prefix_match {
            self.prefix_match = prefix_match;
        }
        self
    }
}

/// 命令行等外部来源的覆盖项，空值表示不覆盖
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub test_folders: Vec<String>,
    pub extensions: Vec<String>,
    pub prefix_match: Option<PrefixMatch>,
}
