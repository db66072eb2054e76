//! Config 模块单元测试
//!
//! 对应源文件: src/config.rs
//! 测试范围: 从工作区读取配置文件

use specswitch_core::{Config, PrefixMatch, SwitchError, CONFIG_FILE};
use std::fs;

use crate::support::workspace;

#[tokio::test]
async fn test_missing_file_gives_defaults() {
    let root = workspace(&[], &[]);
    assert_eq!(Config::load(root.path()).await.unwrap(), Config::default());
}

#[tokio::test]
async fn test_empty_file_gives_defaults() {
    let root = workspace(&[], &[]);
    fs::write(root.path().join(CONFIG_FILE), "\n").unwrap();
    assert_eq!(Config::load(root.path()).await.unwrap(), Config::default());
}

#[tokio::test]
async fn test_full_file() {
    let root = workspace(&[], &[]);
    fs::write(
        root.path().join(CONFIG_FILE),
        "test_folders: [__tests__, tests]\nspec_marker: test\nextensions: [ts, js]\nprefix_match: raw\n",
    )
    .unwrap();

    let config = Config::load(root.path()).await.unwrap();

    assert_eq!(config.test_folders, vec!["__tests__".to_string(), "tests".to_string()]);
    assert_eq!(config.spec_marker, "test");
    assert_eq!(config.extensions, vec!["ts".to_string(), "js".to_string()]);
    assert_eq!(config.prefix_match, PrefixMatch::Raw);
    assert_eq!(config.convention().spec_suffix("ts"), ".test.ts");
}

#[tokio::test]
async fn test_unknown_field_rejected() {
    let root = workspace(&[], &[]);
    fs::write(root.path().join(CONFIG_FILE), "folders: [tests]\n").unwrap();

    let err = Config::load(root.path()).await.unwrap_err();
    assert!(matches!(err, SwitchError::Config { .. }));
}
