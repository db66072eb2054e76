//! Mapper 模块单元测试
//!
//! 对应源文件: src/mapper.rs
//! 测试范围: 测试目录探测、双向映射、前缀匹配方式、往返性质

use proptest::prelude::*;
use specswitch_core::config::{Convention, PrefixMatch};
use specswitch_core::mapper::{alternate_path, locate_test_folder};
use std::path::{Path, PathBuf};

use crate::support::workspace;

fn map(test_folder: &str, path: &Path) -> Option<PathBuf> {
    alternate_path(test_folder, path, &Convention::default(), PrefixMatch::Segment)
}

#[test]
fn test_locate_prefers_tests_over_test() {
    let root = workspace(&["tests", "test"], &[]);
    assert_eq!(
        locate_test_folder(root.path(), &["tests", "test"]),
        Some("tests".to_string())
    );
}

#[test]
fn test_locate_falls_back_to_test() {
    let root = workspace(&["test"], &[]);
    assert_eq!(
        locate_test_folder(root.path(), &["tests", "test"]),
        Some("test".to_string())
    );
}

#[test]
fn test_locate_accepts_file_entry() {
    // 任何同名条目都算，不要求是目录
    let root = workspace(&[], &["tests"]);
    assert!(root.path().join("tests").is_file());
    assert_eq!(
        locate_test_folder(root.path(), &["tests", "test"]),
        Some("tests".to_string())
    );
}

#[test]
fn test_locate_none() {
    let root = workspace(&["src"], &[]);
    assert_eq!(locate_test_folder(root.path(), &["tests", "test"]), None);
}

#[test]
fn test_locate_respects_candidate_order() {
    let root = workspace(&["tests", "test"], &[]);
    assert_eq!(
        locate_test_folder(root.path(), &["test", "tests"]),
        Some("test".to_string())
    );
}

#[test]
fn test_unrelated_extension() {
    assert_eq!(map("tests", Path::new("README.md")), None);
    assert_eq!(map("tests", Path::new("docs/guide.md")), None);
}

#[test]
fn test_segment_match_rejects_sibling_folder() {
    // `tests-helpers` 不是 `tests` 的子目录，按源文件处理
    assert_eq!(
        map("tests", Path::new("tests-helpers/setup.js")),
        Some(PathBuf::from("tests/tests-helpers/setup.spec.js"))
    );
    assert_eq!(map("tests", Path::new("tests-helpers/setup.spec.js")), None);
}

#[test]
fn test_raw_match_accepts_sibling_folder() {
    let raw = |path: &str| {
        alternate_path(
            "tests",
            Path::new(path),
            &Convention::default(),
            PrefixMatch::Raw,
        )
    };
    assert_eq!(
        raw("tests-helpers/setup.spec.js"),
        Some(PathBuf::from("../tests-helpers/setup.js"))
    );
    assert_eq!(raw("tests-helpers/setup.js"), None);
    assert_eq!(
        raw("tests/utils/math.spec.js"),
        Some(PathBuf::from("utils/math.js"))
    );
}

#[test]
fn test_extra_extensions_keep_extension() {
    let convention = Convention::new("spec", vec!["js".to_string(), "ts".to_string()]);
    let map_ts = |path: &str| {
        alternate_path("tests", Path::new(path), &convention, PrefixMatch::Segment)
    };
    assert_eq!(
        map_ts("src/app.ts"),
        Some(PathBuf::from("tests/src/app.spec.ts"))
    );
    assert_eq!(map_ts("tests/src/app.spec.ts"), Some(PathBuf::from("src/app.ts")));
    assert_eq!(map_ts("src/app.spec.ts"), None);
}

#[test]
fn test_custom_marker() {
    let convention = Convention::new("test", vec!["js".to_string()]);
    assert_eq!(
        alternate_path("test", Path::new("lib/io.js"), &convention, PrefixMatch::Segment),
        Some(PathBuf::from("test/lib/io.test.js"))
    );
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,7}".prop_filter("must not collide with the test folder", |s| s != "tests")
}

fn dir() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 0..4)
}

proptest! {
    #[test]
    fn prop_source_round_trip(dirs in dir(), stem in "[a-zA-Z][a-zA-Z0-9_]{0,7}") {
        let mut source = PathBuf::new();
        for d in &dirs {
            source.push(d);
        }
        source.push(format!("{stem}.js"));

        let spec = map("tests", &source).unwrap();
        prop_assert!(spec.starts_with("tests"));
        prop_assert_eq!(map("tests", &spec), Some(source));
    }

    #[test]
    fn prop_spec_round_trip(dirs in dir(), stem in "[a-zA-Z][a-zA-Z0-9_]{0,7}") {
        let mut spec = PathBuf::from("tests");
        for d in &dirs {
            spec.push(d);
        }
        spec.push(format!("{stem}.spec.js"));

        let source = map("tests", &spec).unwrap();
        prop_assert!(!source.starts_with("tests"));
        prop_assert_eq!(map("tests", &source), Some(spec));
    }
}
