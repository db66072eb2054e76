//! 路径映射 - 源文件与 spec 文件之间的双向转换
//!
//! - 测试目录探测：按候选顺序找到第一个存在的目录
//! - `tests/utils/math.spec.js` -> `utils/math.js`
//! - `utils/math.js` -> `tests/utils/math.spec.js`

use std::path::{Component, Path, PathBuf};

use crate::config::{Convention, PrefixMatch};

/// 返回第一个在 `root` 下存在的候选名，列表顺序即优先级
pub fn locate_test_folder<S: AsRef<str>>(root: &Path, candidates: &[S]) -> Option<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|name| !name.is_empty() && root.join(name).exists())
        .map(str::to_string)
}

/// 计算相对于工作区根目录的对应文件路径，无法确定时返回 `None`
pub fn alternate_path(
    test_folder: &str,
    relative: &Path,
    convention: &Convention,
    prefix_match: PrefixMatch,
) -> Option<PathBuf> {
    let file_name = relative.file_name()?.to_str()?;
    let dir = relative.parent().unwrap_or_else(|| Path::new(""));
    let in_test_folder = is_under(dir, test_folder, prefix_match);

    if in_test_folder {
        for ext in convention.extensions() {
            if let Some(stem) = strip_suffix(file_name, &convention.spec_suffix(ext)) {
                let mut target = relative_to(dir, Path::new(test_folder));
                target.push(format!("{stem}{}", convention.source_suffix(ext)));
                return Some(target);
            }
        }
        return None;
    }

    if convention.is_spec_name(file_name) {
        return None;
    }
    for ext in convention.extensions() {
        if let Some(stem) = strip_suffix(file_name, &convention.source_suffix(ext)) {
            let mut target = PathBuf::from(test_folder);
            if !dir.as_os_str().is_empty() {
                target.push(dir);
            }
            target.push(format!("{stem}{}", convention.spec_suffix(ext)));
            return Some(target);
        }
    }
    None
}

fn is_under(dir: &Path, test_folder: &str, prefix_match: PrefixMatch) -> bool {
    match prefix_match {
        PrefixMatch::Segment => dir.starts_with(test_folder),
        PrefixMatch::Raw => dir.to_string_lossy().starts_with(test_folder),
    }
}

/// 后缀之前必须还有内容，`.spec.js` 本身不算
fn strip_suffix<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name
        .strip_suffix(suffix)
        .filter(|stem| !stem.is_empty())
}

/// `path` 相对于 `base` 的路径，两者都是相对路径；不在 `base` 之下时用 `..` 回退
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path: Vec<Component<'_>> = path.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();
    let common = path
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base.len() {
        result.push("..");
    }
    for component in &path[common..] {
        result.push(component.as_os_str());
    }
    result
}
