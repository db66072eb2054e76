//! 打开文件 - 目标不存在时先创建父目录和空文件，再交给宿主显示

use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::error::{Result, SwitchError};
use crate::host::Host;

/// 确保 `path` 存在，返回是否新建了文件
///
/// 用追加模式创建，已有内容不会被截断；并发创建时后到者直接打开已有文件。
pub async fn ensure_exists(path: &Path) -> Result<bool> {
    if fs::try_exists(path).await.unwrap_or(false) {
        debug!(path = %path.display(), "target already exists");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| SwitchError::io(parent, err))?;
    }

    fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await
        .map_err(|err| SwitchError::io(path, err))?;

    info!(path = %path.display(), "created empty file");
    Ok(true)
}

pub async fn ensure_and_open<H: Host>(host: &H, path: &Path) -> Result<bool> {
    let created = ensure_exists(path).await?;
    host.show_document(path).await?;
    info!(path = %path.display(), created, "opened alternate file");
    Ok(created)
}
