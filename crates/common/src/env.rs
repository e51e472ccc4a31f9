//! Environment/runtime helpers
//!
//! Sanity checks to ensure the data directory exists at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the parent directory of the data file exists.
pub async fn ensure_env(data_file: &Path) -> anyhow::Result<()> {
    let data_dir = match data_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => {
            debug!(data_file = %data_file.display(), "data file lives in the working directory");
            return Ok(());
        }
    };
    if tokio::fs::metadata(data_dir).await.is_err() {
        warn!(data_dir = %data_dir.display(), "data directory not found; creating it");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_env_creates_missing_parent() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("address_book_env_{}", uuid::Uuid::new_v4()));
        let file = dir.join("nested").join("addressBook.json");
        ensure_env(&file).await?;
        assert!(tokio::fs::metadata(dir.join("nested")).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn ensure_env_accepts_bare_file_name() -> anyhow::Result<()> {
        ensure_env(Path::new("addressBook.json")).await
    }
}
