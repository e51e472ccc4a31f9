use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, info};

use super::CollectionStore;
use crate::address::Address;
use crate::errors::ServiceError;

/// JSON file-backed collection store.
///
/// The file holds a single JSON array. Nothing is cached: every `load` reads
/// the file again and every `store` rewrites it through a sibling temp file
/// followed by a rename, so readers see either the old or the new array.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Initialize the store from a path. Creates the file with an empty array if missing.
    /// The parent directory must already exist.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if fs::metadata(&file_path).await.is_err() {
            fs::write(&file_path, b"[]")
                .await
                .map_err(|e| ServiceError::Write(e.to_string()))?;
            info!(path = %file_path.display(), "seeded empty address collection");
        }

        Ok(Arc::new(Self { file_path }))
    }

    /// Wrap a path without touching the filesystem.
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.file_path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

/// Write `data` to `path` and flush it to disk before returning.
async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Address>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::Read(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Corrupt(e.to_string()))
    }

    async fn store(&self, addresses: &[Address]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(addresses).map_err(|e| ServiceError::Write(e.to_string()))?;
        let tmp = self.temp_path();
        write_synced(&tmp, &data).await.map_err(|e| ServiceError::Write(e.to_string()))?;
        fs::rename(&tmp, &self.file_path)
            .await
            .map_err(|e| ServiceError::Write(e.to_string()))?;
        debug!(path = %self.file_path.display(), count = addresses.len(), "stored address collection");
        Ok(())
    }
}
