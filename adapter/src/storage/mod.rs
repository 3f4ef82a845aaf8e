use std::path::PathBuf;

use shared::{config::StorageConfig, error::AppResult};
use tokio::fs;

/// Filesystem store for uploaded images. Files are referenced by name
/// only; callers derive deterministic names from user ids.
pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.image_dir.clone(),
        }
    }

    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> AppResult<()> {
        fs::create_dir_all(&self.root).await?;
        fs::write(self.root.join(file_name), bytes).await?;
        Ok(())
    }
}
