//! Directory persisted as a JSON array on disk

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shiftslot_core::DirectoryStore;
use shiftslot_domain::{DirectoryConfig, DirectoryEntry, Result};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// JSON file implementation of the directory store port.
///
/// Writes go to a sibling temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectoryStore for JsonFileDirectory {
    async fn load_all(&self) -> Result<Vec<DirectoryEntry>> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Directory file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        let entries: Vec<DirectoryEntry> =
            serde_json::from_slice(&contents).map_err(InfraError::from)?;
        debug!(path = %self.path.display(), count = entries.len(), "Loaded directory");
        Ok(entries)
    }

    async fn save_all(&self, entries: &[DirectoryEntry]) -> Result<()> {
        let json = serde_json::to_vec_pretty(entries).map_err(InfraError::from)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await.map_err(InfraError::from)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(InfraError::from)?;

        debug!(path = %self.path.display(), count = entries.len(), "Saved directory");
        Ok(())
    }
}
