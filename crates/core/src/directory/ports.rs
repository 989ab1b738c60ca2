//! Port interface for the member directory

use async_trait::async_trait;
use shiftslot_domain::{DirectoryEntry, Result};

/// Trait for directory persistence
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Load every entry, as stored
    async fn load_all(&self) -> Result<Vec<DirectoryEntry>>;

    /// Replace the stored entries
    async fn save_all(&self, entries: &[DirectoryEntry]) -> Result<()>;
}
