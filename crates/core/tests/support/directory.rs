use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shiftslot_core::DirectoryStore;
use shiftslot_domain::{DirectoryEntry, Result as DomainResult};

/// In-memory mock for `DirectoryStore`.
#[derive(Default, Clone)]
pub struct InMemoryDirectory {
    entries: Arc<Mutex<Vec<DirectoryEntry>>>,
}

impl InMemoryDirectory {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries: Arc::new(Mutex::new(entries)) }
    }

    pub fn entries(&self) -> Vec<DirectoryEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn entry(&self, email: &str) -> Option<DirectoryEntry> {
        self.entries.lock().unwrap().iter().find(|e| e.email == email).cloned()
    }

    pub fn set(&self, entries: Vec<DirectoryEntry>) {
        *self.entries.lock().unwrap() = entries;
    }
}

#[async_trait]
impl DirectoryStore for InMemoryDirectory {
    async fn load_all(&self) -> DomainResult<Vec<DirectoryEntry>> {
        Ok(self.entries())
    }

    async fn save_all(&self, entries: &[DirectoryEntry]) -> DomainResult<()> {
        self.set(entries.to_vec());
        Ok(())
    }
}
