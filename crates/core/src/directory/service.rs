//! Directory service
//!
//! Every call works on a fresh snapshot from the store. Favorites updates
//! touch a single entry and the last write wins.

use std::collections::BTreeSet;
use std::sync::Arc;

use shiftslot_domain::{Directory, DirectoryEntry, Result, ShiftError};
use tracing::info;

use super::ports::DirectoryStore;

/// Directory reads and mutations
pub struct DirectoryService {
    store: Arc<dyn DirectoryStore>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    /// Current snapshot, cleaned.
    pub async fn snapshot(&self) -> Result<Directory> {
        Ok(Directory::from_entries(self.store.load_all().await?))
    }

    /// Replace `holder`'s favorites.
    ///
    /// Only the holder's row changes; every other stored row is written back
    /// exactly as it was read.
    ///
    /// # Errors
    /// `NotFound` for an unknown holder; `InvalidInput` when a favorite is
    /// the holder or not in the directory.
    pub async fn set_favorites(&self, holder: &str, favorites: &[String]) -> Result<()> {
        let mut rows = self.store.load_all().await?;
        let directory = Directory::from_entries(rows.clone());

        if !directory.contains_email(holder) {
            return Err(ShiftError::NotFound);
        }

        let mut cleaned = BTreeSet::new();
        for email in favorites {
            let key = email.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if key == holder.trim().to_lowercase() {
                return Err(ShiftError::InvalidInput("cannot favorite yourself".to_string()));
            }
            if !directory.contains_email(&key) {
                return Err(ShiftError::InvalidInput(format!("unknown member: {email}")));
            }
            cleaned.insert(key);
        }

        // The snapshot keeps the first complete row per email; update that one.
        let row = rows
            .iter_mut()
            .find(|entry| entry.is_complete() && entry.has_email(holder))
            .ok_or(ShiftError::NotFound)?;
        row.favorites = cleaned;
        let count = row.favorites.len();

        self.store.save_all(&rows).await?;
        info!(holder = %holder, count, "Favorites updated");
        Ok(())
    }

    /// Everyone but the viewer: favorites first, then by display name.
    pub async fn partner_candidates(&self, viewer: &str) -> Result<Vec<DirectoryEntry>> {
        let directory = self.snapshot().await?;
        let favorites =
            directory.find_by_email(viewer).map(|entry| entry.favorites.clone()).unwrap_or_default();

        let mut candidates: Vec<DirectoryEntry> =
            directory.into_entries().into_iter().filter(|entry| !entry.has_email(viewer)).collect();
        candidates.sort_by_key(|entry| (!favorites.contains(&entry.email_key()), entry.display_name()));
        Ok(candidates)
    }

    /// Replace the whole directory. Only admins may do this.
    ///
    /// # Errors
    /// `Forbidden` when `actor` is missing or not an admin.
    pub async fn replace_all(&self, actor: &str, entries: Vec<DirectoryEntry>) -> Result<usize> {
        let current = self.snapshot().await?;
        let allowed = current.find_by_email(actor).is_some_and(|entry| entry.role.can_manage_directory());
        if !allowed {
            return Err(ShiftError::Forbidden(format!("{actor} may not manage the directory")));
        }

        let replacement = Directory::from_entries(entries);
        self.store.save_all(replacement.entries()).await?;
        info!(actor = %actor, count = replacement.len(), "Directory replaced");
        Ok(replacement.len())
    }
}
