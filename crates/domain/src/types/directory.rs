//! Directory types
//!
//! The directory is the group's member list, loaded as a point-in-time
//! snapshot per call. Emails are the unique, case-insensitive key.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Authorization role carried by a directory entry.
///
/// The engine only looks at it to gate directory management; everything else
/// is the caller's policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    Owner,
    Writer,
    #[default]
    Reader,
}

impl_domain_status_conversions!(Role {
    Admin => "admin",
    Owner => "owner",
    Writer => "writer",
    Reader => "reader",
});

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.to_string()
    }
}

impl Role {
    /// Only admins may replace the directory contents.
    pub fn can_manage_directory(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// One member of the group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(default)]
    pub role: Role,
    /// Emails of other entries, owned by this entry's holder
    #[serde(default)]
    pub favorites: BTreeSet<String>,
}

impl DirectoryEntry {
    pub fn new(
        email: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            role: Role::default(),
            favorites: BTreeSet::new(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// `"{given} {family}"`, the form written into slot titles.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// Lower-cased email used for every comparison.
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email_key() == email.trim().to_lowercase()
    }

    /// Email, given and family name are all present once trimmed.
    pub fn is_complete(&self) -> bool {
        ![&self.email, &self.given_name, &self.family_name].iter().any(|f| f.trim().is_empty())
    }

    /// Trim every field and reject entries without a usable name or email.
    fn normalized(mut self) -> Option<Self> {
        self.email = self.email.trim().to_string();
        self.given_name = self.given_name.trim().to_string();
        self.family_name = self.family_name.trim().to_string();
        if self.email.is_empty() || self.given_name.is_empty() || self.family_name.is_empty() {
            return None;
        }
        self.favorites = self
            .favorites
            .into_iter()
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .collect();
        Some(self)
    }
}

/// Point-in-time snapshot of all directory entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// Build a snapshot, dropping unusable rows and duplicate emails (first
    /// occurrence wins).
    pub fn from_entries(entries: Vec<DirectoryEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter_map(DirectoryEntry::normalized)
            .filter(|entry| seen.insert(entry.email_key()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DirectoryEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-insensitive email lookup.
    pub fn find_by_email(&self, email: &str) -> Option<&DirectoryEntry> {
        let key = email.trim().to_lowercase();
        self.entries.iter().find(|entry| entry.email_key() == key)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Sorted, de-duplicated display names (the sign-in picker list).
    pub fn display_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(DirectoryEntry::display_name)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn find_by_display_name(&self, display_name: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| entry.display_name() == display_name)
    }
}
