//! Calendar record types
//!
//! A record is one event in the external store. Instants always carry an
//! explicit offset; civil day/hour arithmetic is done by [`ShiftClock`].
//!
//! [`ShiftClock`]: crate::types::clock::ShiftClock

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::constants::SLOT_TAG_PREFIX;
use crate::utils::window_parser::{has_window_pattern, parse_window_title, ShiftWindow};

/// One event as read from the calendar store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    /// Opaque, store-assigned id
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Record contents for a create call; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub title: String,
    pub body: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl CalendarRecord {
    /// Window encoded in the title; `None` for non-anchors and for anchors
    /// whose range is malformed.
    pub fn anchor_window(&self) -> Option<ShiftWindow> {
        parse_window_title(&self.title)
    }

    /// Title carries an hour range. Anchors are never slots, even when the
    /// range itself is malformed.
    pub fn is_anchor(&self) -> bool {
        has_window_pattern(&self.title)
    }

    /// True when the body carries the machine-written occupant tag.
    pub fn has_tag(&self) -> bool {
        self.body.contains(SLOT_TAG_PREFIX)
    }

    pub fn from_draft(id: impl Into<String>, draft: RecordDraft) -> Self {
        Self { id: id.into(), title: draft.title, body: draft.body, start: draft.start, end: draft.end }
    }
}
