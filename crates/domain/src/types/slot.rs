//! Slot occupancy and availability types

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::SLOT_CAPACITY;
use crate::utils::window_parser::ShiftWindow;

/// Who sits in a seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SlotIdentity {
    /// Resolved directory member, by lower-cased email
    Member(String),
    /// Tagged email with no directory entry
    UnknownEmail(String),
    /// Title fragment that matched nobody (or more than one entry)
    UnknownName(String),
}

/// One seat of a slot, with the name to show for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub identity: SlotIdentity,
    pub display_name: String,
}

impl Occupant {
    pub fn member(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identity: SlotIdentity::Member(email.into().to_lowercase()),
            display_name: display_name.into(),
        }
    }

    /// Email to tag this occupant with, if one is known.
    pub fn email(&self) -> Option<&str> {
        match &self.identity {
            SlotIdentity::Member(email) | SlotIdentity::UnknownEmail(email) => Some(email),
            SlotIdentity::UnknownName(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.identity, SlotIdentity::Member(_))
    }

    pub fn is(&self, email: &str) -> bool {
        self.email().is_some_and(|own| own.to_lowercase() == email.trim().to_lowercase())
    }
}

/// Ordered occupants of one slot record; index 0 is the organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub occupants: Vec<Occupant>,
    /// Whether the record carried a structured tag
    pub tagged: bool,
}

impl Occupancy {
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupants.len() >= SLOT_CAPACITY
    }

    /// Non-fatal flag: some seat could not be tied to a directory entry.
    pub fn has_unresolved(&self) -> bool {
        self.occupants.iter().any(|o| !o.is_resolved())
    }

    /// Untagged record whose title resolved to no directory identity.
    pub fn is_foreign(&self) -> bool {
        !self.tagged && !self.occupants.iter().any(Occupant::is_resolved)
    }

    pub fn position_of(&self, email: &str) -> Option<usize> {
        self.occupants.iter().position(|o| o.is(email))
    }

    pub fn contains(&self, email: &str) -> bool {
        self.position_of(email).is_some()
    }

    pub fn organizer(&self) -> Option<&Occupant> {
        self.occupants.first()
    }

    pub fn partner(&self) -> Option<&Occupant> {
        self.occupants.get(1)
    }
}

/// Availability of one hour, as seen by the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "with", rename_all = "snake_case")]
pub enum SlotState {
    Free,
    /// One other occupant; carries their display name
    Joinable(String),
    Full,
}

impl SlotState {
    /// Higher is more restrictive.
    pub fn restrictiveness(&self) -> u8 {
        match self {
            SlotState::Free => 0,
            SlotState::Joinable(_) => 1,
            SlotState::Full => 2,
        }
    }
}

/// A viewer's picture of one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: Option<NaiveDate>,
    pub window: Option<ShiftWindow>,
    pub slots: BTreeMap<u32, SlotState>,
    pub my_hours: BTreeSet<u32>,
}

impl DayAvailability {
    pub fn closed(date: NaiveDate) -> Self {
        Self { date: Some(date), ..Self::default() }
    }

    pub fn state(&self, hour: u32) -> Option<&SlotState> {
        self.slots.get(&hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    /// New slot with the viewer alone
    Created,
    /// New slot with the viewer and a named partner
    CreatedWithPartner,
    /// Viewer joined a single-occupant slot
    Joined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOutcome {
    pub record_id: String,
    pub kind: BookingKind,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationKind {
    Deleted,
    PartnerPromoted,
    Withdrew,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationOutcome {
    pub record_id: String,
    pub kind: CancellationKind,
}

/// One of the viewer's own shifts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub date: NaiveDate,
    pub hour: u32,
    pub title: String,
    /// Display name of the other occupant, if any
    pub partner: Option<String>,
}
