//! Structured notification events emitted by booking and cancellation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Someone joined the recipient's slot
    PartnerJoined,
    /// The recipient was named as partner on a new slot
    PairedSlotCreated,
    /// The recipient's partner left
    PartnerWithdrew,
    /// The organizer left; the recipient now holds the slot alone
    OrganizerWithdrew,
    /// The organizer deleted the slot
    SlotCancelled,
}

/// Who to tell, about what, and who caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftNotice {
    pub kind: NoticeKind,
    pub recipient: String,
    pub actor: String,
    pub date: NaiveDate,
    pub hour: u32,
}
