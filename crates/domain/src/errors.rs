//! Error types used throughout the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for shift slot operations
///
/// Booking and cancellation rejections are terminal for the call; the caller
/// refreshes and re-invokes.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShiftError {
    #[error("Slot is full")]
    SlotFull,

    #[error("A partner can only be named when creating a new slot")]
    CannotPairIntoOccupiedSlot,

    #[error("No booking found for this slot")]
    NotFound,

    #[error("Slot changed during the write, refresh and decide again")]
    Conflict,

    #[error("No shift window defined for this day")]
    NoWindowDefined,

    #[error("Hour {0} is outside the shift window")]
    OutsideWindow(u32),

    #[error("Already booked in this slot")]
    AlreadyBooked,

    #[error("Invalid partner: {0}")]
    InvalidPartner(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Calendar store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ShiftError>;

/// Failure reported by a calendar store adapter.
///
/// Coordinators decide how a store failure maps onto [`ShiftError`]: reads
/// surface as `StoreUnavailable`, failed writes as `Conflict`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for ShiftError {
    fn from(value: StoreError) -> Self {
        ShiftError::StoreUnavailable(value.to_string())
    }
}

/// Result type alias for calendar store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
