//! Engine constants
//!
//! Centralized location for the domain-level constants. The slot encoding
//! constants are the wire contract with the calendar store and must be
//! produced byte-for-byte so historical records stay readable.

// Slot encoding (wire contract)
pub const SLOT_TAG_PREFIX: &str = "email:";
pub const SLOT_TAG_SEPARATOR: &str = ", ";
pub const OCCUPANT_CONNECTOR: &str = " i ";

// Capacity and matching rules
pub const SLOT_CAPACITY: usize = 2;
pub const MIN_NAME_PREFIX_LEN: usize = 2;
pub const SHIFT_LENGTH_HOURS: i64 = 1;

// Configuration defaults
pub const DEFAULT_TIME_ZONE: &str = "Europe/Warsaw";
pub const DEFAULT_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_MAX_DAYS: u64 = 64;
pub const DEFAULT_DIRECTORY_PATH: &str = "directory.json";
