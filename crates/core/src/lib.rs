//! # ShiftSlot Core
//!
//! Slot engine business logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (calendar store, directory store, notifier)
//! - Window, identity and availability computation
//! - Booking and cancellation coordinators
//! - Schedule and directory services, and the day records cache
//!
//! ## Architecture Principles
//! - Only depends on `shiftslot-domain`
//! - No HTTP, file or platform code
//! - All external dependencies via traits

pub mod cache;
pub mod calendar_ports;
pub mod directory;
pub mod engine;
pub mod notifications;
pub mod schedule;
pub mod slots;

pub use cache::DayRecordsCache;
pub use calendar_ports::CalendarStore;
pub use directory::{DirectoryService, DirectoryStore};
pub use engine::ShiftEngine;
pub use notifications::{NotificationDispatcher, Notifier};
pub use schedule::ScheduleService;
pub use slots::{AvailabilityService, BookingCoordinator, CancellationCoordinator};
