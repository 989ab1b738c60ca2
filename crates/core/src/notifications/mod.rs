//! Shift notifications

pub mod dispatcher;
pub mod ports;

pub use dispatcher::{render_notice, NotificationDispatcher, RenderedNotice};
pub use ports::Notifier;
