//! Port interface for outbound notifications

use async_trait::async_trait;
use shiftslot_domain::Result;

/// Trait for delivering a plain-text message to one member
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message; best effort
    async fn notify(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}
