//! Notifier that only records messages in the log

use async_trait::async_trait;
use shiftslot_core::Notifier;
use shiftslot_domain::Result;
use tracing::info;

/// Logs every message at `info` instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(target: "shiftslot::notifications", %to, %subject, %body, "Shift notice");
        Ok(())
    }
}
