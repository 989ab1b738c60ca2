//! Notification dispatcher
//!
//! Turns a [`ShiftNotice`] into a subject and plain-text body and hands it to
//! the [`Notifier`] port. Delivery failures never reach the booking or
//! cancellation caller.

use std::sync::Arc;

use shiftslot_domain::{NoticeKind, ShiftNotice};
use tracing::{debug, warn};

use super::ports::Notifier;

/// Subject and body ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotice {
    pub subject: String,
    pub body: String,
}

/// Render the message for a notice.
pub fn render_notice(notice: &ShiftNotice) -> RenderedNotice {
    let when = format!("{} o godz. {:02}:00", notice.date.format("%d.%m.%Y"), notice.hour);
    let (subject, body) = match notice.kind {
        NoticeKind::PartnerJoined => (
            "Ktoś dołączył do Twojego dyżuru",
            format!("{} dołączył(a) do Twojego dyżuru {when}.", notice.actor),
        ),
        NoticeKind::PairedSlotCreated => (
            "Nowy termin dyżuru",
            format!("{} zapisał(a) Was razem na dyżur {when}.", notice.actor),
        ),
        NoticeKind::PartnerWithdrew => (
            "Zmiana w grafiku",
            format!("{} wypisał(a) się z dyżuru {when}. Termin jest znów otwarty dla drugiej osoby.", notice.actor),
        ),
        NoticeKind::OrganizerWithdrew => (
            "Zmiana w grafiku",
            format!(
                "{} wypisał(a) się z dyżuru {when}. Dyżur jest teraz zapisany na Ciebie i czeka na drugą osobę.",
                notice.actor
            ),
        ),
        NoticeKind::SlotCancelled => (
            "Odwołano termin dyżuru",
            format!("{} odwołał(a) dyżur {when}.", notice.actor),
        ),
    };
    RenderedNotice { subject: subject.to_string(), body }
}

/// Best-effort fan-out to the notifier port
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Render and deliver a notice. Failures are logged, never returned.
    pub async fn dispatch(&self, notice: ShiftNotice) {
        let rendered = render_notice(&notice);
        debug!(kind = ?notice.kind, to = %notice.recipient, "Dispatching shift notice");

        if let Err(err) =
            self.notifier.notify(&notice.recipient, &rendered.subject, &rendered.body).await
        {
            warn!(
                error = %err,
                kind = ?notice.kind,
                to = %notice.recipient,
                date = %notice.date,
                hour = notice.hour,
                "Failed to deliver shift notice"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use shiftslot_domain::{Result, ShiftError};

    use super::*;

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
            Err(ShiftError::StoreUnavailable("smtp down".into()))
        }
    }

    fn notice(kind: NoticeKind) -> ShiftNotice {
        ShiftNotice {
            kind,
            recipient: "jan@example.org".into(),
            actor: "Anna Kowalska".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            hour: 9,
        }
    }

    #[test]
    fn renders_subjects() {
        assert_eq!(
            render_notice(&notice(NoticeKind::PartnerJoined)).subject,
            "Ktoś dołączył do Twojego dyżuru"
        );
        assert_eq!(render_notice(&notice(NoticeKind::SlotCancelled)).subject, "Odwołano termin dyżuru");
        assert_eq!(
            render_notice(&notice(NoticeKind::PartnerWithdrew)).subject,
            render_notice(&notice(NoticeKind::OrganizerWithdrew)).subject
        );
    }

    #[test]
    fn body_names_actor_and_time() {
        let body = render_notice(&notice(NoticeKind::PairedSlotCreated)).body;
        assert!(body.contains("Anna Kowalska"));
        assert!(body.contains("10.03.2025 o godz. 09:00"));
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let dispatcher = NotificationDispatcher::new(Arc::new(FailingNotifier));
        dispatcher.dispatch(notice(NoticeKind::PartnerJoined)).await;
    }
}
