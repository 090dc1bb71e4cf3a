//! Reminder subject and body construction.
//!
//! Pure string building: the fixed bilingual template, the original subject
//! verbatim, and the due instant rendered in the configured display zone.

use chrono::FixedOffset;

use crate::candidate::{ReminderCandidate, Timestamp};
use crate::window;

/// Prefix applied to every reminder subject.
const SUBJECT_PREFIX: &str = "🔔 تذكير بالمتابعة: ";

/// Composed reminder content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderContent {
    /// Outbound subject line.
    pub subject: String,
    /// Outbound plain-text body.
    pub body: String,
}

/// Build the outbound subject and body for one candidate.
///
/// The due instant is formatted as `YYYY-MM-DD HH:MM` in `display_zone`,
/// using the zoned value. If the timestamp cannot be normalized, the value
/// is rendered as received with an explicit `(unzoned)` prefix instead of
/// showing a wrong local time.
#[must_use]
pub fn compose(
    candidate: &ReminderCandidate,
    due: &Timestamp,
    display_zone: FixedOffset,
) -> ReminderContent {
    let due_display = match window::to_zone(due, display_zone) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => format!("(unzoned) {}", due.raw_display()),
    };

    let subject = format!("{SUBJECT_PREFIX}{}", candidate.subject);
    let body = format!(
        "السلام عليكم ورحمة الله وبركاته،\n\
         \n\
         نود تذكيركم بأن الرسالة التالية بلغت موعدها المحدد للمتابعة:\n\
         This is a reminder that the following message has reached its follow-up date:\n\
         \n\
         📩 العنوان / Subject: {subject_line}\n\
         📅 الموعد / Due: {due_display}\n\
         \n\
         يرجى اتخاذ اللازم.\n\
         Please take the necessary action.\n",
        subject_line = candidate.subject,
    );

    ReminderContent { subject, body }
}
