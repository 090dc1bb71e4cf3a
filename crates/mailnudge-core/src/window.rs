//! Due-window evaluation.
//!
//! Places heterogeneous backend timestamps on the UTC timeline and checks
//! whether a due instant falls inside a forward-looking window from "now".
//! Normalization follows one explicit rule per representation; there is no
//! fallback chain and no silent degradation to naive comparison.

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

use crate::candidate::Timestamp;

/// Default forward window: two days.
#[must_use]
pub fn default_window() -> Duration {
    Duration::days(2)
}

/// A timestamp could not be placed on the UTC timeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeNormalizationError {
    /// The textual value did not parse as RFC 3339.
    #[error("unparsable timestamp: {0:?}")]
    Unparsable(String),

    /// The floating value does not map to a single instant at the reference
    /// offset.
    #[error("floating timestamp {0} is not a single instant at the reference offset")]
    AmbiguousFloating(NaiveDateTime),
}

/// Result of one due-window check, with the compared instants kept for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCheck {
    /// Whether the due instant is inside the window.
    pub due_soon: bool,
    /// The reference instant.
    pub now: DateTime<Utc>,
    /// The normalized due instant.
    pub due: DateTime<Utc>,
    /// End of the forward window (`now + window`).
    pub window_end: DateTime<Utc>,
}

/// Normalize a backend timestamp to a UTC instant.
///
/// Zone-aware values convert directly. Floating values are interpreted at
/// the offset of `now` — never silently assumed to be UTC. Textual values
/// must parse as RFC 3339.
///
/// # Errors
///
/// Returns [`TimeNormalizationError`] if the value cannot be placed on the
/// UTC timeline.
pub fn normalize(
    ts: &Timestamp,
    now: &DateTime<FixedOffset>,
) -> Result<DateTime<Utc>, TimeNormalizationError> {
    match ts {
        Timestamp::Zoned(dt) => Ok(dt.with_timezone(&Utc)),
        Timestamp::Floating(naive) => match now.offset().from_local_datetime(naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(..) | LocalResult::None => {
                Err(TimeNormalizationError::AmbiguousFloating(*naive))
            }
        },
        Timestamp::Text(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| TimeNormalizationError::Unparsable(s.clone())),
    }
}

/// Convert a backend timestamp to a given display zone.
///
/// Floating values are interpreted as wall-clock time in that zone.
///
/// # Errors
///
/// Returns [`TimeNormalizationError`] if the value cannot be normalized.
pub fn to_zone(
    ts: &Timestamp,
    zone: FixedOffset,
) -> Result<DateTime<FixedOffset>, TimeNormalizationError> {
    match ts {
        Timestamp::Zoned(dt) => Ok(dt.with_timezone(&zone)),
        Timestamp::Floating(naive) => match zone.from_local_datetime(naive) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(..) | LocalResult::None => {
                Err(TimeNormalizationError::AmbiguousFloating(*naive))
            }
        },
        Timestamp::Text(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&zone))
            .map_err(|_| TimeNormalizationError::Unparsable(s.clone())),
    }
}

/// Check whether a due timestamp falls within `now ..= now + window`.
///
/// Both bounds are inclusive. The window looks strictly forward: an already
/// passed due date is never "due soon".
///
/// # Errors
///
/// Returns [`TimeNormalizationError`] if the due timestamp cannot be
/// normalized.
pub fn is_due_soon(
    due: &Timestamp,
    now: &DateTime<FixedOffset>,
    window: Duration,
) -> Result<WindowCheck, TimeNormalizationError> {
    let due_utc = normalize(due, now)?;
    let now_utc = now.with_timezone(&Utc);
    let window_end = now_utc + window;

    Ok(WindowCheck {
        due_soon: now_utc <= due_utc && due_utc <= window_end,
        now: now_utc,
        due: due_utc,
        window_end,
    })
}
