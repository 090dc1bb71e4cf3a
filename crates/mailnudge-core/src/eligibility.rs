//! Per-candidate eligibility decision.
//!
//! Combines the due-window check and the idempotency marker into a single
//! pure decision: does this candidate get a reminder in this run?

use chrono::{DateTime, Duration, FixedOffset};

use crate::candidate::{ReminderCandidate, Timestamp};
use crate::marker;
use crate::window::{self, TimeNormalizationError, WindowCheck};

/// Outcome of evaluating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Due inside the window and not yet reminded. Carries the raw due
    /// timestamp so downstream stages never have to re-prove it exists.
    Eligible {
        /// The window comparison that selected the candidate.
        check: WindowCheck,
        /// The due timestamp as the backend delivered it.
        due: Timestamp,
    },
    /// No due instant present; the item is not a task.
    NoDueDate,
    /// Carries the sent marker from an earlier run. Markers win over the
    /// window: even a still-due item is never re-selected.
    AlreadySent,
    /// Has a due instant, but outside the forward window.
    NotDue(WindowCheck),
    /// The due instant could not be placed on the UTC timeline. Counted
    /// separately from [`Eligibility::NotDue`].
    TimeError(TimeNormalizationError),
}

impl Eligibility {
    /// Whether a reminder must be produced.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible { .. })
    }
}

/// Evaluate one candidate against the due window.
///
/// Pure and deterministic: identical inputs always yield identical results.
#[must_use]
pub fn evaluate(
    candidate: &ReminderCandidate,
    now: &DateTime<FixedOffset>,
    window: Duration,
) -> Eligibility {
    let Some(due) = &candidate.due else {
        return Eligibility::NoDueDate;
    };

    if marker::has_sent_marker(&candidate.markers) {
        return Eligibility::AlreadySent;
    }

    match window::is_due_soon(due, now, window) {
        Ok(check) if check.due_soon => Eligibility::Eligible { check, due: due.clone() },
        Ok(check) => Eligibility::NotDue(check),
        Err(e) => Eligibility::TimeError(e),
    }
}
