//! Run statistics and per-candidate diagnostics.

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateId;

/// What happened to one candidate that needed attention during a run.
///
/// Routine dispositions (no due date, not due yet, already sent) are plain
/// counters on [`RunSummary`]; outcomes carry detail worth inspecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Reminder delivered and marker written.
    Sent,
    /// Resolved audience was empty; nothing to send.
    SkippedEmptyAudience,
    /// Dispatch failed; no marker was written, so the next run retries.
    SendFailed(String),
    /// Reminder delivered, but the marker write failed. The next run may
    /// remind again; the send is never re-attempted in this run.
    SentMarkerWriteFailed(String),
    /// The due timestamp could not be normalized.
    TimeError(String),
    /// Thread lookup failed; all original recipients were reminded.
    AudienceLookupDegraded(String),
}

/// Diagnostic entry for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The candidate the outcome belongs to.
    pub candidate: CandidateId,
    /// What happened.
    pub outcome: Outcome,
}

/// Counters for one engine run.
///
/// Produced fresh per invocation; there is no cross-run state beyond the
/// markers persisted on each item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Candidates returned by the provider.
    pub scanned: usize,
    /// Candidates that carried a due instant.
    pub with_due_date: usize,
    /// Reminders delivered.
    pub sent: usize,
    /// Candidates with a due instant outside the window.
    pub not_due: usize,
    /// Candidates skipped because the sent marker was already present.
    pub already_sent: usize,
    /// Candidates skipped because the resolved audience was empty.
    pub skipped_empty_audience: usize,
    /// Dispatch failures.
    pub send_failures: usize,
    /// Marker writes that failed after a successful send.
    pub marker_write_failures: usize,
    /// Due timestamps that could not be normalized.
    pub time_errors: usize,
    /// Thread lookups that failed and degraded to remind-everyone.
    pub audience_fallbacks: usize,
    /// Per-candidate detail for everything that was not a routine skip.
    pub diagnostics: Vec<Diagnostic>,
}

impl RunSummary {
    /// Record an outcome for a candidate, bumping the matching counters.
    pub fn record(&mut self, candidate: &CandidateId, outcome: Outcome) {
        match &outcome {
            Outcome::Sent => self.sent += 1,
            Outcome::SkippedEmptyAudience => self.skipped_empty_audience += 1,
            Outcome::SendFailed(_) => self.send_failures += 1,
            Outcome::SentMarkerWriteFailed(_) => {
                // The reminder did go out; it counts as sent.
                self.sent += 1;
                self.marker_write_failures += 1;
            }
            Outcome::TimeError(_) => self.time_errors += 1,
            Outcome::AudienceLookupDegraded(_) => self.audience_fallbacks += 1,
        }
        self.diagnostics.push(Diagnostic { candidate: candidate.clone(), outcome });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bumps_matching_counter() {
        let mut summary = RunSummary::default();
        let id = CandidateId::new("item-1");

        summary.record(&id, Outcome::Sent);
        summary.record(&id, Outcome::SendFailed("boom".to_string()));
        summary.record(&id, Outcome::SentMarkerWriteFailed("stale key".to_string()));

        assert_eq!(summary.sent, 2);
        assert_eq!(summary.send_failures, 1);
        assert_eq!(summary.marker_write_failures, 1);
        assert_eq!(summary.diagnostics.len(), 3);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut summary = RunSummary { scanned: 3, with_due_date: 2, ..RunSummary::default() };
        summary.record(&CandidateId::new("item-1"), Outcome::SkippedEmptyAudience);

        let json = serde_json::to_string(&summary).unwrap();
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
