//! Reminder run orchestration.
//!
//! One run: list candidates from the target folder, prune with the
//! eligibility filter, resolve the audience, compose, dispatch, write the
//! sent marker back. Candidates are processed strictly one at a time in
//! provider order; every per-candidate failure is caught at the candidate
//! boundary and counted, and only a listing failure aborts the run.

mod summary;

pub use summary::{Diagnostic, Outcome, RunSummary};

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info, warn};

use crate::audience::{self, AudienceStrategy, ResolvedAudience};
use crate::candidate::ReminderCandidate;
use crate::compose;
use crate::config::{DeliveryMode, EngineConfig};
use crate::eligibility::{self, Eligibility};
use crate::error::Result;
use crate::mailbox::{MailSender, MailboxProvider};
use crate::marker;

/// Orchestrates one reminder pass over the target folder.
///
/// Holds no connection state of its own; each run is stateless apart from
/// what it reads and writes through the provider. Overlapping runs are not
/// coordinated here: the sent marker is the only duplicate-send safety net,
/// so schedule runs back to back, never concurrently.
#[derive(Debug)]
pub struct ReminderEngine<P, S> {
    provider: P,
    sender: S,
    config: EngineConfig,
}

impl<P: MailboxProvider, S: MailSender> ReminderEngine<P, S> {
    /// Create an engine over the given collaborators.
    pub const fn new(provider: P, sender: S, config: EngineConfig) -> Self {
        Self { provider, sender, config }
    }

    /// The configuration this engine runs with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run once, using the system clock in the configured display zone.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CandidateList`] if the candidate list cannot
    /// be fetched. All other failures are per-candidate and recorded in the
    /// returned [`RunSummary`].
    pub async fn run(&self) -> Result<RunSummary> {
        let now = Utc::now().with_timezone(&self.config.display_zone());
        self.run_at(now).await
    }

    /// Run once against an explicit reference instant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CandidateList`] if the candidate list cannot
    /// be fetched.
    pub async fn run_at(&self, now: DateTime<FixedOffset>) -> Result<RunSummary> {
        let candidates = self.provider.list_candidates(&self.config.target_folder).await?;
        info!(
            folder = %self.config.target_folder,
            count = candidates.len(),
            "scanning candidates"
        );

        let mut summary = RunSummary::default();
        for candidate in &candidates {
            summary.scanned += 1;
            self.process(candidate, &now, &mut summary).await;
        }

        info!(
            scanned = summary.scanned,
            with_due_date = summary.with_due_date,
            sent = summary.sent,
            "run completed"
        );
        Ok(summary)
    }

    async fn process(
        &self,
        candidate: &ReminderCandidate,
        now: &DateTime<FixedOffset>,
        summary: &mut RunSummary,
    ) {
        let (window_check, due_ts) = match eligibility::evaluate(candidate, now, self.config.window())
        {
            Eligibility::NoDueDate => {
                debug!(candidate = %candidate.id, "no due date; skipping");
                return;
            }
            Eligibility::AlreadySent => {
                summary.with_due_date += 1;
                summary.already_sent += 1;
                debug!(candidate = %candidate.id, "already reminded; skipping");
                return;
            }
            Eligibility::NotDue(check) => {
                summary.with_due_date += 1;
                summary.not_due += 1;
                debug!(candidate = %candidate.id, due = %check.due, "outside due window");
                return;
            }
            Eligibility::TimeError(e) => {
                summary.with_due_date += 1;
                warn!(candidate = %candidate.id, error = %e, "due timestamp not normalizable");
                summary.record(&candidate.id, Outcome::TimeError(e.to_string()));
                return;
            }
            Eligibility::Eligible { check, due } => {
                summary.with_due_date += 1;
                (check, due)
            }
        };

        let resolved = self.resolve_audience(candidate).await;
        if let Some(degraded) = &resolved.degraded {
            summary.record(&candidate.id, Outcome::AudienceLookupDegraded(degraded.to_string()));
        }
        if resolved.audience.is_empty() {
            info!(candidate = %candidate.id, "audience empty; no reminder needed");
            summary.record(&candidate.id, Outcome::SkippedEmptyAudience);
            return;
        }

        let content = compose::compose(candidate, &due_ts, self.config.display_zone());

        debug!(
            candidate = %candidate.id,
            audience = %resolved.audience,
            due = %window_check.due,
            "dispatching reminder"
        );
        if let Err(e) = self.dispatch(candidate, &resolved, &content.subject, &content.body).await {
            warn!(candidate = %candidate.id, error = %e, "reminder dispatch failed");
            summary.record(&candidate.id, Outcome::SendFailed(e.to_string()));
            return;
        }

        // Marker write comes strictly after a successful send. On failure
        // the reminder stays delivered; it is never re-sent in this run.
        let updated = marker::with_sent_marker(&candidate.markers);
        match self.provider.apply_markers(&candidate.id, &updated).await {
            Ok(()) => summary.record(&candidate.id, Outcome::Sent),
            Err(e) => {
                warn!(
                    candidate = %candidate.id,
                    error = %e,
                    "reminder sent but marker write failed; next run may remind again"
                );
                summary.record(&candidate.id, Outcome::SentMarkerWriteFailed(e.to_string()));
            }
        }
    }

    async fn resolve_audience(&self, candidate: &ReminderCandidate) -> ResolvedAudience {
        match self.config.audience_strategy {
            AudienceStrategy::AllRecipients => ResolvedAudience {
                audience: audience::all_recipients(candidate),
                degraded: None,
            },
            AudienceStrategy::NonResponders => {
                audience::non_responders(
                    &self.provider,
                    candidate,
                    &self.config.target_folder,
                    self.config.non_responders_include_cc,
                )
                .await
            }
        }
    }

    async fn dispatch(
        &self,
        candidate: &ReminderCandidate,
        resolved: &ResolvedAudience,
        subject: &str,
        body: &str,
    ) -> std::result::Result<(), crate::mailbox::SendError> {
        match self.config.delivery_mode {
            DeliveryMode::NewMessage => {
                self.sender.send(&resolved.audience, subject, body).await
            }
            DeliveryMode::ReplyAll => {
                self.sender
                    .reply_all(&candidate.id, subject, body, Some(&resolved.audience))
                    .await
            }
        }
    }
}
