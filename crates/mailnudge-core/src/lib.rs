//! # mailnudge-core
//!
//! Due-window decision engine and audience resolution for flagged-mail
//! follow-up reminders.
//!
//! This crate provides:
//! - **Due-window evaluation** - one explicit timezone normalization rule
//! - **Idempotency markers** - processed items are never reminded twice
//! - **Eligibility filtering** - pure, deterministic per-item decisions
//! - **Audience resolution** - all recipients, or non-responders only
//! - **Reminder composition** - fixed bilingual subject/body template
//! - **Run orchestration** - per-candidate fault isolation and run statistics
//!
//! Mailbox backends and outbound transports are external collaborators
//! behind the [`MailboxProvider`] and [`MailSender`] traits; adapters for
//! concrete backends live outside this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod audience;
pub mod candidate;
pub mod compose;
pub mod config;
pub mod eligibility;
pub mod engine;
mod error;
pub mod mailbox;
pub mod marker;
pub mod window;

pub use audience::{
    Audience, AudienceResolutionError, AudienceStrategy, ResolvedAudience, all_recipients,
    non_responders,
};
pub use candidate::{CandidateId, Recipients, ReminderCandidate, Timestamp};
pub use compose::{ReminderContent, compose};
pub use config::{DeliveryMode, EngineConfig};
pub use eligibility::{Eligibility, evaluate};
pub use engine::{Diagnostic, Outcome, ReminderEngine, RunSummary};
pub use error::{Error, Result};
pub use mailbox::{MailSender, MailboxProvider, ProviderError, RelatedQuery, SendError};
pub use marker::{SENT_MARKER, has_sent_marker, with_sent_marker};
pub use window::{TimeNormalizationError, WindowCheck, default_window, is_due_soon, normalize};
