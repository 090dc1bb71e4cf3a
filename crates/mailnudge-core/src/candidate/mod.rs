//! Candidate data model.
//!
//! A candidate is a mailbox item under evaluation for a follow-up reminder.

mod model;

pub use model::{CandidateId, Recipients, ReminderCandidate, Timestamp};
