//! Error types for the core library.

use thiserror::Error;

/// Errors that abort a reminder run.
///
/// Everything that goes wrong for a single candidate is caught at the
/// candidate boundary and recorded in the run summary; only failure to
/// obtain the candidate list itself reaches the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The candidate list could not be fetched; nothing was processed.
    #[error("candidate listing failed: {0}")]
    CandidateList(#[from] crate::mailbox::ProviderError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
