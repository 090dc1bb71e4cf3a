//! Collaborator contracts for mailbox access and mail dispatch.
//!
//! The engine never talks to a backend directly. Adapters implement these
//! traits for a concrete backend (desktop client automation, remote mailbox
//! protocol) and keep all field mapping out of the core.

use thiserror::Error;

use crate::audience::Audience;
use crate::candidate::{CandidateId, ReminderCandidate};

/// Errors surfaced by a mailbox backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backend could not be reached.
    #[error("backend unavailable: {0}")]
    Backend(String),

    /// The requested folder does not exist.
    #[error("folder not found: {0}")]
    FolderNotFound(String),

    /// A conversation key the backend handed out earlier is no longer valid.
    #[error("malformed conversation key: {0}")]
    MalformedConversationKey(String),
}

/// Errors surfaced by the outbound mail transport.
#[derive(Debug, Error)]
pub enum SendError {
    /// Dispatch failed.
    #[error("dispatch failed: {0}")]
    Dispatch(String),

    /// No recipients were specified.
    #[error("no recipients specified")]
    NoRecipients,
}

/// Query selecting messages related to a candidate.
///
/// Subject matching is a best-effort heuristic for backends without a
/// conversation identifier: it can over-match similar subjects and it misses
/// replies whose subject was edited. Mismatches are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelatedQuery {
    /// All items sharing a conversation key.
    Conversation(String),
    /// Items in a folder whose subject contains the given text.
    SubjectContains {
        /// Folder scope of the search.
        folder: String,
        /// Subject text to match.
        subject: String,
    },
}

/// Read/write access to the mailbox under scan.
#[allow(async_fn_in_trait)]
pub trait MailboxProvider {
    /// List the candidate items in one folder.
    ///
    /// One-shot and not restartable; the engine processes items in the order
    /// returned here.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the folder cannot be read. This is the
    /// only error that aborts a run.
    async fn list_candidates(&self, folder: &str)
    -> Result<Vec<ReminderCandidate>, ProviderError>;

    /// Find messages related to a candidate, for reply detection.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the lookup fails; the resolver degrades
    /// instead of aborting.
    async fn find_related(
        &self,
        query: &RelatedQuery,
    ) -> Result<Vec<ReminderCandidate>, ProviderError>;

    /// Replace the marker set on an item. Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the write fails.
    async fn apply_markers(
        &self,
        id: &CandidateId,
        markers: &[String],
    ) -> Result<(), ProviderError>;
}

impl<P: MailboxProvider + ?Sized> MailboxProvider for &P {
    async fn list_candidates(
        &self,
        folder: &str,
    ) -> Result<Vec<ReminderCandidate>, ProviderError> {
        (**self).list_candidates(folder).await
    }

    async fn find_related(
        &self,
        query: &RelatedQuery,
    ) -> Result<Vec<ReminderCandidate>, ProviderError> {
        (**self).find_related(query).await
    }

    async fn apply_markers(
        &self,
        id: &CandidateId,
        markers: &[String],
    ) -> Result<(), ProviderError> {
        (**self).apply_markers(id, markers).await
    }
}

/// Outbound mail dispatch.
#[allow(async_fn_in_trait)]
pub trait MailSender {
    /// Send a new message to the given audience.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if dispatch fails.
    async fn send(&self, audience: &Audience, subject: &str, body: &str)
    -> Result<(), SendError>;

    /// Reply-all on an existing item, optionally overriding the recipients.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if dispatch fails.
    async fn reply_all(
        &self,
        original: &CandidateId,
        subject: &str,
        body: &str,
        recipient_override: Option<&Audience>,
    ) -> Result<(), SendError>;
}

impl<S: MailSender + ?Sized> MailSender for &S {
    async fn send(
        &self,
        audience: &Audience,
        subject: &str,
        body: &str,
    ) -> Result<(), SendError> {
        (**self).send(audience, subject, body).await
    }

    async fn reply_all(
        &self,
        original: &CandidateId,
        subject: &str,
        body: &str,
        recipient_override: Option<&Audience>,
    ) -> Result<(), SendError> {
        (**self)
            .reply_all(original, subject, body, recipient_override)
            .await
    }
}
