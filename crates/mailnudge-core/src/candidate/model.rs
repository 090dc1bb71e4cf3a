//! Candidate model types.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a mailbox item, as assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    /// Create a new candidate ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A timestamp as delivered by a mailbox backend.
///
/// Backends disagree about how due dates are represented: some deliver a
/// zone-aware value, some a floating wall-clock value with no zone, and some
/// only a string. The variants keep those representations apart so that
/// [`crate::window`] can apply one explicit normalization rule instead of
/// guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// A zone-aware instant.
    Zoned(DateTime<FixedOffset>),
    /// A wall-clock value with no zone information attached.
    Floating(NaiveDateTime),
    /// An unparsed textual value, expected to be RFC 3339.
    Text(String),
}

impl Timestamp {
    /// The value as received, for display when normalization fails.
    #[must_use]
    pub fn raw_display(&self) -> String {
        match self {
            Self::Zoned(dt) => dt.to_rfc3339(),
            Self::Floating(naive) => naive.format("%Y-%m-%d %H:%M").to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Original recipient lists of a candidate, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
    /// `To` addresses.
    pub to: Vec<String>,
    /// `Cc` addresses.
    pub cc: Vec<String>,
    /// `Bcc` addresses.
    pub bcc: Vec<String>,
}

/// A mailbox item under evaluation for a follow-up reminder.
///
/// This is a read-only snapshot taken at scan time. Marker updates are
/// written back through the mailbox provider and do not mutate the snapshot;
/// after a write the snapshot is stale.
#[derive(Debug, Clone)]
pub struct ReminderCandidate {
    /// Backend identity of the item.
    pub id: CandidateId,
    /// Message subject.
    pub subject: String,
    /// Follow-up due instant. Absent means the item is not a task.
    pub due: Option<Timestamp>,
    /// Original recipients.
    pub recipients: Recipients,
    /// Sender address, if resolvable.
    pub sender: Option<String>,
    /// Category labels attached to the item, in insertion order.
    pub markers: Vec<String>,
    /// Identifier grouping the item with its replies, if the backend has one.
    pub conversation_key: Option<String>,
}
