//! Recipient resolution strategies.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::Audience;
use crate::candidate::ReminderCandidate;
use crate::mailbox::{MailboxProvider, RelatedQuery};

/// How the reminder audience is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudienceStrategy {
    /// Every original recipient (To, Cc, Bcc), sender excluded.
    #[default]
    AllRecipients,
    /// Only recipients with no observed reply in the conversation.
    NonResponders,
}

/// Thread-history lookup failed; resolution degraded to the full recipient
/// set instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("audience resolution degraded: {0}")]
pub struct AudienceResolutionError(pub String);

/// Result of resolving the audience for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAudience {
    /// The addresses to remind. Empty means no reminder is needed.
    pub audience: Audience,
    /// Set when the thread lookup failed and everyone is reminded instead.
    pub degraded: Option<AudienceResolutionError>,
}

/// The deduplicated union of To, Cc and Bcc addresses, sender excluded.
#[must_use]
pub fn all_recipients(candidate: &ReminderCandidate) -> Audience {
    let mut audience = Audience::new();
    for address in candidate
        .recipients
        .to
        .iter()
        .chain(&candidate.recipients.cc)
        .chain(&candidate.recipients.bcc)
    {
        audience.insert(address);
    }
    if let Some(sender) = &candidate.sender {
        audience.remove(sender);
    }
    audience
}

/// The recipients who have not replied within the candidate's conversation.
///
/// Starts from the To addresses (and Cc when `include_cc` is set), sender
/// excluded, then removes every address seen as the sender of a related
/// message. Related messages come from the conversation key when present,
/// otherwise from a subject-substring search scoped to `folder` (a
/// best-effort heuristic, see [`RelatedQuery`]).
///
/// A lookup failure degrades to zero observed responders, so everyone in the
/// original set is reminded; the degradation is reported in the result.
pub async fn non_responders<P: MailboxProvider>(
    provider: &P,
    candidate: &ReminderCandidate,
    folder: &str,
    include_cc: bool,
) -> ResolvedAudience {
    let mut audience = Audience::new();
    for address in &candidate.recipients.to {
        audience.insert(address);
    }
    if include_cc {
        for address in &candidate.recipients.cc {
            audience.insert(address);
        }
    }
    if let Some(sender) = &candidate.sender {
        audience.remove(sender);
    }

    let query = candidate.conversation_key.as_ref().map_or_else(
        || RelatedQuery::SubjectContains {
            folder: folder.to_string(),
            subject: candidate.subject.clone(),
        },
        |key| RelatedQuery::Conversation(key.clone()),
    );

    match provider.find_related(&query).await {
        Ok(related) => {
            for item in &related {
                // A reply is any related item with a different identity and
                // a resolvable sender.
                if item.id != candidate.id
                    && let Some(sender) = &item.sender
                {
                    audience.remove(sender);
                }
            }
            debug!(
                candidate = %candidate.id,
                remaining = audience.len(),
                "non-responder resolution complete"
            );
            ResolvedAudience { audience, degraded: None }
        }
        Err(e) => {
            warn!(
                candidate = %candidate.id,
                error = %e,
                "thread lookup failed; reminding all original recipients"
            );
            ResolvedAudience {
                audience,
                degraded: Some(AudienceResolutionError(e.to_string())),
            }
        }
    }
}
