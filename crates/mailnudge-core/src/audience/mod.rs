//! Audience resolution: who receives a reminder.
//!
//! Two strategies are exposed: every original recipient, or only the
//! recipients who have not replied within the candidate's conversation.

mod model;
mod resolver;

pub use model::Audience;
pub use resolver::{
    AudienceResolutionError, AudienceStrategy, ResolvedAudience, all_recipients, non_responders,
};
