//! Engine configuration.

use chrono::{Duration, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::audience::AudienceStrategy;
use crate::window;

/// How reminders are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeliveryMode {
    /// A fresh message to the resolved audience.
    #[default]
    NewMessage,
    /// A reply-all on the original item, with the resolved audience as the
    /// recipient override.
    ReplyAll,
}

/// Configuration for a reminder run.
///
/// Passed into the engine at construction; there is no global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mailbox folder scanned for candidates.
    pub target_folder: String,
    /// Forward due-window length, in hours.
    pub window_hours: i64,
    /// How the audience is computed.
    pub audience_strategy: AudienceStrategy,
    /// How reminders are dispatched.
    pub delivery_mode: DeliveryMode,
    /// Whether Cc recipients participate in non-responder computation.
    /// The default follows the "TO only" policy.
    pub non_responders_include_cc: bool,
    /// UTC offset, in hours, used when formatting due dates in reminder
    /// bodies. Defaults to UTC+3.
    pub display_utc_offset_hours: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_folder: "Flag".to_string(),
            window_hours: 48,
            audience_strategy: AudienceStrategy::default(),
            delivery_mode: DeliveryMode::default(),
            non_responders_include_cc: false,
            display_utc_offset_hours: 3,
        }
    }
}

impl EngineConfig {
    /// The forward due window as a duration. An out-of-range hour count
    /// falls back to the default two-day window.
    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::try_hours(self.window_hours).unwrap_or_else(window::default_window)
    }

    /// The display zone as a fixed offset. An out-of-range offset falls back
    /// to UTC.
    #[must_use]
    pub fn display_zone(&self) -> FixedOffset {
        self.display_utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}
