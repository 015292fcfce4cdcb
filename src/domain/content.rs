//! Built notification content and its submission parameters

use std::path::PathBuf;
use std::time::Duration;

use super::sound::ResolvedSound;

/// Scheduling condition handed to the notification service along with the
/// content.
///
/// A zero-delay trigger is deliberately not offered: immediate triggers are
/// unreliable for foreground banner display, so every submission carries a
/// small nonzero delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub delay: Duration,
}

impl Trigger {
    /// The short fixed delay used for every submission
    pub fn short_delay() -> Self {
        Self {
            delay: Duration::from_millis(100),
        }
    }
}

/// How the notification should present itself, attached per submission
/// instead of registered globally with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Show the transient banner even when the caller is foreground
    pub banner: bool,
    /// Play the resolved sound
    pub sound: bool,
    /// Keep the notification in the notification list
    pub list: bool,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            banner: true,
            sound: true,
            list: true,
        }
    }
}

/// Fully assembled notification, ready for one submission.
///
/// Owned by the delivery controller for the duration of a single submission
/// and dropped once the service has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    /// Fresh per-build identifier, used by the service to de-duplicate
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub sound: ResolvedSound,
    /// Thread identifier for visual grouping, omitted when empty
    pub thread_id: Option<String>,
    /// Verified-existing attachment image path
    pub attachment: Option<PathBuf>,
    pub trigger: Trigger,
}
