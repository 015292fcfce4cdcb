//! Notification service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NotificationContent, PresentationOptions};

/// Error when the platform service rejects a submission
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SubmissionError(pub String);

/// Port for the platform notification center.
///
/// Submission is asynchronous on the platform side; the future resolves when
/// the service has accepted or rejected the request, not when the banner has
/// finished rendering.
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Hand the built content to the notification service.
    ///
    /// The content carries its own trigger; `options` controls how the
    /// notification presents itself when the caller is foreground.
    async fn submit(
        &self,
        content: NotificationContent,
        options: PresentationOptions,
    ) -> Result<(), SubmissionError>;
}
