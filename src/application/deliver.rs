//! Notification delivery use case
//!
//! Drives one request through permission, content construction, and
//! submission. The asynchronous platform callbacks are modeled as explicit
//! transitions on [`DeliveryState`] so the terminal condition for process
//! exit is unambiguous and testable without the platform.

use std::time::Duration;

use tokio::time::sleep;

use crate::domain::{NotificationRequest, PresentationOptions};

use super::build::build_content;
use super::ports::{AlertAuthorizer, FileStore, NotificationCenter, SoundLibrary};
use super::sound::{resolve_sound, SoundResolution};

/// Pause after the submission callback before the process is allowed to
/// exit. The service answers before the banner has actually rendered;
/// terminating right away can suppress it.
const RENDER_GRACE: Duration = Duration::from_millis(100);

/// Terminal result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    PermissionDenied,
    SubmissionError(String),
    InvalidRequest,
}

/// Progress of the single in-flight request.
///
/// `Completed` is terminal and reached exactly once; transitions fired from
/// any other state than the expected one leave the machine unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryState {
    Idle,
    AwaitingPermission,
    AwaitingSubmission,
    Completed(DeliveryOutcome),
}

impl DeliveryState {
    /// Process start with a valid request
    pub fn begin(self) -> Self {
        match self {
            DeliveryState::Idle => DeliveryState::AwaitingPermission,
            other => other,
        }
    }

    /// The permission callback fired
    pub fn on_permission(self, granted: bool) -> Self {
        match self {
            DeliveryState::AwaitingPermission if granted => DeliveryState::AwaitingSubmission,
            DeliveryState::AwaitingPermission => {
                DeliveryState::Completed(DeliveryOutcome::PermissionDenied)
            }
            other => other,
        }
    }

    /// The submission callback fired, with the service's error if any
    pub fn on_submission(self, error: Option<String>) -> Self {
        match self {
            DeliveryState::AwaitingSubmission => match error {
                None => DeliveryState::Completed(DeliveryOutcome::Delivered),
                Some(reason) => {
                    DeliveryState::Completed(DeliveryOutcome::SubmissionError(reason))
                }
            },
            other => other,
        }
    }
}

/// One-shot notification delivery use case
pub struct DeliverNotificationUseCase<A, C, S, F>
where
    A: AlertAuthorizer,
    C: NotificationCenter,
    S: SoundLibrary,
    F: FileStore,
{
    authorizer: A,
    center: C,
    sounds: S,
    files: F,
}

impl<A, C, S, F> DeliverNotificationUseCase<A, C, S, F>
where
    A: AlertAuthorizer,
    C: NotificationCenter,
    S: SoundLibrary,
    F: FileStore,
{
    /// Create a new use case instance
    pub fn new(authorizer: A, center: C, sounds: S, files: F) -> Self {
        Self {
            authorizer,
            center,
            sounds,
            files,
        }
    }

    /// Execute the delivery workflow for one request.
    ///
    /// Authorization is always resolved before anything is submitted. Both
    /// platform calls are attempted exactly once, with no timeout: if the
    /// service never answers, this future never resolves.
    pub async fn execute(&self, request: NotificationRequest) -> DeliveryOutcome {
        let mut state = DeliveryState::Idle.begin();

        let response = self.authorizer.request_alert_authorization().await;
        if let Some(error) = &response.error {
            eprintln!("Authorization error: {error}");
        }
        state = state.on_permission(response.granted);
        if let DeliveryState::Completed(outcome) = state {
            return outcome;
        }

        let resolution = resolve_sound(request.sound.as_deref(), &self.sounds);
        if let SoundResolution::FallbackUsed { requested } = &resolution {
            eprintln!("Sound \"{requested}\" not found, using default sound");
        }

        let content = build_content(&request, resolution.into_sound(), &self.files);
        let submitted = self
            .center
            .submit(content, PresentationOptions::default())
            .await;
        if let Err(error) = &submitted {
            eprintln!("Notification error: {error}");
        }

        state = state.on_submission(submitted.err().map(|e| e.0));

        // Let the OS finish rendering the banner before the caller exits.
        sleep(RENDER_GRACE).await;

        match state {
            DeliveryState::Completed(outcome) => outcome,
            _ => DeliveryOutcome::SubmissionError("delivery did not complete".to_string()),
        }
    }
}
