//! Main app runner for one-shot delivery

use std::process::ExitCode;

use crate::application::{DeliverNotificationUseCase, DeliveryOutcome};
use crate::domain::NotificationRequest;
use crate::infrastructure::{
    LocalFiles, NotifyRustCenter, PlatformAuthorizer, SystemSoundLibrary,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE_ERROR: u8 = 1;
pub const EXIT_PERMISSION_DENIED: u8 = 2;

/// Run one delivery attempt against the platform adapters
pub async fn run_oneshot(request: NotificationRequest) -> ExitCode {
    let presenter = Presenter::new();

    let use_case = DeliverNotificationUseCase::new(
        PlatformAuthorizer::new(),
        NotifyRustCenter::new(),
        SystemSoundLibrary::new(),
        LocalFiles,
    );

    let outcome = use_case.execute(request).await;

    if let DeliveryOutcome::PermissionDenied = outcome {
        presenter.error("Notification permission denied");
    }

    ExitCode::from(exit_code(&outcome))
}

/// Map a delivery outcome to the process exit code.
///
/// A submission error still exits 0: the tool promises an attempt, and the
/// error has already been reported on stderr.
pub fn exit_code(outcome: &DeliveryOutcome) -> u8 {
    match outcome {
        DeliveryOutcome::Delivered => EXIT_SUCCESS,
        DeliveryOutcome::SubmissionError(_) => EXIT_SUCCESS,
        DeliveryOutcome::InvalidRequest => EXIT_USAGE_ERROR,
        DeliveryOutcome::PermissionDenied => EXIT_PERMISSION_DENIED,
    }
}
