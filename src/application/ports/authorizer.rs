//! Alert authorization port interface

use async_trait::async_trait;

/// Answer from the platform permission subsystem.
///
/// `granted` is the platform's verdict; `error` is any failure that occurred
/// while asking. An error is reported to the caller but never implies denial
/// on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResponse {
    pub granted: bool,
    pub error: Option<String>,
}

impl AuthorizationResponse {
    /// A clean grant with no error
    pub fn granted() -> Self {
        Self {
            granted: true,
            error: None,
        }
    }

    /// A clean denial with no error
    pub fn denied() -> Self {
        Self {
            granted: false,
            error: None,
        }
    }
}

/// Port for requesting alert-and-sound display capability.
///
/// Called exactly once per process, strictly before any submission.
#[async_trait]
pub trait AlertAuthorizer: Send + Sync {
    /// Ask the platform for permission to display alerts with sound
    async fn request_alert_authorization(&self) -> AuthorizationResponse;
}
