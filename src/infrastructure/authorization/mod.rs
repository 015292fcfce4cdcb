//! Alert authorization adapter

use async_trait::async_trait;

use crate::application::ports::{AlertAuthorizer, AuthorizationResponse};

/// Authorizer backed by the platform notification service.
///
/// Desktop notification daemons do not expose an explicit grant/deny prompt
/// the way mobile platforms do, so the probe reports granted and records any
/// service failure as the response error. A failure here surfaces again at
/// submission time where it is reported as a submission error.
pub struct PlatformAuthorizer;

impl PlatformAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlatformAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlertAuthorizer for PlatformAuthorizer {
    #[cfg(all(unix, not(target_os = "macos"), not(target_os = "windows")))]
    async fn request_alert_authorization(&self) -> AuthorizationResponse {
        // Capability query round-trips to the notification daemon and can
        // block on the session bus.
        let probe = tokio::task::spawn_blocking(|| {
            notify_rust::get_capabilities()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .await;

        let error = match probe {
            Ok(Ok(())) => None,
            Ok(Err(reason)) => Some(reason),
            Err(join_error) => Some(join_error.to_string()),
        };

        AuthorizationResponse {
            granted: true,
            error,
        }
    }

    #[cfg(not(all(unix, not(target_os = "macos"), not(target_os = "windows"))))]
    async fn request_alert_authorization(&self) -> AuthorizationResponse {
        AuthorizationResponse::granted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probe_never_denies() {
        // Whatever the session looks like, the probe may only attach an
        // error, never flip the verdict.
        let response = PlatformAuthorizer::new()
            .request_alert_authorization()
            .await;
        assert!(response.granted);
    }
}
