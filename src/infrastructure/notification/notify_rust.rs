//! Platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationCenter, SubmissionError};
use crate::domain::{NotificationContent, PresentationOptions, ResolvedSound, SOUND_FILE_EXTENSION};

/// Sound name the platform treats as its stock alert sound
#[cfg(target_os = "macos")]
const DEFAULT_SOUND_NAME: &str = "default";
#[cfg(not(target_os = "macos"))]
const DEFAULT_SOUND_NAME: &str = "message-new-instant";

/// Platform notification center using notify-rust
pub struct NotifyRustCenter {
    /// Application name shown alongside notifications
    app_name: String,
}

impl NotifyRustCenter {
    /// Create a new notify-rust center
    pub fn new() -> Self {
        Self {
            app_name: "Notipost".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationCenter for NotifyRustCenter {
    async fn submit(
        &self,
        content: NotificationContent,
        options: PresentationOptions,
    ) -> Result<(), SubmissionError> {
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            // The daemon has no scheduled-trigger concept; honor the
            // content's delay before handing it over.
            std::thread::sleep(content.trigger.delay);

            let mut notification = notify_rust::Notification::new();
            notification.appname(&app_name).summary(&content.title);

            #[cfg(any(target_os = "macos", target_os = "windows"))]
            {
                if !content.subtitle.is_empty() {
                    notification.subtitle(&content.subtitle);
                }
                notification.body(&content.body);
            }
            #[cfg(not(any(target_os = "macos", target_os = "windows")))]
            {
                // No subtitle field on this platform; fold it into the body.
                if content.subtitle.is_empty() {
                    notification.body(&content.body);
                } else {
                    notification.body(&format!("{}\n{}", content.subtitle, content.body));
                }
            }

            if options.sound {
                match &content.sound {
                    ResolvedSound::Silent => {}
                    ResolvedSound::Default => {
                        notification.sound_name(DEFAULT_SOUND_NAME);
                    }
                    ResolvedSound::Named(file) => {
                        // Sound registries key on the bare resource name.
                        let suffix = format!(".{SOUND_FILE_EXTENSION}");
                        notification.sound_name(file.strip_suffix(&suffix).unwrap_or(file));
                    }
                }
            }

            if let Some(path) = &content.attachment {
                notification.icon(&path.to_string_lossy());
            }

            #[cfg(all(unix, not(target_os = "macos"), not(target_os = "windows")))]
            if let Some(thread_id) = &content.thread_id {
                // Grouping hint understood by freedesktop notification daemons.
                notification.hint(notify_rust::Hint::Custom(
                    "x-canonical-private-synchronous".to_string(),
                    thread_id.clone(),
                ));
            }

            notification
                .show()
                .map(|_| ())
                .map_err(|e| SubmissionError(e.to_string()))
        })
        .await
        .map_err(|e| SubmissionError(format!("Task join error: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_creates_successfully() {
        let _center = NotifyRustCenter::new();
    }

    #[test]
    fn center_with_custom_app_name() {
        let center = NotifyRustCenter::with_app_name("TestApp");
        assert_eq!(center.app_name, "TestApp");
    }

    #[test]
    fn center_default_creates() {
        let center = NotifyRustCenter::default();
        assert_eq!(center.app_name, "Notipost");
    }
}
