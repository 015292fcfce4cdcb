//! Notification content builder
//!
//! Combines a validated request with its resolved sound into submission-ready
//! content. The only side effect is the attachment existence probe; a broken
//! icon path never fails the build, the notification just goes out without
//! the image.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use url::Url;

use crate::domain::{NotificationContent, NotificationRequest, ResolvedSound, Trigger};

use super::ports::FileStore;

/// Build submission-ready content from a request and its resolved sound.
pub fn build_content(
    request: &NotificationRequest,
    sound: ResolvedSound,
    files: &dyn FileStore,
) -> NotificationContent {
    let thread_id = request
        .group_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(str::to_owned);

    let attachment = request
        .icon_path
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .and_then(attachment_path)
        .filter(|path| files.exists(path));

    NotificationContent {
        id: fresh_identifier(),
        title: request.title.clone(),
        subtitle: request.subtitle.clone(),
        body: request.message.clone(),
        sound,
        thread_id,
        attachment,
        trigger: Trigger::short_delay(),
    }
}

/// Interpret the raw icon token as either a `file:` URI or a plain path.
///
/// Non-file URIs (http, data, ...) are rejected: the attachment must be a
/// local file the existence probe can answer for.
fn attachment_path(raw: &str) -> Option<PathBuf> {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        // A single-letter "scheme" is a Windows drive letter, not a URI.
        Ok(url) if url.scheme().len() == 1 => Some(PathBuf::from(raw)),
        Ok(_) => None,
        Err(_) => Some(PathBuf::from(raw)),
    }
}

/// Generate a per-build identifier unique within and across invocations.
fn fresh_identifier() -> String {
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    format!("notipost-{}-{nanos}-{seq}", std::process::id())
}
