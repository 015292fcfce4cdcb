//! Notification request value object and argument scanning

use thiserror::Error;

/// Usage line printed when no displayable content was supplied
pub const USAGE: &str = "Usage: notipost -title TITLE -message MESSAGE \
[-subtitle SUB] [-sound SOUND] [-group ID] [-contentImage PATH]";

/// Error when an argument list carries neither a title nor a message
#[derive(Debug, Clone, Error)]
#[error("{}", USAGE)]
pub struct InvalidRequestError;

/// A single notification request, built once per invocation from argv
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Notification title (required unless `message` is set)
    pub title: String,
    /// Notification subtitle
    pub subtitle: String,
    /// Notification body (required unless `title` is set)
    pub message: String,
    /// Raw sound token; `None` means silent
    pub sound: Option<String>,
    /// Thread/grouping identifier
    pub group_id: Option<String>,
    /// Local file path or URI of an attachment image
    pub icon_path: Option<String>,
}

impl NotificationRequest {
    /// Scan argv tokens (program name excluded) into a request.
    ///
    /// Each recognized flag consumes exactly the next token as its value.
    /// A flag with no following token is ignored, unrecognized tokens are
    /// skipped, and a repeated flag overwrites the earlier value.
    pub fn parse<I, S>(args: I) -> Result<Self, InvalidRequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = NotificationRequest::default();
        let mut tokens = args.into_iter().map(Into::into);

        while let Some(token) = tokens.next() {
            match token.as_str() {
                "-title" => {
                    if let Some(value) = tokens.next() {
                        request.title = value;
                    }
                }
                "-subtitle" => {
                    if let Some(value) = tokens.next() {
                        request.subtitle = value;
                    }
                }
                "-message" => {
                    if let Some(value) = tokens.next() {
                        request.message = value;
                    }
                }
                "-sound" => {
                    if let Some(value) = tokens.next() {
                        request.sound = Some(value);
                    }
                }
                "-group" => {
                    if let Some(value) = tokens.next() {
                        request.group_id = Some(value);
                    }
                }
                "-contentImage" => {
                    if let Some(value) = tokens.next() {
                        request.icon_path = Some(value);
                    }
                }
                _ => {}
            }
        }

        if request.title.is_empty() && request.message.is_empty() {
            return Err(InvalidRequestError);
        }

        Ok(request)
    }
}
