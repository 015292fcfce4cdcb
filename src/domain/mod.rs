//! Domain layer - Core notification model
//!
//! Contains value objects and pure normalization rules.
//! This layer has no dependencies on external systems.

pub mod content;
pub mod request;
pub mod sound;

// Re-export common types
pub use content::{NotificationContent, PresentationOptions, Trigger};
pub use request::{InvalidRequestError, NotificationRequest, USAGE};
pub use sound::{normalize, ResolvedSound, SoundToken, SOUND_FILE_EXTENSION};
