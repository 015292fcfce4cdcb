//! Sound resolution against the platform sound library
//!
//! Pairs the pure token normalization from the domain with the
//! [`SoundLibrary`] probe. Resolution is total: an unknown named sound
//! degrades to the platform default instead of failing the notification.

use crate::domain::sound::{normalize, ResolvedSound, SoundToken, SOUND_FILE_EXTENSION};

use super::ports::SoundLibrary;

/// Tagged outcome of resolving a raw sound token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundResolution {
    /// No token, or an empty one: the notification stays silent
    Absent,
    /// The literal `default` token
    Default,
    /// The named sound file exists in the library
    Resolved(String),
    /// The named sound file is missing; the default sound is used instead
    FallbackUsed { requested: String },
}

impl SoundResolution {
    /// Collapse the resolution into the sound carried by the content
    pub fn into_sound(self) -> ResolvedSound {
        match self {
            SoundResolution::Absent => ResolvedSound::Silent,
            SoundResolution::Default => ResolvedSound::Default,
            SoundResolution::Resolved(file) => ResolvedSound::Named(file),
            SoundResolution::FallbackUsed { .. } => ResolvedSound::Default,
        }
    }
}

/// Resolve a raw `-sound` token against the platform sound library.
pub fn resolve_sound(raw: Option<&str>, library: &dyn SoundLibrary) -> SoundResolution {
    let Some(raw) = raw else {
        return SoundResolution::Absent;
    };

    match normalize(raw) {
        SoundToken::Empty => SoundResolution::Absent,
        SoundToken::Default => SoundResolution::Default,
        SoundToken::Candidate(file) => {
            let suffix = format!(".{SOUND_FILE_EXTENSION}");
            let name = file.strip_suffix(&suffix).unwrap_or(&file);
            if library.contains(name, SOUND_FILE_EXTENSION) {
                SoundResolution::Resolved(file)
            } else {
                SoundResolution::FallbackUsed { requested: file }
            }
        }
    }
}
