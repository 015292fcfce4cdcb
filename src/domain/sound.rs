//! Sound token normalization
//!
//! Turns the raw `-sound` token into either a well-known marker or a
//! candidate sound file name. Whether the candidate actually exists is
//! checked later against the platform sound library; normalization itself
//! is pure and never fails.

/// File extension used by platform alert sounds
pub const SOUND_FILE_EXTENSION: &str = "aiff";

/// Convenience short names that map to bundled alert sounds
const SHORT_NAMES: &[&str] = &["info", "warning", "complete", "end"];

/// Sound reference carried by the built notification content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSound {
    /// No sound plays with the notification
    Silent,
    /// The platform's default alert sound
    Default,
    /// A named sound file, e.g. `glass.aiff`
    Named(String),
}

/// Outcome of normalizing a raw sound token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundToken {
    /// Token was empty or whitespace
    Empty,
    /// The literal `default`
    Default,
    /// A candidate sound file name, lowercased and extension-qualified
    Candidate(String),
}

/// Normalize a raw `-sound` token into a [`SoundToken`].
///
/// Short names get the platform extension appended; anything else is
/// lowercased and extension-qualified if it is not already.
pub fn normalize(raw: &str) -> SoundToken {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SoundToken::Empty;
    }
    if trimmed == "default" {
        return SoundToken::Default;
    }

    let lowered = trimmed.to_lowercase();
    let suffix = format!(".{SOUND_FILE_EXTENSION}");
    let candidate = if SHORT_NAMES.contains(&lowered.as_str()) || !lowered.ends_with(&suffix) {
        format!("{lowered}{suffix}")
    } else {
        lowered
    };

    SoundToken::Candidate(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_tokens_are_empty() {
        assert_eq!(normalize(""), SoundToken::Empty);
        assert_eq!(normalize("   "), SoundToken::Empty);
        assert_eq!(normalize("\t\n"), SoundToken::Empty);
    }

    #[test]
    fn literal_default_is_default() {
        assert_eq!(normalize("default"), SoundToken::Default);
    }

    #[test]
    fn capitalized_default_is_a_candidate() {
        // Only the exact literal is the default marker; anything else goes
        // through the candidate path and may fall back later.
        assert_eq!(
            normalize("Default"),
            SoundToken::Candidate("default.aiff".into())
        );
    }

    #[test]
    fn short_names_gain_the_extension() {
        for name in ["info", "warning", "complete", "end"] {
            assert_eq!(
                normalize(name),
                SoundToken::Candidate(format!("{name}.aiff"))
            );
        }
    }

    #[test]
    fn short_names_are_case_insensitive() {
        assert_eq!(normalize("INFO"), SoundToken::Candidate("info.aiff".into()));
        assert_eq!(
            normalize("Warning"),
            SoundToken::Candidate("warning.aiff".into())
        );
    }

    #[test]
    fn existing_extension_is_kept() {
        assert_eq!(
            normalize("warning.aiff"),
            SoundToken::Candidate("warning.aiff".into())
        );
        assert_eq!(
            normalize("Glass.AIFF"),
            SoundToken::Candidate("glass.aiff".into())
        );
    }

    #[test]
    fn missing_extension_is_appended() {
        assert_eq!(
            normalize("glass"),
            SoundToken::Candidate("glass.aiff".into())
        );
        assert_eq!(
            normalize("unknown-sound-xyz"),
            SoundToken::Candidate("unknown-sound-xyz.aiff".into())
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize("  default  "), SoundToken::Default);
        assert_eq!(
            normalize(" glass "),
            SoundToken::Candidate("glass.aiff".into())
        );
    }
}
