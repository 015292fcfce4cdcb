//! Sound library port interface

/// Port for probing the platform's bundled alert sounds
pub trait SoundLibrary: Send + Sync {
    /// Whether a sound resource `name.extension` is available
    fn contains(&self, name: &str, extension: &str) -> bool;
}
