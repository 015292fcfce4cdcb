//! Platform sound library adapter
//!
//! Answers whether a named alert sound is installed by scanning the
//! platform's sound directories. Matching is case-insensitive because sound
//! tokens arrive lowercased while installed files usually are not
//! (`Glass.aiff`).

use std::path::PathBuf;

use crate::application::ports::SoundLibrary;

/// Sound library backed by the platform sound directories
pub struct SystemSoundLibrary {
    dirs: Vec<PathBuf>,
}

impl SystemSoundLibrary {
    /// Create a library over the platform's standard sound directories
    pub fn new() -> Self {
        Self {
            dirs: default_dirs(),
        }
    }

    /// Create a library over explicit directories
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl Default for SystemSoundLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundLibrary for SystemSoundLibrary {
    fn contains(&self, name: &str, extension: &str) -> bool {
        let target = format!("{name}.{extension}").to_lowercase();
        self.dirs.iter().any(|dir| {
            std::fs::read_dir(dir)
                .map(|entries| {
                    entries.flatten().any(|entry| {
                        entry.file_name().to_string_lossy().to_lowercase() == target
                    })
                })
                .unwrap_or(false)
        })
    }
}

#[cfg(target_os = "macos")]
fn default_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/System/Library/Sounds"),
        PathBuf::from("/Library/Sounds"),
    ];
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join("Library/Sounds"));
    }
    dirs
}

#[cfg(not(target_os = "macos"))]
fn default_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/sounds"),
        PathBuf::from("/usr/share/sounds/freedesktop/stereo"),
    ];
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join(".local/share/sounds"));
    }
    dirs
}
