//! Resource probe adapters (file system and sound library)

mod local_files;
mod sound_library;

pub use local_files::LocalFiles;
pub use sound_library::SystemSoundLibrary;
