//! Local file system adapter

use std::path::Path;

use crate::application::ports::FileStore;

/// File store backed by the local file system
pub struct LocalFiles;

impl FileStore for LocalFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
