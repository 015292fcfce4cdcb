//! File system port interface

use std::path::Path;

/// Port for the single file-system question this tool asks: does the
/// attachment image exist?
pub trait FileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}
