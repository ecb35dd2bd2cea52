// Std filesystem adapter - Existence checks against the real filesystem

use std::path::Path;

use crate::ports::FsPort;
use crate::utils::path::normalize_lexically;

/// Filesystem adapter backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for StdFsAdapter {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        path.exists() || path.symlink_metadata().is_ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => normalize_lexically(a) == normalize_lexically(b),
        }
    }
}
