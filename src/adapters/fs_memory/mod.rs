// In-memory filesystem adapter - Deterministic fake for tests and dry runs

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::ports::FsPort;
use crate::utils::path::normalize_lexically;

/// Filesystem fake holding a set of existing file paths.
///
/// Every ancestor of a stored path counts as an existing directory.
#[derive(Debug, Default)]
pub struct MemoryFsAdapter {
    files: RwLock<HashSet<PathBuf>>,
}

impl MemoryFsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fake already holding `paths`
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: RwLock::new(
                paths
                    .into_iter()
                    .map(|path| normalize_lexically(&path.into()))
                    .collect(),
            ),
        }
    }

    /// Record a file as existing
    pub fn insert(&self, path: impl Into<PathBuf>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(normalize_lexically(&path.into()));
        }
    }
}

impl FsPort for MemoryFsAdapter {
    fn exists(&self, path: &Path) -> bool {
        let path = normalize_lexically(path);
        self.files
            .read()
            .map(|files| files.iter().any(|file| file.starts_with(&path)))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = normalize_lexically(path);
        self.files
            .read()
            .map(|files| files.contains(&path))
            .unwrap_or(false)
    }
}
