//! Collision-free path enumeration
//!
//! Probing goes through [`FsPort`] so the same logic runs against the real
//! filesystem or an in-memory fake. Concurrent processes writing into the
//! same directory can still race between the probe and the write.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::ports::FsPort;

/// Return `candidate` if it is free, else the lowest free
/// `<stem><label><n>.<ext>` for `n = 1, 2, ...`.
pub fn enumerate_filepath(fs: &dyn FsPort, candidate: &Path, label: &str) -> PathBuf {
    if !fs.exists(candidate) {
        return candidate.to_path_buf();
    }

    let stem = candidate
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = candidate
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    first_free(fs, candidate, |n| format!("{}{}{}{}", stem, label, n, extension))
}

/// Return `candidate` if it is free, else the lowest free `<name>_<n>`.
pub fn enumerate_dir(fs: &dyn FsPort, candidate: &Path) -> PathBuf {
    if !fs.exists(candidate) {
        return candidate.to_path_buf();
    }

    let name = candidate
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    first_free(fs, candidate, |n| format!("{}_{}", name, n))
}

/// Drop `.` components and fold `..` into its parent without touching the
/// filesystem. A leading `..` of a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn first_free(fs: &dyn FsPort, candidate: &Path, name_for: impl Fn(u64) -> String) -> PathBuf {
    warn!("{} already exists, enumerating a free name", candidate.display());

    let mut n: u64 = 1;
    loop {
        let probe = candidate.with_file_name(name_for(n));
        if !fs.exists(&probe) {
            debug!("Enumerated free path: {}", probe.display());
            return probe;
        }
        n += 1;
    }
}
