// Ports - Interface definitions (contracts)

use std::path::Path;

use crate::domain::model::VideoMetadata;
use crate::error::VideoxtResult;
use crate::utils::path::normalize_lexically;

/// Port for reading video metadata.
///
/// Implementations fail as a whole when the file cannot be opened; partial
/// metadata is never returned.
pub trait ProbePort: Send + Sync {
    /// Read dimensions, frame rate and frame count for a video file
    fn probe(&self, video_path: &Path) -> VideoxtResult<VideoMetadata>;
}

/// Port for the filesystem checks made while resolving destinations
pub trait FsPort: Send + Sync {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Whether two spellings name the same file
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        normalize_lexically(a) == normalize_lexically(b)
    }
}
