//! Destination path resolution for extracted media
//!
//! Files land next to the video unless a directory is given, named after the
//! video unless a filename is given. Without overwrite permission an existing
//! name is enumerated instead of replaced.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::errors::DomainError;
use crate::ports::FsPort;
use crate::utils::path::{enumerate_dir, enumerate_filepath};

/// Label inserted before the number of an enumerated file name
pub const DEFAULT_ENUMERATION_LABEL: &str = "_vxt";
/// Suffix of the default directory extracted frames are written to
pub const DEFAULT_FRAMES_LABEL: &str = "_frames";

/// Overwrite policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace an existing destination
    Always,
    /// Pick a free enumerated name instead
    #[default]
    Never,
}

impl OverwritePolicy {
    pub fn allows_overwrite(&self) -> bool {
        matches!(self, OverwritePolicy::Always)
    }
}

impl From<bool> for OverwritePolicy {
    fn from(overwrite: bool) -> Self {
        if overwrite {
            OverwritePolicy::Always
        } else {
            OverwritePolicy::Never
        }
    }
}

/// Resolves output file and directory paths
pub struct DestinationResolver<'a> {
    fs: &'a dyn FsPort,
    enumeration_label: String,
    frames_label: String,
}

impl<'a> DestinationResolver<'a> {
    pub fn new(fs: &'a dyn FsPort) -> Self {
        Self {
            fs,
            enumeration_label: DEFAULT_ENUMERATION_LABEL.to_string(),
            frames_label: DEFAULT_FRAMES_LABEL.to_string(),
        }
    }

    /// Override the enumeration and frames-directory labels
    pub fn with_labels(mut self, enumeration_label: &str, frames_label: &str) -> Self {
        self.enumeration_label = enumeration_label.to_string();
        self.frames_label = frames_label.to_string();
        self
    }

    /// Build the output file path for a single-file extraction.
    ///
    /// Even with overwrite allowed the source video itself is never returned;
    /// a colliding name is enumerated instead.
    pub fn resolve_destination(
        &self,
        video_path: &Path,
        explicit_filename: Option<&str>,
        explicit_dir: Option<&Path>,
        required_suffix: Option<&str>,
        overwrite: OverwritePolicy,
    ) -> Result<PathBuf, DomainError> {
        let suffix = required_suffix
            .and_then(normalize_suffix)
            .ok_or_else(|| DomainError::Preparation("output suffix is unset".to_string()))?;

        let directory = explicit_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| parent_dir(video_path));

        let stem = match explicit_filename.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => video_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .ok_or_else(|| {
                    DomainError::Preparation(format!(
                        "video path {} has no file name",
                        video_path.display()
                    ))
                })?,
        };

        let candidate = directory.join(format!("{}{}", stem, suffix));
        debug!("Destination candidate: {}", candidate.display());

        if overwrite.allows_overwrite() && !self.fs.same_file(&candidate, video_path) {
            return Ok(candidate);
        }

        Ok(enumerate_filepath(self.fs, &candidate, &self.enumeration_label))
    }

    /// Build the directory extracted frames are written to.
    ///
    /// An explicit directory is used as given. The default sits next to the
    /// video as `<video file name><frames label>`.
    pub fn resolve_frames_dir(
        &self,
        video_path: &Path,
        explicit_dir: Option<&Path>,
        overwrite: OverwritePolicy,
    ) -> Result<PathBuf, DomainError> {
        if let Some(dir) = explicit_dir {
            return Ok(dir.to_path_buf());
        }

        let name = video_path.file_name().ok_or_else(|| {
            DomainError::Preparation(format!(
                "video path {} has no file name",
                video_path.display()
            ))
        })?;

        let default_dir = parent_dir(video_path)
            .join(format!("{}{}", name.to_string_lossy(), self.frames_label));

        if overwrite.allows_overwrite() {
            return Ok(default_dir);
        }

        Ok(enumerate_dir(self.fs, &default_dir))
    }
}

/// Ensure a leading period; `None` when nothing but periods or whitespace
fn normalize_suffix(suffix: &str) -> Option<String> {
    let bare = suffix.trim().trim_start_matches('.');
    if bare.is_empty() {
        None
    } else {
        Some(format!(".{}", bare))
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
