// Static probe adapter - Serves fixed metadata without touching media files

use std::path::Path;

use crate::domain::model::VideoMetadata;
use crate::error::VideoxtResult;
use crate::ports::ProbePort;

/// Probe that answers every request with the same metadata.
///
/// Useful when metadata is already known, e.g. from a previous probe.
#[derive(Debug, Clone)]
pub struct StaticProbeAdapter {
    metadata: VideoMetadata,
}

impl StaticProbeAdapter {
    pub fn new(metadata: VideoMetadata) -> Self {
        Self { metadata }
    }
}

impl ProbePort for StaticProbeAdapter {
    fn probe(&self, _video_path: &Path) -> VideoxtResult<VideoMetadata> {
        Ok(self.metadata.clone())
    }
}
