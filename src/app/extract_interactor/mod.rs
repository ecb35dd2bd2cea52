// Extract interactor - Resolves a raw extraction request into a validated job

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::error::{VideoxtError, VideoxtResult};
use crate::output::{DestinationResolver, OverwritePolicy, DEFAULT_ENUMERATION_LABEL, DEFAULT_FRAMES_LABEL};
use crate::ports::{FsPort, ProbePort};

/// Interactor for the extraction use case.
///
/// Resolution is all-or-nothing: either every derived value is valid or the
/// first error is returned and no job is produced.
pub struct ExtractInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    enumeration_label: String,
    frames_label: String,
}

impl ExtractInteractor {
    /// Create new extract interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            probe_port,
            fs_port,
            enumeration_label: DEFAULT_ENUMERATION_LABEL.to_string(),
            frames_label: DEFAULT_FRAMES_LABEL.to_string(),
        }
    }

    /// Override the labels used for enumerated files and frame directories
    pub fn with_labels(mut self, enumeration_label: impl Into<String>, frames_label: impl Into<String>) -> Self {
        self.enumeration_label = enumeration_label.into();
        self.frames_label = frames_label.into();
        self
    }

    /// Probe the video and resolve the request against its metadata
    pub fn resolve(&self, request: ExtractionRequest) -> VideoxtResult<ResolvedJob> {
        if !self.fs_port.is_file(&request.video_path) {
            return Err(VideoxtError::InputFileNotFound {
                path: request.video_path.display().to_string(),
            });
        }

        let video = self.probe_port.probe(&request.video_path)?;
        debug!(
            fps = video.fps,
            frame_count = video.frame_count,
            duration = video.duration_seconds,
            "Read video metadata"
        );

        Ok(self.resolve_with_metadata(request, video)?)
    }

    /// Resolve the request against already known metadata
    pub fn resolve_with_metadata(
        &self,
        request: ExtractionRequest,
        video: VideoMetadata,
    ) -> Result<ResolvedJob, DomainError> {
        Self::validate_options(&request)?;

        let start_time = ParameterDefaults::start_time_or(request.start_time.clone());
        let stop_time = ParameterDefaults::stop_time_or(video.duration_seconds, request.stop_time.clone());
        let fps = ParameterDefaults::fps_or(video.fps, request.fps);

        // The container's frame count only holds at the container's rate.
        let frame_count = if fps == video.fps {
            video.frame_count
        } else {
            (video.duration_seconds * fps).floor() as u64
        };

        let range = RangeResolver::resolve(
            video.duration_seconds,
            frame_count,
            Some(start_time),
            Some(stop_time),
            Some(fps),
        )?;

        let dimensions = if request.method.has_dimensions() {
            Some(DimensionResolver::resolve(
                video.dimensions,
                request.resize,
                request.dimensions,
            )?)
        } else {
            None
        };

        let resolver = DestinationResolver::new(self.fs_port.as_ref())
            .with_labels(&self.enumeration_label, &self.frames_label);
        let overwrite = OverwritePolicy::from(request.overwrite);
        let output_format = request.output_format();

        let destination = match request.method {
            ExtractionMethod::Frames => {
                resolver.resolve_frames_dir(&request.video_path, request.destdir.as_deref(), overwrite)?
            }
            _ => resolver.resolve_destination(
                &request.video_path,
                request.filename.as_deref(),
                request.destdir.as_deref(),
                Some(output_format),
                overwrite,
            )?,
        };

        let capture_rate = match request.method {
            ExtractionMethod::Frames => Some(request.capture_rate),
            _ => None,
        };
        let expected_frames = if request.method.has_dimensions() {
            Some(FrameCountEstimator::expected_count(
                Some(range.start().frame),
                Some(range.stop().frame),
                Some(capture_rate.unwrap_or(1)),
            )?)
        } else {
            None
        };

        let job = ResolvedJob {
            method: request.method,
            video_path: request.video_path,
            video,
            fps,
            range,
            dimensions,
            destination,
            output_format: output_format.to_string(),
            capture_rate,
            expected_frames,
            effects: request.effects,
        };

        info!(
            method = %job.method,
            destination = %job.destination.display(),
            start = %job.range.start().timestamp,
            stop = %job.range.stop().timestamp,
            "Resolved extraction job"
        );

        Ok(job)
    }

    fn validate_options(request: &ExtractionRequest) -> Result<(), DomainError> {
        if let Some(fps) = request.fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(DomainError::Validation(format!("fps must be positive, got {}", fps)));
            }
        }
        if !request.resize.is_finite() || request.resize <= 0.0 {
            return Err(DomainError::Validation(format!(
                "resize factor must be positive, got {}",
                request.resize
            )));
        }
        if request.method == ExtractionMethod::Frames && request.capture_rate == 0 {
            return Err(DomainError::Validation("capture rate must be at least 1".to_string()));
        }
        if !request.effects.speed.is_finite() || request.effects.speed <= 0.0 {
            return Err(DomainError::Validation(format!(
                "speed must be positive, got {}",
                request.effects.speed
            )));
        }
        if !request.effects.volume.is_finite() || request.effects.volume < 0.0 {
            return Err(DomainError::Validation(format!(
                "volume cannot be negative, got {}",
                request.effects.volume
            )));
        }
        if let Some(filename) = &request.filename {
            if filename.is_empty() || filename.contains(['/', '\\']) {
                return Err(DomainError::Validation(format!(
                    "filename '{}' must be a bare name without directories",
                    filename
                )));
            }
        }
        Ok(())
    }
}
