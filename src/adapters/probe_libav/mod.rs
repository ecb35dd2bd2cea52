// Probe LibAV adapter - Media file analysis using libav

use std::path::Path;

use ffmpeg_next as ffmpeg;
use tracing::info;

use crate::domain::model::{round_hundredths, Dimensions, VideoMetadata};
use crate::error::{VideoxtError, VideoxtResult};
use crate::ports::ProbePort;

/// LibAV-based media probing adapter
pub struct ProbeLibavAdapter;

impl ProbeLibavAdapter {
    /// Create new LibAV probing adapter
    pub fn new() -> VideoxtResult<Self> {
        ffmpeg::init().map_err(|e| VideoxtError::FFmpegInitError {
            message: e.to_string(),
        })?;
        Ok(Self)
    }

    fn rational_to_f64(rational: ffmpeg::Rational) -> Option<f64> {
        if rational.denominator() == 0 || rational.numerator() <= 0 {
            return None;
        }
        Some(f64::from(rational.numerator()) / f64::from(rational.denominator()))
    }
}

impl ProbePort for ProbeLibavAdapter {
    fn probe(&self, video_path: &Path) -> VideoxtResult<VideoMetadata> {
        info!("Probing video file with libav: {}", video_path.display());

        let unavailable = |reason: String| VideoxtError::MetadataUnavailable {
            path: video_path.display().to_string(),
            reason,
        };

        let input = ffmpeg::format::input(&video_path).map_err(|e| unavailable(e.to_string()))?;
        let stream = input
            .streams()
            .best(ffmpeg::media::Type::Video)
            .ok_or_else(|| unavailable("no video stream found".to_string()))?;

        let fps = Self::rational_to_f64(stream.avg_frame_rate())
            .or_else(|| Self::rational_to_f64(stream.rate()))
            .map(round_hundredths)
            .ok_or_else(|| unavailable("video stream has no frame rate".to_string()))?;

        let decoder = ffmpeg::codec::context::Context::from_parameters(stream.parameters())?
            .decoder()
            .video()?;

        let frame_count = if stream.frames() > 0 {
            stream.frames() as u64
        } else {
            let time_base = Self::rational_to_f64(stream.time_base()).unwrap_or(0.0);
            let seconds = if stream.duration() > 0 {
                stream.duration() as f64 * time_base
            } else {
                input.duration().max(0) as f64 / f64::from(ffmpeg::ffi::AV_TIME_BASE)
            };
            (seconds * fps).round() as u64
        };

        let dimensions = Dimensions::new(decoder.width(), decoder.height())?;
        Ok(VideoMetadata::new(
            dimensions,
            fps,
            frame_count,
            VideoMetadata::suffix_of(video_path),
        )?)
    }
}
