//! FFprobe adapter for media file probing
//!
//! Runs the `ffprobe` executable against the first video stream and reads its
//! JSON report.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::model::{round_hundredths, Dimensions, VideoMetadata};
use crate::error::{VideoxtError, VideoxtResult};
use crate::ports::ProbePort;

/// FFprobe-based probe adapter
#[derive(Debug, Clone)]
pub struct FfprobeAdapter {
    binary: PathBuf,
}

impl Default for FfprobeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FfprobeAdapter {
    /// Use `ffprobe` from `PATH`
    pub fn new() -> Self {
        Self::with_binary("ffprobe")
    }

    /// Use a specific ffprobe executable
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self { binary: binary.into() }
    }

    /// Turn an ffprobe JSON report into video metadata.
    ///
    /// Frame rate is rounded to hundredths. When the container does not
    /// record a frame count it is estimated from the duration.
    pub fn parse_report(report: &str, video_path: &Path) -> VideoxtResult<VideoMetadata> {
        let unavailable = |reason: &str| VideoxtError::MetadataUnavailable {
            path: video_path.display().to_string(),
            reason: reason.to_string(),
        };

        let report: FfprobeReport = serde_json::from_str(report)?;
        let stream = report
            .streams
            .into_iter()
            .next()
            .ok_or_else(|| unavailable("no video stream found"))?;

        let (width, height) = match (stream.width, stream.height) {
            (Some(width), Some(height)) => (width, height),
            _ => return Err(unavailable("video stream has no dimensions")),
        };

        let fps = [stream.avg_frame_rate.as_deref(), stream.r_frame_rate.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(parse_rate)
            .next()
            .map(round_hundredths)
            .ok_or_else(|| unavailable("video stream has no frame rate"))?;

        let duration = stream
            .duration
            .as_deref()
            .or_else(|| report.format.as_ref().and_then(|format| format.duration.as_deref()))
            .and_then(|duration| duration.parse::<f64>().ok());

        let frame_count = match stream.nb_frames.as_deref().and_then(|n| n.parse::<u64>().ok()) {
            Some(frames) => frames,
            None => {
                let duration = duration.ok_or_else(|| unavailable("neither frame count nor duration reported"))?;
                (duration * fps).round() as u64
            }
        };

        let dimensions = Dimensions::new(width, height)?;
        Ok(VideoMetadata::new(
            dimensions,
            fps,
            frame_count,
            VideoMetadata::suffix_of(video_path),
        )?)
    }
}

impl ProbePort for FfprobeAdapter {
    fn probe(&self, video_path: &Path) -> VideoxtResult<VideoMetadata> {
        info!("Probing video file: {}", video_path.display());

        let output = Command::new(&self.binary)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height,avg_frame_rate,r_frame_rate,nb_frames,duration:format=duration",
                "-of",
                "json",
            ])
            .arg(video_path)
            .output()
            .map_err(|e| VideoxtError::ProbeError {
                message: format!("failed to run {}: {}", self.binary.display(), e),
            })?;

        if !output.status.success() {
            return Err(VideoxtError::MetadataUnavailable {
                path: video_path.display().to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let report = String::from_utf8_lossy(&output.stdout);
        debug!("ffprobe report: {}", report);
        Self::parse_report(&report, video_path)
    }
}

#[derive(Debug, Deserialize)]
struct FfprobeReport {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
    avg_frame_rate: Option<String>,
    r_frame_rate: Option<String>,
    nb_frames: Option<String>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// Parse `"30000/1001"` or `"25"`; zero and undefined rates yield `None`
fn parse_rate(rate: &str) -> Option<f64> {
    let value = match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => rate.trim().parse().ok()?,
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MP4_REPORT: &str = r#"{
        "programs": [],
        "streams": [
            {
                "width": 1920,
                "height": 1080,
                "r_frame_rate": "30000/1001",
                "avg_frame_rate": "30000/1001",
                "duration": "20.020000",
                "nb_frames": "600"
            }
        ],
        "format": { "duration": "20.053000" }
    }"#;

    #[test]
    fn test_parse_report() {
        let video = FfprobeAdapter::parse_report(MP4_REPORT, Path::new("/videos/a.mp4")).unwrap();
        assert_eq!(video.dimensions, Dimensions::new(1920, 1080).unwrap());
        assert_eq!(video.fps, 29.97);
        assert_eq!(video.frame_count, 600);
        assert_eq!(video.duration_seconds, 20.02);
        assert_eq!(video.format_suffix, "mp4");
    }

    #[test]
    fn test_parse_report_estimates_missing_frame_count() {
        let report = r#"{
            "streams": [ { "width": 640, "height": 360, "avg_frame_rate": "0/0", "r_frame_rate": "25/1" } ],
            "format": { "duration": "10.0" }
        }"#;
        let video = FfprobeAdapter::parse_report(report, Path::new("clip.mkv")).unwrap();
        assert_eq!(video.fps, 25.0);
        assert_eq!(video.frame_count, 250);
        assert_eq!(video.duration_seconds, 10.0);
    }

    #[test]
    fn test_parse_report_without_video_stream() {
        let err = FfprobeAdapter::parse_report(r#"{ "streams": [] }"#, Path::new("a.mp3")).unwrap_err();
        assert!(matches!(err, VideoxtError::MetadataUnavailable { .. }));
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("25/1"), Some(25.0));
        assert_eq!(parse_rate("24"), Some(24.0));
        assert_eq!(parse_rate("0/0"), None);
        assert_eq!(parse_rate("abc"), None);
    }

    #[test]
    fn test_missing_binary_is_probe_error() {
        let adapter = FfprobeAdapter::with_binary("/nonexistent/ffprobe-binary");
        let err = adapter.probe(Path::new("a.mp4")).unwrap_err();
        assert!(matches!(err, VideoxtError::ProbeError { .. }));
    }
}
