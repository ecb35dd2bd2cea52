// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::utils::time;

/// A point in time as the user supplied it - either seconds or a timestamp.
///
/// Timestamps are kept verbatim so a resolved range can echo them back with
/// the user's own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSpec {
    Seconds(f64),
    Timestamp(String),
}

impl TimeSpec {
    /// Parse user input: a plain number is seconds, anything else must be a
    /// valid `H:MM:SS` timestamp.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();

        if let Ok(seconds) = trimmed.parse::<f64>() {
            if !seconds.is_finite() {
                return Err(DomainError::Format(format!("'{}' is not a finite number", trimmed)));
            }
            return Ok(Self::Seconds(seconds));
        }

        time::to_seconds(trimmed)?;
        Ok(Self::Timestamp(trimmed.to_string()))
    }

    /// Value in seconds
    pub fn to_seconds(&self) -> Result<f64, DomainError> {
        match self {
            TimeSpec::Seconds(seconds) => Ok(*seconds),
            TimeSpec::Timestamp(timestamp) => time::to_seconds(timestamp),
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, TimeSpec::Timestamp(_))
    }
}

impl FromStr for TimeSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<f64> for TimeSpec {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<u32> for TimeSpec {
    fn from(seconds: u32) -> Self {
        Self::Seconds(f64::from(seconds))
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSpec::Seconds(seconds) => write!(f, "{}", seconds),
            TimeSpec::Timestamp(timestamp) => write!(f, "{}", timestamp),
        }
    }
}

/// Frame dimensions in pixels; both sides are always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting a zero width or height
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::Validation(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Deserialize)]
struct RawDimensions {
    width: u32,
    height: u32,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = DomainError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Properties read from a video file by the media-metadata collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoMetadata {
    pub dimensions: Dimensions,
    pub fps: f64,
    pub frame_count: u64,
    pub duration_seconds: f64,
    pub duration_timestamp: String,
    /// File extension without the leading period
    pub format_suffix: String,
}

impl VideoMetadata {
    /// Create metadata with validation, deriving the duration from the frame
    /// count and frame rate (rounded to hundredths of a second).
    pub fn new(
        dimensions: Dimensions,
        fps: f64,
        frame_count: u64,
        format_suffix: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(DomainError::Validation(format!("video fps must be positive, got {}", fps)));
        }

        let duration_seconds = round_hundredths(frame_count as f64 / fps);
        let duration_timestamp = time::to_timestamp(duration_seconds)?;

        Ok(Self {
            dimensions,
            fps,
            frame_count,
            duration_seconds,
            duration_timestamp,
            format_suffix: format_suffix.into(),
        })
    }

    /// Extension of `path` without the leading period
    pub fn suffix_of(path: &Path) -> String {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Round to two decimal places
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One endpoint of a resolved range in every coordinate system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangePoint {
    pub second: f64,
    pub timestamp: String,
    pub frame: u64,
}

/// A validated extraction range.
///
/// Only the range resolver builds one, so `0 <= start < stop <= duration`
/// always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionRange {
    start: RangePoint,
    stop: RangePoint,
}

impl ExtractionRange {
    pub(crate) fn new(start: RangePoint, stop: RangePoint) -> Self {
        Self { start, stop }
    }

    pub fn start(&self) -> &RangePoint {
        &self.start
    }

    pub fn stop(&self) -> &RangePoint {
        &self.stop
    }

    /// Length of the range in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.stop.second - self.start.second
    }
}

/// What gets pulled out of the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Audio,
    Clip,
    Frames,
    Gif,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::Audio => "audio",
            ExtractionMethod::Clip => "clip",
            ExtractionMethod::Frames => "frames",
            ExtractionMethod::Gif => "gif",
        }
    }

    /// Whether the output carries images and therefore has dimensions
    pub fn has_dimensions(&self) -> bool {
        !matches!(self, ExtractionMethod::Audio)
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio" => Ok(ExtractionMethod::Audio),
            "clip" => Ok(ExtractionMethod::Clip),
            "frames" => Ok(ExtractionMethod::Frames),
            "gif" => Ok(ExtractionMethod::Gif),
            other => Err(DomainError::Validation(format!(
                "unknown extraction method '{}', choices are audio, clip, frames, gif",
                other
            ))),
        }
    }
}

/// Supported audio output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    M4a,
    #[default]
    Mp3,
    Ogg,
    Wav,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 4] = [AudioFormat::M4a, AudioFormat::Mp3, AudioFormat::Ogg, AudioFormat::Wav];

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::M4a => "m4a",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Wav => "wav",
        }
    }
}

impl FromStr for AudioFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_format(s);
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == wanted)
            .ok_or_else(|| DomainError::Validation(format!("unsupported audio format '{}'", s)))
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Supported image formats for extracted frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Bmp,
    Dib,
    Jpeg,
    #[default]
    Jpg,
    Png,
    Tiff,
    Tif,
    Webp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 8] = [
        ImageFormat::Bmp,
        ImageFormat::Dib,
        ImageFormat::Jpeg,
        ImageFormat::Jpg,
        ImageFormat::Png,
        ImageFormat::Tiff,
        ImageFormat::Tif,
        ImageFormat::Webp,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Dib => "dib",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Tif => "tif",
            ImageFormat::Webp => "webp",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_format(s);
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == wanted)
            .ok_or_else(|| DomainError::Validation(format!("unsupported image format '{}'", s)))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn normalize_format(s: &str) -> String {
    s.trim().trim_start_matches('.').to_lowercase()
}

/// Clockwise rotation in degrees: 0, 90, 180 or 270
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Rotation(u16);

impl Rotation {
    pub const VALID: [u16; 4] = [0, 90, 180, 270];

    pub fn new(degrees: u16) -> Result<Self, DomainError> {
        if Self::VALID.contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(DomainError::Validation(format!(
                "rotation must be one of 0, 90, 180, 270, got {}",
                degrees
            )))
        }
    }

    pub fn degrees(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Rotation {
    type Error = DomainError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

impl FromStr for Rotation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s
            .trim()
            .parse::<u16>()
            .map_err(|_| DomainError::Validation(format!("rotation '{}' is not a number", s)))?;
        Self::new(degrees)
    }
}

/// Effects passed through to the media pipeline untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    pub rotate: Rotation,
    pub monochrome: bool,
    pub speed: f64,
    pub volume: f64,
    pub bounce: bool,
    pub reverse: bool,
    pub normalize: bool,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            rotate: Rotation::default(),
            monochrome: false,
            speed: 1.0,
            volume: 1.0,
            bounce: false,
            reverse: false,
            normalize: false,
        }
    }
}

/// Raw, possibly incomplete extraction options as collected from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub method: ExtractionMethod,
    pub video_path: PathBuf,
    pub start_time: Option<TimeSpec>,
    pub stop_time: Option<TimeSpec>,
    pub fps: Option<f64>,
    pub destdir: Option<PathBuf>,
    pub filename: Option<String>,
    pub overwrite: bool,
    pub dimensions: Option<Dimensions>,
    pub resize: f64,
    pub capture_rate: u32,
    pub audio_format: AudioFormat,
    pub image_format: ImageFormat,
    pub effects: Effects,
}

impl ExtractionRequest {
    /// Request with every option left at its default
    pub fn new(method: ExtractionMethod, video_path: impl Into<PathBuf>) -> Self {
        Self {
            method,
            video_path: video_path.into(),
            start_time: None,
            stop_time: None,
            fps: None,
            destdir: None,
            filename: None,
            overwrite: false,
            dimensions: None,
            resize: 1.0,
            capture_rate: 1,
            audio_format: AudioFormat::default(),
            image_format: ImageFormat::default(),
            effects: Effects::default(),
        }
    }

    /// Extension of the produced file, or of each frame for `frames`
    pub fn output_format(&self) -> &'static str {
        match self.method {
            ExtractionMethod::Audio => self.audio_format.extension(),
            ExtractionMethod::Clip => "mp4",
            ExtractionMethod::Gif => "gif",
            ExtractionMethod::Frames => self.image_format.extension(),
        }
    }
}

/// A fully validated extraction job, ready for the media pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedJob {
    pub method: ExtractionMethod,
    pub video_path: PathBuf,
    pub video: VideoMetadata,
    pub fps: f64,
    pub range: ExtractionRange,
    /// Absent for audio
    pub dimensions: Option<Dimensions>,
    /// Output file, or the output directory for `frames`
    pub destination: PathBuf,
    pub output_format: String,
    /// Only set for `frames`
    pub capture_rate: Option<u32>,
    /// Absent for audio
    pub expected_frames: Option<u64>,
    pub effects: Effects,
}

#[cfg(test)]
mod tests;
