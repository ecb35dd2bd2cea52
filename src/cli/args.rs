//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::domain::errors::DomainError;
use crate::domain::model::{AudioFormat, Dimensions, ImageFormat, Rotation, TimeSpec};

/// Options shared by every extraction method
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the video file
    pub filepath: PathBuf,

    /// Start time, in seconds or as a timestamp (H:MM:SS)
    #[arg(short = 's', long, value_parser = TimeSpec::parse)]
    pub start_time: Option<TimeSpec>,

    /// Stop time, in seconds or as a timestamp; 0 means the end of the video
    #[arg(short = 'S', long, value_parser = TimeSpec::parse)]
    pub stop_time: Option<TimeSpec>,

    /// Frame rate used to convert times to frames (default: the video's)
    #[arg(short = 'f', long)]
    pub fps: Option<f64>,

    /// Directory to write output to (default: next to the video)
    #[arg(short = 'd', long)]
    pub destdir: Option<PathBuf>,

    /// Output file name without extension (default: the video's stem)
    #[arg(long)]
    pub filename: Option<String>,

    /// Replace an existing output instead of enumerating a new name
    #[arg(long)]
    pub overwrite: bool,

    /// Do not print the resolved job
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Audio effects
#[derive(Args, Debug, Clone)]
pub struct AudioEffectArgs {
    /// Volume multiplier
    #[arg(long, default_value_t = 1.0)]
    pub volume: f64,

    /// Normalize the audio
    #[arg(long)]
    pub normalize: bool,
}

/// Options for methods producing images
#[derive(Args, Debug, Clone)]
pub struct ImageArgs {
    /// Output dimensions before resizing (default: the video's)
    #[arg(
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub dimensions: Option<Vec<u32>>,

    /// Scale factor applied to the output dimensions
    #[arg(long, default_value_t = 1.0)]
    pub resize: f64,

    /// Clockwise rotation: 0, 90, 180 or 270
    #[arg(long, default_value = "0")]
    pub rotate: Rotation,

    /// Convert to black and white
    #[arg(long)]
    pub monochrome: bool,
}

impl ImageArgs {
    /// Explicit dimensions, if given
    pub fn dimensions(&self) -> Result<Option<Dimensions>, DomainError> {
        match self.dimensions.as_deref() {
            Some(&[width, height]) => Ok(Some(Dimensions::new(width, height)?)),
            Some(other) => Err(DomainError::Validation(format!(
                "dimensions take a width and a height, got {} values",
                other.len()
            ))),
            None => Ok(None),
        }
    }
}

/// Playback effects
#[derive(Args, Debug, Clone)]
pub struct MotionArgs {
    /// Playback speed multiplier
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Play forwards then backwards
    #[arg(long)]
    pub bounce: bool,

    /// Play backwards
    #[arg(long)]
    pub reverse: bool,
}

/// Arguments for the audio command
#[derive(Args, Debug, Clone)]
pub struct AudioArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub audio: AudioEffectArgs,

    #[command(flatten)]
    pub motion: MotionArgs,

    /// Audio file format (default: from config, else mp3)
    #[arg(long)]
    pub audio_format: Option<AudioFormat>,
}

/// Arguments for the clip command
#[derive(Args, Debug, Clone)]
pub struct ClipArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub audio: AudioEffectArgs,

    #[command(flatten)]
    pub image: ImageArgs,

    #[command(flatten)]
    pub motion: MotionArgs,
}

/// Arguments for the frames command
#[derive(Args, Debug, Clone)]
pub struct FramesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub image: ImageArgs,

    /// Image file format (default: from config, else jpg)
    #[arg(long)]
    pub image_format: Option<ImageFormat>,

    /// Keep every Nth frame
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub capture_rate: u32,
}

/// Arguments for the gif command
#[derive(Args, Debug, Clone)]
pub struct GifArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub image: ImageArgs,

    #[command(flatten)]
    pub motion: MotionArgs,
}
