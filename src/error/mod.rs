//! Error handling module for videoxt

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for videoxt operations
#[derive(Error, Debug)]
pub enum VideoxtError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// The metadata collaborator could not read the video
    #[error("Video metadata unavailable for {path}: {reason}")]
    MetadataUnavailable { path: String, reason: String },

    /// Media probe error
    #[error("Failed to probe media file: {message}")]
    ProbeError { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Resolution of the extraction request failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML config parse error
    #[error("Failed to parse config: {0}")]
    TomlError(#[from] toml::de::Error),

    /// FFmpeg initialization error
    #[cfg(feature = "libav")]
    #[error("Failed to initialize FFmpeg: {message}")]
    FFmpegInitError { message: String },

    /// FFmpeg error
    #[cfg(feature = "libav")]
    #[error("FFmpeg error: {0}")]
    FFmpegError(#[from] ffmpeg_next::Error),
}

impl VideoxtError {
    /// The domain error behind this failure, if resolution caused it
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            VideoxtError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for videoxt operations
pub type VideoxtResult<T> = std::result::Result<T, VideoxtError>;
