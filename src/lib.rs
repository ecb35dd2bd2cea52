//! videoxt parameter resolution library
//!
//! Turns raw extraction options (audio, clip, frames, gif) into a validated
//! job: a time range in seconds, timestamps and frames, output dimensions, a
//! collision-free destination and the expected frame count. Decoding and
//! encoding are left to an external media pipeline.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::ExtractInteractor;
pub use domain::errors::DomainError;
pub use domain::model::{
    Dimensions, ExtractionMethod, ExtractionRange, ExtractionRequest, ResolvedJob, TimeSpec, VideoMetadata,
};
pub use error::{VideoxtError, VideoxtResult};
