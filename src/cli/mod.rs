//! CLI module for videoxt
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::model::ExtractionMethod;
use crate::utils::logging::LogLevel;

pub mod args;
pub mod commands;

/// Resolve audio, clip, frame and GIF extraction jobs from a video
#[derive(Parser, Debug)]
#[command(name = "videoxt")]
#[command(about = "Resolve video extraction parameters against the video's metadata")]
#[command(version)]
pub struct Cli {
    /// Logging level (overrides config and VIDEOXT_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Config file (default: ./videoxt.toml when present)
    #[arg(long, global = true, env = "VIDEOXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Extract the audio track
    Audio(args::AudioArgs),
    /// Extract a shorter video clip
    Clip(args::ClipArgs),
    /// Extract individual frames as images
    Frames(args::FramesArgs),
    /// Extract an animated GIF
    Gif(args::GifArgs),
}

impl Commands {
    pub fn method(&self) -> ExtractionMethod {
        match self {
            Commands::Audio(_) => ExtractionMethod::Audio,
            Commands::Clip(_) => ExtractionMethod::Clip,
            Commands::Frames(_) => ExtractionMethod::Frames,
            Commands::Gif(_) => ExtractionMethod::Gif,
        }
    }

    pub fn common(&self) -> &args::CommonArgs {
        match self {
            Commands::Audio(args) => &args.common,
            Commands::Clip(args) => &args.common,
            Commands::Frames(args) => &args.common,
            Commands::Gif(args) => &args.common,
        }
    }
}
