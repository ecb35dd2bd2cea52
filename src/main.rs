//! videoxt CLI
//!
//! Resolves the parameters of an audio, clip, frames or gif extraction and
//! prints the resulting job as JSON.
//!
//! # Usage
//!
//! ```bash
//! videoxt frames trip.mov --start-time 0:01:00 --stop-time 0:01:30 --capture-rate 10
//! videoxt audio trip.mov --audio-format wav --overwrite
//! videoxt gif trip.mov -s 12 -S 15 --resize 0.5 --bounce
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use videoxt::adapters::StdFsAdapter;
use videoxt::app::ExtractInteractor;
use videoxt::cli::{commands, Cli};
use videoxt::config_initialization::initialize_configuration_hierarchy;
use videoxt::ports::ProbePort;
use videoxt::utils::logging::{LogFormat, LoggingConfig, LoggingSystem};

/// Main entry point for the videoxt CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = initialize_configuration_hierarchy(&cli)?;

    LoggingSystem::new(LoggingConfig {
        level: settings.log_level,
        format: if settings.json_logs { LogFormat::Json } else { LogFormat::Pretty },
    })
    .initialize()?;

    let interactor = ExtractInteractor::new(probe_port()?, Arc::new(StdFsAdapter::new()))
        .with_labels(&settings.enumeration_label, &settings.frames_label);
    debug!("Starting {} command", cli.command.method());

    commands::execute(&cli.command, &settings, &interactor)
}

#[cfg(feature = "libav")]
fn probe_port() -> Result<Arc<dyn ProbePort>> {
    Ok(Arc::new(videoxt::adapters::ProbeLibavAdapter::new()?))
}

#[cfg(not(feature = "libav"))]
fn probe_port() -> Result<Arc<dyn ProbePort>> {
    Ok(Arc::new(videoxt::adapters::FfprobeAdapter::new()))
}
