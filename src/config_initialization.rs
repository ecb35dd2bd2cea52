//! Configuration initialization and hierarchy management

use tracing::{debug, info};

use crate::adapters::{Settings, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::{VideoxtError, VideoxtResult};

/// Environment variables read on top of the config file
pub const ENV_LOG_LEVEL: &str = "VIDEOXT_LOG_LEVEL";
pub const ENV_OVERWRITE: &str = "VIDEOXT_OVERWRITE";
pub const ENV_JSON_LOGS: &str = "VIDEOXT_JSON_LOGS";
pub const ENV_AUDIO_FORMAT: &str = "VIDEOXT_AUDIO_FORMAT";
pub const ENV_IMAGE_FORMAT: &str = "VIDEOXT_IMAGE_FORMAT";

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> VideoxtResult<Settings> {
    let settings = TomlConfigAdapter::load_or_default(cli.config.as_deref())?;
    let settings = apply_env_overrides(settings, |key| std::env::var(key).ok())?;
    let settings = apply_cli_overrides(settings, cli);

    debug!(?settings, "Configuration hierarchy initialized");
    Ok(settings)
}

/// Apply `VIDEOXT_*` overrides read through `lookup`
pub fn apply_env_overrides<F>(mut settings: Settings, lookup: F) -> VideoxtResult<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut overrides = 0;

    if let Some(value) = lookup(ENV_LOG_LEVEL) {
        settings.log_level = value.parse()?;
        overrides += 1;
    }
    if let Some(value) = lookup(ENV_OVERWRITE) {
        settings.overwrite = parse_flag(ENV_OVERWRITE, &value)?;
        overrides += 1;
    }
    if let Some(value) = lookup(ENV_JSON_LOGS) {
        settings.json_logs = parse_flag(ENV_JSON_LOGS, &value)?;
        overrides += 1;
    }
    if let Some(value) = lookup(ENV_AUDIO_FORMAT) {
        settings.audio_format = value.parse().map_err(|e| env_error(ENV_AUDIO_FORMAT, e))?;
        overrides += 1;
    }
    if let Some(value) = lookup(ENV_IMAGE_FORMAT) {
        settings.image_format = value.parse().map_err(|e| env_error(ENV_IMAGE_FORMAT, e))?;
        overrides += 1;
    }

    if overrides > 0 {
        info!("Applied {} environment variable overrides", overrides);
    }
    Ok(settings)
}

/// Apply the global CLI flags that shadow settings
pub fn apply_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    if cli.json_logs {
        settings.json_logs = true;
    }
    settings
}

fn parse_flag(key: &str, value: &str) -> VideoxtResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(VideoxtError::ConfigError {
            message: format!("{} expects a boolean, got '{}'", key, other),
        }),
    }
}

fn env_error(key: &str, error: impl std::fmt::Display) -> VideoxtError {
    VideoxtError::ConfigError {
        message: format!("{}: {}", key, error),
    }
}
