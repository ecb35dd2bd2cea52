// TOML config adapter - Settings loaded from a `[videoxt]` table

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::model::{AudioFormat, ImageFormat};
use crate::error::{VideoxtError, VideoxtResult};
use crate::output::{DEFAULT_ENUMERATION_LABEL, DEFAULT_FRAMES_LABEL};
use crate::utils::logging::LogLevel;

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "videoxt.toml";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub log_level: LogLevel,
    pub json_logs: bool,
    pub overwrite: bool,
    pub audio_format: AudioFormat,
    pub image_format: ImageFormat,
    pub enumeration_label: String,
    pub frames_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            json_logs: false,
            overwrite: false,
            audio_format: AudioFormat::default(),
            image_format: ImageFormat::default(),
            enumeration_label: DEFAULT_ENUMERATION_LABEL.to_string(),
            frames_label: DEFAULT_FRAMES_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    videoxt: Settings,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse settings from TOML text
    pub fn parse(toml_content: &str) -> VideoxtResult<Settings> {
        let file: ConfigFile = toml::from_str(toml_content)?;
        Self::validate(&file.videoxt)?;
        Ok(file.videoxt)
    }

    /// Load settings from a file that must exist
    pub fn load(path: &Path) -> VideoxtResult<Settings> {
        let content = std::fs::read_to_string(path).map_err(|e| VideoxtError::ConfigError {
            message: format!("failed to read config file {}: {}", path.display(), e),
        })?;
        info!("Loaded configuration from: {}", path.display());
        Self::parse(&content)
    }

    /// Load `explicit` if given, else `videoxt.toml` when present, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> VideoxtResult<Settings> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Settings::default())
                }
            }
        }
    }

    /// Serialize settings back to TOML
    pub fn serialize(settings: &Settings) -> VideoxtResult<String> {
        #[derive(Serialize)]
        struct Out<'a> {
            videoxt: &'a Settings,
        }
        toml::to_string(&Out { videoxt: settings }).map_err(|e| VideoxtError::ConfigError {
            message: format!("failed to serialize config: {}", e),
        })
    }

    fn validate(settings: &Settings) -> VideoxtResult<()> {
        if settings.enumeration_label.is_empty() || settings.frames_label.is_empty() {
            return Err(VideoxtError::ConfigError {
                message: "enumeration_label and frames_label cannot be empty".to_string(),
            });
        }
        let separators = ['/', '\\'];
        if settings.enumeration_label.contains(separators) || settings.frames_label.contains(separators) {
            return Err(VideoxtError::ConfigError {
                message: "labels cannot contain path separators".to_string(),
            });
        }
        Ok(())
    }
}
