// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReelError, ReelResult};

/// Frame rate used when the caller does not ask for one
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    /// Transcoding program name or path
    pub ffmpeg: String,
    /// Probe program name or path
    pub ffprobe: String,
    /// Output frame rate of a freshly loaded source
    pub default_frame_rate: u32,
    /// Log filter directive (e.g. `info`, `reelcut=debug`)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse log format from string
    pub fn parse(format: &str) -> ReelResult<Self> {
        match format.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ReelError::Config {
                message: format!("Invalid log format: {}. Valid formats: pretty, json", format),
            }),
        }
    }
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            default_frame_rate: DEFAULT_FRAME_RATE,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// On-disk layout: everything lives under a `[reelcut]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    reelcut: ReelConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Config file picked up from the working directory when none is given
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("reelcut.toml")
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> ReelResult<ReelConfig> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ReelError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Self::validate(&file.reelcut)?;
        Ok(file.reelcut)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> ReelResult<ReelConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| ReelError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::parse(&content)
    }

    /// Serialize configuration as TOML text
    pub fn serialize(config: &ReelConfig) -> ReelResult<String> {
        #[derive(Serialize)]
        struct Wrapper<'a> {
            reelcut: &'a ReelConfig,
        }
        toml::to_string(&Wrapper { reelcut: config }).map_err(|e| ReelError::Config {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Validate configuration
    pub fn validate(config: &ReelConfig) -> ReelResult<()> {
        if config.ffmpeg.trim().is_empty() {
            return Err(ReelError::Config {
                message: "ffmpeg program cannot be empty".to_string(),
            });
        }
        if config.ffprobe.trim().is_empty() {
            return Err(ReelError::Config {
                message: "ffprobe program cannot be empty".to_string(),
            });
        }
        if config.default_frame_rate == 0 {
            return Err(ReelError::Config {
                message: "default_frame_rate must be positive".to_string(),
            });
        }
        Ok(())
    }
}
