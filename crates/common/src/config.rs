//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Rgb8;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory exported PNGs are written to.
    pub output_dir: PathBuf,

    /// Default generation settings.
    pub generation: GenerationDefaults,

    /// Default caption layout settings.
    pub caption: CaptionDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default parameters handed to the encoding collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationDefaults {
    /// Bitmap size preset name ("small", "medium", "large").
    pub size: String,

    /// Foreground (dark module) color.
    pub color: Rgb8,

    /// Background (light module) color.
    pub bg_color: Rgb8,

    /// Whether to render the quiet zone around the module matrix.
    pub quiet_zone: bool,
}

/// Default caption band layout for composite exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionDefaults {
    /// Margin around the composite content, in pixels.
    pub padding: u32,

    /// Vertical space reserved below the QR code for the caption.
    pub band_height: u32,

    /// Vertical spacing between wrapped caption lines.
    pub line_height: f32,

    /// Caption font size in pixels.
    pub font_px: f32,

    /// Caption text color.
    pub text_color: Rgb8,

    /// Composite background fill.
    pub background: Rgb8,

    /// TrueType font file to use; `None` searches system locations.
    pub font_file: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "qrstudio=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            generation: GenerationDefaults::default(),
            caption: CaptionDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            size: "medium".to_string(),
            color: Rgb8::BLACK,
            bg_color: Rgb8::WHITE,
            quiet_zone: true,
        }
    }
}

impl Default for CaptionDefaults {
    fn default() -> Self {
        Self {
            padding: 20,
            band_height: 60,
            line_height: 20.0,
            font_px: 16.0,
            text_color: Rgb8 {
                r: 0x33,
                g: 0x33,
                b: 0x33,
            },
            background: Rgb8::WHITE,
            font_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("qrstudio").join("config.json")
}
