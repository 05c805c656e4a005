//! Options handed to the encoding collaborator.

use serde::{Deserialize, Serialize};

use qrstudio_common::color::Rgb8;
use qrstudio_common::config::GenerationDefaults;
use qrstudio_common::error::{StudioError, StudioResult};

/// Output bitmap side length, selectable from a small preset set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrSize {
    Small,
    Medium,
    Large,
}

impl QrSize {
    /// Side length in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            QrSize::Small => 128,
            QrSize::Medium => 256,
            QrSize::Large => 512,
        }
    }
}

impl Default for QrSize {
    fn default() -> Self {
        QrSize::Medium
    }
}

impl std::str::FromStr for QrSize {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(QrSize::Small),
            "medium" => Ok(QrSize::Medium),
            "large" => Ok(QrSize::Large),
            other => Err(StudioError::config(format!(
                "unknown size preset: {other}. Use: small, medium, large"
            ))),
        }
    }
}

/// Error-correction level accepted by the encoding collaborator.
///
/// The studio always generates at `Medium`; the full range exists because
/// the collaborator's interface takes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EcSetting {
    Low,
    Medium,
    Quartile,
    High,
}

impl Default for EcSetting {
    fn default() -> Self {
        EcSetting::Medium
    }
}

impl From<EcSetting> for qrcode::EcLevel {
    fn from(setting: EcSetting) -> Self {
        match setting {
            EcSetting::Low => qrcode::EcLevel::L,
            EcSetting::Medium => qrcode::EcLevel::M,
            EcSetting::Quartile => qrcode::EcLevel::Q,
            EcSetting::High => qrcode::EcLevel::H,
        }
    }
}

/// Options for one generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Bitmap side length preset.
    pub size: QrSize,

    /// Foreground (dark module) color.
    pub dark: Rgb8,

    /// Background (light module) color.
    pub light: Rgb8,

    /// Error-correction level.
    pub ec_level: EcSetting,

    /// Whether to render the quiet zone around the module matrix.
    pub quiet_zone: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            size: QrSize::default(),
            dark: Rgb8::BLACK,
            light: Rgb8::WHITE,
            ec_level: EcSetting::default(),
            quiet_zone: true,
        }
    }
}

impl EncodeOptions {
    /// Build options from configured generation defaults.
    pub fn from_defaults(defaults: &GenerationDefaults) -> StudioResult<Self> {
        Ok(Self {
            size: defaults.size.parse()?,
            dark: defaults.color,
            light: defaults.bg_color,
            ec_level: EcSetting::default(),
            quiet_zone: defaults.quiet_zone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_presets() {
        assert_eq!(QrSize::Small.pixels(), 128);
        assert_eq!(QrSize::Medium.pixels(), 256);
        assert_eq!(QrSize::Large.pixels(), 512);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("small".parse::<QrSize>().unwrap(), QrSize::Small);
        assert_eq!(" Medium ".parse::<QrSize>().unwrap(), QrSize::Medium);
        assert!("huge".parse::<QrSize>().is_err());
    }

    #[test]
    fn test_options_from_defaults() {
        let defaults = GenerationDefaults::default();
        let options = EncodeOptions::from_defaults(&defaults).unwrap();
        assert_eq!(options.size, QrSize::Medium);
        assert_eq!(options.ec_level, EcSetting::Medium);
        assert!(options.quiet_zone);
    }
}
