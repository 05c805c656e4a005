//! The two-color module palette.
//!
//! Colors travel through configuration and CLI flags as `#RRGGBB` hex
//! strings and are expanded to raster pixels inside the engines.

use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

/// An opaque RGB color, serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb8 = Rgb8 {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a `#RRGGBB` (or bare `RRGGBB`) hex string.
    pub fn from_hex(s: &str) -> StudioResult<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(StudioError::config(format!("invalid color: {s}")));
        }
        let bytes =
            hex::decode(digits).map_err(|_| StudioError::config(format!("invalid color: {s}")))?;
        Ok(Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = StudioError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgb8> for String {
    fn from(color: Rgb8) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c = Rgb8::from_hex("#1a2B3c").unwrap();
        assert_eq!(c, Rgb8 { r: 0x1a, g: 0x2b, b: 0x3c });
        assert_eq!(Rgb8::from_hex("ffffff").unwrap(), Rgb8::WHITE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Rgb8::from_hex("#fff").is_err());
        assert!(Rgb8::from_hex("#gggggg").is_err());
        assert!(Rgb8::from_hex("").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb8 { r: 207, g: 44, b: 45 };
        assert_eq!(Rgb8::from_hex(&c.to_hex()).unwrap(), c);
    }
}
