//! QR Studio Encode Engine
//!
//! Thin wrapper around the external `qrcode` encoder. The encoding
//! algorithm itself is entirely delegated; this crate owns the option
//! surface (size presets, colors, error-correction level, quiet zone)
//! and rasterization to an exact-size RGBA bitmap.

pub mod encoder;
pub mod options;

pub use encoder::{encode_to_image, preview_string};
pub use options::{EcSetting, EncodeOptions, QrSize};
