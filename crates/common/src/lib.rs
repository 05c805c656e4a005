//! QR Studio Common Utilities
//!
//! Shared infrastructure for all QR Studio crates:
//! - Error types and result aliases
//! - Color parsing for the two-color module palette
//! - Tracing/logging initialization
//! - Configuration loading

pub mod color;
pub mod config;
pub mod error;
pub mod logging;

pub use color::*;
pub use config::*;
pub use error::*;
