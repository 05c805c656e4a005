//! QR Studio Render Engine
//!
//! Builds the exportable bitmaps: the composite image combining a QR
//! bitmap with its word-wrapped source caption, and the PNG export path
//! with timestamp-derived filenames.
//!
//! # Composite layout
//!
//! ```text
//! ┌──────────────────────────────┐ ▲
//! │            padding           │ │
//! │   ┌──────────────────────┐   │ │
//! │   │                      │   │ │ qr_size + 2×padding wide
//! │   │      QR bitmap       │   │ │
//! │   │                      │   │ │
//! │   └──────────────────────┘   │ │
//! │      wrapped caption line    │ │ caption band
//! │      wrapped caption line    │ │
//! │            padding           │ │
//! └──────────────────────────────┘ ▼
//! ```
//!
//! Composition is a pure function over explicit inputs (bitmap, caption,
//! layout, font) with no shared mutable state.

pub mod compositor;
pub mod export;
pub mod font;

pub use compositor::{compose_with_caption, wrap_caption, CaptionLayout};
pub use export::{save_png, ExportKind};
pub use font::{CaptionFont, FixedWidthFont, TtfCaptionFont};
