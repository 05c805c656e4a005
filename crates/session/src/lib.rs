//! QR Studio Session
//!
//! The action-driven state machine behind the studio: two slots (the
//! current source text and the QR bitmap generated from it), overwritten
//! wholesale per action, plus the collaborators a session talks to:
//! clipboard, text-file ingestion, and the built-in sample presets.

pub mod clipboard;
pub mod ingest;
pub mod samples;
pub mod session;

pub use session::{QrBitmap, QrSession};
