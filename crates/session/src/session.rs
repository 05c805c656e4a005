//! Generation session state.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use qrstudio_common::error::{StudioError, StudioResult};
use qrstudio_encode_engine::{encode_to_image, EncodeOptions};
use qrstudio_render_engine::compositor::{compose_with_caption, CaptionLayout};
use qrstudio_render_engine::export::{save_png, ExportKind};
use qrstudio_render_engine::font::CaptionFont;

/// A QR bitmap together with the source text it was generated from.
///
/// The caption on a composite export is the text captured here, not
/// whatever the input slot holds at export time.
#[derive(Debug, Clone)]
pub struct QrBitmap {
    /// The rendered bitmap.
    pub image: RgbaImage,

    /// Source text captured at generation time.
    pub source_text: String,

    /// Options the bitmap was generated with.
    pub options: EncodeOptions,
}

/// State for one interactive studio session.
///
/// Each slot is replaced wholesale: a new generation discards the previous
/// bitmap, and a superseded generation simply overwrites the slot when it
/// completes. Nothing is appended, so no locking is needed.
#[derive(Debug, Default)]
pub struct QrSession {
    source_text: String,
    current: Option<QrBitmap>,
}

impl QrSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source text slot.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The current QR bitmap, if a generation has succeeded.
    pub fn current(&self) -> Option<&QrBitmap> {
        self.current.as_ref()
    }

    /// Encode the current source text, replacing any previous bitmap.
    ///
    /// Fails with `InputEmpty` when the trimmed text is empty; the bitmap
    /// slot is left untouched in that case.
    pub async fn generate(&mut self, options: &EncodeOptions) -> StudioResult<()> {
        let text = self.source_text.trim();
        if text.is_empty() {
            return Err(StudioError::InputEmpty);
        }

        let text = text.to_string();
        let image = encode_to_image(&text, options)?;
        tracing::info!(
            chars = text.chars().count(),
            side = image.width(),
            "QR bitmap generated"
        );

        self.current = Some(QrBitmap {
            image,
            source_text: text,
            options: options.clone(),
        });
        Ok(())
    }

    /// Export the current bitmap as a plain PNG under `dir`.
    ///
    /// Fails with `PrecursorMissing` when no generation has succeeded yet;
    /// no file is written in that case.
    pub fn export_png(&self, dir: &Path) -> StudioResult<PathBuf> {
        let bitmap = self.current.as_ref().ok_or(StudioError::PrecursorMissing)?;
        save_png(&bitmap.image, dir, ExportKind::Plain)
    }

    /// Export the current bitmap with its caption band under `dir`.
    ///
    /// The caption is the source text captured at generation time. Same
    /// `PrecursorMissing` gate as [`export_png`](Self::export_png).
    pub fn export_composite(
        &self,
        dir: &Path,
        layout: &CaptionLayout,
        font: &dyn CaptionFont,
    ) -> StudioResult<PathBuf> {
        let bitmap = self.current.as_ref().ok_or(StudioError::PrecursorMissing)?;
        let composite = compose_with_caption(&bitmap.image, &bitmap.source_text, layout, font)?;
        save_png(&composite, dir, ExportKind::Combo)
    }

    /// Place the current source text on the system clipboard.
    pub async fn copy_source_to_clipboard(&self) -> StudioResult<()> {
        crate::clipboard::copy_text(&self.source_text).await
    }

    /// Replace the source text with the contents of a textual file.
    pub fn ingest_text_file(&mut self, path: &Path) -> StudioResult<()> {
        let text = crate::ingest::read_text_file(path)?;
        tracing::info!(path = %path.display(), chars = text.chars().count(), "Source text ingested");
        self.set_text(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrstudio_render_engine::font::FixedWidthFont;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qrstudio-session-{tag}-{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_empty_input_fails_and_leaves_slot_untouched() {
        let options = EncodeOptions::default();
        let mut session = QrSession::new();

        session.set_text("keep me");
        session.generate(&options).await.unwrap();

        session.set_text("   ");
        let err = session.generate(&options).await.unwrap_err();
        assert!(matches!(err, StudioError::InputEmpty));
        assert_eq!(session.current().unwrap().source_text, "keep me");
    }

    #[tokio::test]
    async fn test_empty_input_on_fresh_session() {
        let mut session = QrSession::new();
        let err = session.generate(&EncodeOptions::default()).await.unwrap_err();
        assert!(matches!(err, StudioError::InputEmpty));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_export_before_generation_writes_nothing() {
        let session = QrSession::new();
        let dir = scratch_dir("precursor");

        let err = session.export_png(&dir).unwrap_err();
        assert!(matches!(err, StudioError::PrecursorMissing));

        let layout = CaptionLayout::default();
        let font = FixedWidthFont::new(10.0);
        let err = session.export_composite(&dir, &layout, &font).unwrap_err();
        assert!(matches!(err, StudioError::PrecursorMissing));

        // The gate fires before any directory or file is created.
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_regeneration_overwrites_the_slot() {
        let options = EncodeOptions::default();
        let mut session = QrSession::new();

        session.set_text("first");
        session.generate(&options).await.unwrap();
        session.set_text("second");
        session.generate(&options).await.unwrap();

        assert_eq!(session.current().unwrap().source_text, "second");
    }

    #[tokio::test]
    async fn test_generation_trims_the_captured_text() {
        let mut session = QrSession::new();
        session.set_text("  padded  ");
        session.generate(&EncodeOptions::default()).await.unwrap();
        assert_eq!(session.current().unwrap().source_text, "padded");
    }

    #[tokio::test]
    async fn test_composite_uses_text_captured_at_generation() {
        let options = EncodeOptions::default();
        let mut session = QrSession::new();

        session.set_text("captured");
        session.generate(&options).await.unwrap();
        session.set_text("changed afterwards");

        let dir = scratch_dir("combo");
        let layout = CaptionLayout::default();
        let font = FixedWidthFont::new(10.0);
        let path = session.export_composite(&dir, &layout, &font).unwrap();

        assert!(path.exists());
        assert_eq!(session.current().unwrap().source_text, "captured");

        let composite = image::open(&path).unwrap().to_rgba8();
        assert!(composite.height() > session.current().unwrap().image.height());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_plain_export_round_trips_dimensions() {
        let mut session = QrSession::new();
        session.set_text("https://github.com");
        session.generate(&EncodeOptions::default()).await.unwrap();

        let dir = scratch_dir("plain");
        let path = session.export_png(&dir).unwrap();
        let exported = image::open(&path).unwrap().to_rgba8();
        assert_eq!(exported.width(), 256);
        assert_eq!(exported.height(), 256);

        std::fs::remove_dir_all(&dir).ok();
    }
}
