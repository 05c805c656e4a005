//! Composite image builder: QR bitmap plus wrapped caption.
//!
//! Wrapping is character-by-character rather than word-by-word so that
//! scripts without space-delimited word boundaries (CJK in particular)
//! still break into full lines instead of overflowing.

use image::{Rgba, RgbaImage};

use qrstudio_common::color::Rgb8;
use qrstudio_common::config::CaptionDefaults;
use qrstudio_common::error::{StudioError, StudioResult};

use crate::font::CaptionFont;

/// Vertical distance from the QR bitmap's padded bottom edge to the first
/// caption baseline.
const FIRST_BASELINE_OFFSET: u32 = 30;

/// Layout constants for the composite image.
#[derive(Debug, Clone)]
pub struct CaptionLayout {
    /// Margin around the composite content, in pixels.
    pub padding: u32,

    /// Vertical space reserved below the QR code for the caption.
    pub caption_band_height: u32,

    /// Vertical spacing between wrapped caption lines.
    pub line_height: f32,

    /// Caption text color.
    pub text_color: Rgb8,

    /// Background fill for the whole canvas.
    pub background: Rgb8,
}

impl Default for CaptionLayout {
    fn default() -> Self {
        Self::from_defaults(&CaptionDefaults::default())
    }
}

impl CaptionLayout {
    /// Build a layout from configured caption defaults.
    pub fn from_defaults(defaults: &CaptionDefaults) -> Self {
        Self {
            padding: defaults.padding,
            caption_band_height: defaults.band_height,
            line_height: defaults.line_height,
            text_color: defaults.text_color,
            background: defaults.background,
        }
    }
}

/// Split `caption` into lines whose measured width fits `max_width`.
///
/// Characters accumulate onto the current line until appending one more
/// would exceed `max_width`; that character then starts the next line. A
/// single character wider than `max_width` still gets its own line;
/// overflow is accepted rather than truncated.
pub fn wrap_caption(caption: &str, max_width: f32, font: &dyn CaptionFont) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for ch in caption.chars() {
        let mut candidate = line.clone();
        candidate.push(ch);
        if font.line_width(&candidate) > max_width && !line.is_empty() {
            lines.push(std::mem::replace(&mut line, ch.to_string()));
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Compose `qr` and its source `caption` into one exportable bitmap.
///
/// The output is `qr` width plus twice the padding wide, and `qr` height
/// plus the caption band plus three paddings tall: background fill, the
/// QR bitmap copied unscaled at `(padding, padding)`, and the caption
/// wrapped to the QR width and centered line by line below it. The input
/// bitmap is not mutated.
pub fn compose_with_caption(
    qr: &RgbaImage,
    caption: &str,
    layout: &CaptionLayout,
    font: &dyn CaptionFont,
) -> StudioResult<RgbaImage> {
    let width = qr
        .width()
        .checked_add(layout.padding.saturating_mul(2))
        .ok_or_else(|| StudioError::rendering_unavailable("composite width overflows"))?;
    let height = qr
        .height()
        .checked_add(layout.caption_band_height)
        .and_then(|h| h.checked_add(layout.padding.saturating_mul(3)))
        .ok_or_else(|| StudioError::rendering_unavailable("composite height overflows"))?;

    let bg = layout.background;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([bg.r, bg.g, bg.b, 255]));

    image::imageops::overlay(&mut canvas, qr, layout.padding as i64, layout.padding as i64);

    let text = layout.text_color;
    let text_color = Rgba([text.r, text.g, text.b, 255]);
    let available = qr.width() as f32;
    let mut baseline_y = (qr.height() + layout.padding + FIRST_BASELINE_OFFSET) as f32;

    let lines = wrap_caption(caption, available, font);
    for line in &lines {
        let line_width = font.line_width(line);
        let x = (width as f32 - line_width) / 2.0;
        font.draw_line(&mut canvas, line, x, baseline_y, text_color);
        baseline_y += layout.line_height;
    }

    tracing::debug!(
        qr_side = qr.width(),
        width,
        height,
        caption_lines = lines.len(),
        "Composite bitmap built"
    );

    Ok(canvas)
}
