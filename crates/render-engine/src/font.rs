//! Caption font measurement and drawing.
//!
//! The compositor needs exactly two primitives: the rendered width of a
//! candidate line, and drawing a finished line at a baseline. Keeping
//! them behind a trait lets layout logic run against a deterministic
//! fixed-advance font in tests while production uses a TrueType face.

use std::path::Path;

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use qrstudio_common::error::{StudioError, StudioResult};

/// Measures and draws single lines of caption text.
pub trait CaptionFont {
    /// Rendered width of `text` in pixels.
    fn line_width(&self, text: &str) -> f32;

    /// Draw `text` with its left edge at `x` and its baseline at `baseline_y`.
    fn draw_line(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        baseline_y: f32,
        color: Rgba<u8>,
    );
}

/// Well-known TrueType locations probed when no font file is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-fonts/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A TrueType caption font at a fixed pixel size.
pub struct TtfCaptionFont {
    font: Font<'static>,
    px: f32,
}

impl TtfCaptionFont {
    /// Build a font from raw TTF/OTF bytes.
    pub fn from_bytes(bytes: Vec<u8>, px: f32) -> StudioResult<Self> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            StudioError::rendering_unavailable("font data is not a usable TrueType face")
        })?;
        Ok(Self { font, px })
    }

    /// Load a font from a file on disk.
    pub fn from_file(path: &Path, px: f32) -> StudioResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            StudioError::rendering_unavailable(format!(
                "failed to read font {}: {e}",
                path.display()
            ))
        })?;
        Self::from_bytes(bytes, px)
    }

    /// Locate a usable sans-serif face in the host environment.
    ///
    /// Caption drawing needs a real font; a host without one cannot
    /// acquire a drawing surface, so the composite export fails with
    /// `RenderingUnavailable`.
    pub fn from_system(px: f32) -> StudioResult<Self> {
        for candidate in SYSTEM_FONT_CANDIDATES {
            let path = Path::new(candidate);
            if path.exists() {
                tracing::debug!(font = candidate, "Using system caption font");
                return Self::from_file(path, px);
            }
        }
        Err(StudioError::rendering_unavailable(
            "no usable TrueType font found in standard system locations",
        ))
    }

}

impl CaptionFont for TtfCaptionFont {
    fn line_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let scale = Scale::uniform(self.px);
        let v_metrics = self.font.v_metrics(scale);
        let mut width = 0.0f32;
        for glyph in self.font.layout(text, scale, point(0.0, v_metrics.ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                width = width.max(bb.max.x as f32);
            }
            let advance = glyph.unpositioned().h_metrics().advance_width;
            width = width.max(glyph.position().x + advance);
        }
        width
    }

    fn draw_line(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        baseline_y: f32,
        color: Rgba<u8>,
    ) {
        let scale = Scale::uniform(self.px);
        for glyph in self.font.layout(text, scale, point(x, baseline_y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= canvas.width() || py >= canvas.height() {
                    return;
                }
                let alpha = coverage.clamp(0.0, 1.0);
                if alpha <= 0.0 {
                    return;
                }
                let dst = canvas.get_pixel_mut(px, py);
                let inv = 1.0 - alpha;
                dst.0[0] = (color.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
                dst.0[1] = (color.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
                dst.0[2] = (color.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
                dst.0[3] = 255;
            });
        }
    }
}

/// Deterministic fixed-advance font.
///
/// Every character measures `advance` pixels regardless of glyph, and
/// drawing fills a solid box per character cell. Layout becomes exactly
/// predictable, which the wrap tests rely on.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthFont {
    /// Horizontal advance per character, in pixels.
    pub advance: f32,

    /// Height of the drawn glyph box above the baseline.
    pub glyph_height: f32,
}

impl FixedWidthFont {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            glyph_height: advance * 1.6,
        }
    }
}

impl CaptionFont for FixedWidthFont {
    fn line_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn draw_line(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        baseline_y: f32,
        color: Rgba<u8>,
    ) {
        let top = (baseline_y - self.glyph_height).max(0.0) as u32;
        let bottom = (baseline_y.max(0.0) as u32).min(canvas.height());
        let mut caret = x;
        for _ch in text.chars() {
            // Leave a small gap between cells so adjacent glyphs stay
            // distinguishable in golden images.
            let box_width = self.advance * 0.8;
            let left = caret.max(0.0) as u32;
            let right = ((caret + box_width).max(0.0) as u32).min(canvas.width());
            for py in top..bottom {
                for px in left..right {
                    canvas.put_pixel(px, py, color);
                }
            }
            caret += self.advance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_measures_by_char_count() {
        let font = FixedWidthFont::new(10.0);
        assert_eq!(font.line_width(""), 0.0);
        assert_eq!(font.line_width("abc"), 30.0);
        // CJK characters count as one character each.
        assert_eq!(font.line_width("測試"), 20.0);
    }

    #[test]
    fn test_fixed_width_draw_is_bounded() {
        let font = FixedWidthFont::new(10.0);
        let mut canvas = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
        // Drawing past the canvas edge must not panic.
        font.draw_line(&mut canvas, "wider than canvas", 0.0, 18.0, Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(0, 17).0, [0, 0, 0, 255]);
    }
}
