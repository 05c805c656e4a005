//! Rasterization through the external encoder.

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use qrcode::render::unicode;
use qrcode::QrCode;

use qrstudio_common::error::{StudioError, StudioResult};

use crate::options::EncodeOptions;

/// Encode `text` and rasterize it to an RGBA bitmap of exactly
/// `options.size.pixels()` per side.
///
/// The encoder picks the QR version automatically and fails when the text
/// exceeds capacity for the requested error-correction level; that
/// rejection surfaces as `EncodingFailed`.
pub fn encode_to_image(text: &str, options: &EncodeOptions) -> StudioResult<RgbaImage> {
    let code = QrCode::with_error_correction_level(text, options.ec_level.into())
        .map_err(|e| StudioError::encoding_failed(e.to_string()))?;

    let side = options.size.pixels();
    let dark = options.dark;
    let light = options.light;
    let image = code
        .render::<Rgba<u8>>()
        .quiet_zone(options.quiet_zone)
        .min_dimensions(side, side)
        .dark_color(Rgba([dark.r, dark.g, dark.b, 255]))
        .light_color(Rgba([light.r, light.g, light.b, 255]))
        .build();

    tracing::debug!(
        modules = code.width(),
        rendered = image.width(),
        target = side,
        "QR matrix rasterized"
    );

    // The renderer rounds up to whole modules; pin the output to the exact
    // requested side length. Nearest keeps module edges crisp.
    if image.width() != side || image.height() != side {
        Ok(image::imageops::resize(&image, side, side, FilterType::Nearest))
    } else {
        Ok(image)
    }
}

/// Render `text` as a compact Unicode half-block string for terminals.
pub fn preview_string(text: &str, options: &EncodeOptions) -> StudioResult<String> {
    let code = QrCode::with_error_correction_level(text, options.ec_level.into())
        .map_err(|e| StudioError::encoding_failed(e.to_string()))?;

    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(options.quiet_zone)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::QrSize;
    use qrstudio_common::color::Rgb8;

    #[test]
    fn test_output_has_exact_requested_size() {
        for size in [QrSize::Small, QrSize::Medium, QrSize::Large] {
            let options = EncodeOptions {
                size,
                ..EncodeOptions::default()
            };
            let image = encode_to_image("https://www.google.com", &options).unwrap();
            assert_eq!(image.width(), size.pixels());
            assert_eq!(image.height(), size.pixels());
        }
    }

    #[test]
    fn test_output_uses_configured_colors() {
        let options = EncodeOptions {
            dark: Rgb8 { r: 207, g: 44, b: 45 },
            light: Rgb8 { r: 240, g: 240, b: 255 },
            ..EncodeOptions::default()
        };
        let image = encode_to_image("color check", &options).unwrap();

        let mut saw_dark = false;
        let mut saw_light = false;
        for pixel in image.pixels() {
            match pixel.0 {
                [207, 44, 45, 255] => saw_dark = true,
                [240, 240, 255, 255] => saw_light = true,
                _ => {}
            }
        }
        assert!(saw_dark, "no dark modules rendered");
        assert!(saw_light, "no light modules rendered");
    }

    #[test]
    fn test_over_capacity_input_is_rejected() {
        // Version 40 tops out below 3000 bytes even at the lowest level.
        let oversized = "x".repeat(8000);
        let err = encode_to_image(&oversized, &EncodeOptions::default()).unwrap_err();
        assert!(matches!(err, StudioError::EncodingFailed { .. }));
    }

    #[test]
    fn test_preview_renders_non_empty_grid() {
        let preview = preview_string("Hello World!", &EncodeOptions::default()).unwrap();
        assert!(preview.lines().count() > 10);
    }
}
