//! PNG export with timestamp-derived filenames.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use qrstudio_common::error::{StudioError, StudioResult};

/// Which export flavor a filename should advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Bare QR bitmap.
    Plain,
    /// QR bitmap with the caption band.
    Combo,
}

impl ExportKind {
    fn file_stem(self) -> &'static str {
        match self {
            ExportKind::Plain => "qrcode",
            ExportKind::Combo => "qrcode_combo",
        }
    }
}

/// Save `image` under `dir` as `<stem>_<millis>.png`, creating the
/// directory if needed. The timestamp is Unix epoch milliseconds.
pub fn save_png(image: &RgbaImage, dir: &Path, kind: ExportKind) -> StudioResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let millis = chrono::Utc::now().timestamp_millis();
    let path = dir.join(format!("{}_{millis}.png", kind.file_stem()));

    image
        .save(&path)
        .map_err(|e| StudioError::render(format!("failed to write {}: {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "PNG exported"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qrstudio-export-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_save_plain_uses_timestamped_name() {
        let dir = scratch_dir("plain");
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));

        let path = save_png(&image, &dir, ExportKind::Plain).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("qrcode_"));
        assert!(!name.starts_with("qrcode_combo_"));
        assert!(name.ends_with(".png"));
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_combo_uses_combo_stem() {
        let dir = scratch_dir("combo");
        let image = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));

        let path = save_png(&image, &dir, ExportKind::Combo).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("qrcode_combo_"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
