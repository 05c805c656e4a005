//! Text-file ingestion.
//!
//! A dropped-in file replaces the source text only when its declared
//! media type is textual.

use std::path::Path;

use qrstudio_common::error::{StudioError, StudioResult};

/// Read the full contents of a textual file.
pub fn read_text_file(path: &Path) -> StudioResult<String> {
    if !path.exists() {
        return Err(StudioError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::TEXT {
        return Err(StudioError::unsupported_file(format!(
            "{} has media type {mime}, expected a text type",
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("qrstudio-ingest-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_text_file() {
        let path = scratch_file("note.txt", "dropped contents");
        let text = read_text_file(&path).unwrap();
        assert_eq!(text, "dropped contents");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_rejects_non_text_media_type() {
        let path = scratch_file("image.png", "not really a png");
        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, StudioError::UnsupportedFile { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = read_text_file(Path::new("/nonexistent/qrstudio-ingest.txt")).unwrap_err();
        assert!(matches!(err, StudioError::FileNotFound { .. }));
    }
}
