//! Clipboard collaborator.

use qrstudio_common::error::{StudioError, StudioResult};

/// Place `text` on the system clipboard.
///
/// Clipboard access goes through the platform clipboard service and can
/// fail on headless hosts or when the compositor denies access; both
/// surface as `ClipboardDenied`.
pub async fn copy_text(text: &str) -> StudioResult<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| StudioError::clipboard_denied(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| StudioError::clipboard_denied(e.to_string()))?;

    tracing::debug!(chars = text.chars().count(), "Source text copied to clipboard");
    Ok(())
}

/// Whether a clipboard service can be reached at all.
pub fn is_available() -> bool {
    arboard::Clipboard::new().is_ok()
}
