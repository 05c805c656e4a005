//! Render a QR code as Unicode blocks in the terminal.

use qrstudio_common::error::StudioError;
use qrstudio_encode_engine::{preview_string, EncodeOptions};
use qrstudio_session::samples;

pub fn run(text: Option<String>, sample: Option<usize>) -> anyhow::Result<()> {
    let text = match (text, sample) {
        (_, Some(index)) => samples::sample(index)
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("No sample #{index}; see `qrstudio samples`"))?,
        (Some(text), None) => text,
        (None, None) => String::new(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        eprintln!("Preview failed: {}", StudioError::InputEmpty);
        return Ok(());
    }

    match preview_string(trimmed, &EncodeOptions::default()) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            tracing::error!(error = %e, "Preview failed");
            eprintln!("Preview failed: {e}");
        }
    }

    Ok(())
}
