//! Generate a QR code and export it as a PNG.

use std::path::PathBuf;
use std::str::FromStr;

use qrstudio_common::color::Rgb8;
use qrstudio_common::config::AppConfig;
use qrstudio_encode_engine::{EncodeOptions, QrSize};
use qrstudio_render_engine::compositor::CaptionLayout;
use qrstudio_render_engine::font::TtfCaptionFont;
use qrstudio_session::{samples, QrSession};

pub async fn run(
    text: Option<String>,
    input: Option<PathBuf>,
    sample: Option<usize>,
    output: Option<PathBuf>,
    size: Option<String>,
    color: Option<String>,
    bg_color: Option<String>,
    with_caption: bool,
    font: Option<PathBuf>,
    copy: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let mut session = QrSession::new();
    if let Some(path) = &input {
        session
            .ingest_text_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to read input file: {e}"))?;
    } else if let Some(index) = sample {
        let preset = samples::sample(index)
            .ok_or_else(|| anyhow::anyhow!("No sample #{index}; see `qrstudio samples`"))?;
        session.set_text(preset);
    } else if let Some(text) = text {
        session.set_text(text);
    }

    let mut options =
        EncodeOptions::from_defaults(&config.generation).map_err(|e| anyhow::anyhow!("{e}"))?;
    if let Some(s) = &size {
        options.size = QrSize::from_str(s).map_err(|e| anyhow::anyhow!("{e}"))?;
    }
    if let Some(s) = &color {
        options.dark = Rgb8::from_hex(s).map_err(|e| anyhow::anyhow!("{e}"))?;
    }
    if let Some(s) = &bg_color {
        options.light = Rgb8::from_hex(s).map_err(|e| anyhow::anyhow!("{e}"))?;
    }

    if let Err(e) = session.generate(&options).await {
        tracing::error!(error = %e, "Generation failed");
        eprintln!("Generation failed: {e}");
        return Ok(());
    }

    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
    let saved = if with_caption {
        let layout = CaptionLayout::from_defaults(&config.caption);
        let font_px = config.caption.font_px;
        let font_file = font.or_else(|| config.caption.font_file.clone());
        let caption_font = match font_file {
            Some(path) => TtfCaptionFont::from_file(&path, font_px),
            None => TtfCaptionFont::from_system(font_px),
        };
        caption_font.and_then(|f| session.export_composite(&output_dir, &layout, &f))
    } else {
        session.export_png(&output_dir)
    };

    match saved {
        Ok(path) => println!("Saved: {}", path.display()),
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
            eprintln!("Export failed: {e}");
            return Ok(());
        }
    }

    if copy {
        match session.copy_source_to_clipboard().await {
            Ok(()) => println!("Source text copied to clipboard."),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                eprintln!("Clipboard write failed: {e}");
            }
        }
    }

    Ok(())
}
