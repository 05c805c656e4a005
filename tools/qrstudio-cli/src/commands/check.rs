//! Check host capabilities.

use qrstudio_encode_engine::{encode_to_image, EncodeOptions};
use qrstudio_render_engine::font::TtfCaptionFont;

pub fn run() -> anyhow::Result<()> {
    println!("QR Studio Host Check");
    println!("{}", "=".repeat(50));

    // Encoder
    match encode_to_image("qrstudio", &EncodeOptions::default()) {
        Ok(image) => println!("[OK] Encoder: {}x{} bitmap rendered", image.width(), image.height()),
        Err(e) => println!("[FAIL] Encoder: {e}"),
    }

    // Caption font
    match TtfCaptionFont::from_system(16.0) {
        Ok(_) => println!("[OK] Caption font: system TrueType face found"),
        Err(e) => println!("[WARN] Caption font: {e} (composite export unavailable)"),
    }

    // Clipboard
    if qrstudio_session::clipboard::is_available() {
        println!("[OK] Clipboard: service reachable");
    } else {
        println!("[WARN] Clipboard: no service reachable (`--copy` unavailable)");
    }

    Ok(())
}
