//! List built-in sample texts.

use qrstudio_session::samples::SAMPLE_TEXTS;

pub fn run() -> anyhow::Result<()> {
    println!("Built-in sample texts:");
    for (index, text) in SAMPLE_TEXTS.iter().enumerate() {
        println!("  [{index}] {text}");
    }
    println!();
    println!("Encode one with `qrstudio generate --sample <N>`.");

    Ok(())
}
