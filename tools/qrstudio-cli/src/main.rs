//! QR Studio CLI — generate, preview, and export QR codes.
//!
//! Usage:
//!   qrstudio generate [TEXT] [OPTIONS]   Generate a QR code and export a PNG
//!   qrstudio preview [TEXT]              Render a QR code in the terminal
//!   qrstudio samples                     List built-in sample texts
//!   qrstudio check                       Check host capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "qrstudio",
    about = "QR code generation with captioned PNG export",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a QR code and export it as a PNG
    Generate {
        /// Text to encode (omit when using --input or --sample)
        text: Option<String>,

        /// Read the text from a file (must have a textual media type)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Use a built-in sample text by index (see `qrstudio samples`)
        #[arg(long)]
        sample: Option<usize>,

        /// Output directory for the exported PNG (default: configured dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bitmap size preset: small, medium, large
        #[arg(long)]
        size: Option<String>,

        /// Foreground (dark) module color, #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Background (light) color, #RRGGBB
        #[arg(long)]
        bg_color: Option<String>,

        /// Also render the source text as a caption below the code
        #[arg(long)]
        with_caption: bool,

        /// TrueType font file for the caption (default: system font)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Copy the source text to the clipboard after generating
        #[arg(long)]
        copy: bool,
    },

    /// Render a QR code as Unicode blocks in the terminal
    Preview {
        /// Text to encode (omit when using --sample)
        text: Option<String>,

        /// Use a built-in sample text by index
        #[arg(long)]
        sample: Option<usize>,
    },

    /// List built-in sample texts
    Samples,

    /// Check host capabilities
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    qrstudio_common::logging::init_logging(&qrstudio_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Generate {
            text,
            input,
            sample,
            output,
            size,
            color,
            bg_color,
            with_caption,
            font,
            copy,
        } => {
            commands::generate::run(
                text,
                input,
                sample,
                output,
                size,
                color,
                bg_color,
                with_caption,
                font,
                copy,
            )
            .await
        }
        Commands::Preview { text, sample } => commands::preview::run(text, sample),
        Commands::Samples => commands::samples::run(),
        Commands::Check => commands::check::run(),
    }
}
