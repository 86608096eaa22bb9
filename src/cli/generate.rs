//! Generate command implementation.
//!
//! Produces SVG markup (or an encoded form of it) for a seed string and
//! writes it to stdout or a file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::encode;
use crate::error::{GeotileError, Result};
use crate::output::{display_path, Printer};
use crate::pattern::{self, Options};

/// Output encodings for a generated pattern.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Raw SVG markup
    Svg,
    /// Base64-encoded SVG
    Base64,
    /// CSS url(data:image/svg+xml;base64,...) value
    DataUri,
}

/// Generate a pattern from a seed string
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed string (a user id, content hash, ...)
    pub seed: String,

    /// Pattern generator to use (default: selected from the digest)
    #[arg(long, short)]
    pub generator: Option<String>,

    /// Explicit background colour (hex)
    #[arg(long)]
    pub color: Option<String>,

    /// Base colour the background is derived from (hex)
    #[arg(long)]
    pub base_color: Option<String>,

    /// Pin the digest instead of hashing the seed
    #[arg(long)]
    pub hash: Option<String>,

    /// Output encoding
    #[arg(long, value_enum, default_value = "svg")]
    pub format: Format,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let options = build_options(&args);

    let text = match args.format {
        Format::Svg => pattern::generate(&args.seed, options)?,
        Format::Base64 => encode::base64_string(&args.seed, options)?,
        Format::DataUri => encode::uri_image(&args.seed, options)?,
    };

    match &args.output {
        Some(path) => {
            write_output(path, &text)?;
            printer.status(
                "Generated",
                &format!("{} ({} bytes)", display_path(path), text.len()),
            );
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn build_options(args: &GenerateArgs) -> Options {
    let mut options = Options::new();
    options.generator = args.generator.clone();
    options.color = args.color.clone();
    options.base_color = args.base_color.clone();
    options.hash = args.hash.clone();
    options
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| GeotileError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}
