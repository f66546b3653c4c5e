//! Print return and destination addresses on an envelope.
//!
//! Reads a TOML description of the envelope (size code plus two address
//! blocks) and writes a single-page `envelope.pdf` in the working directory.
//! Pass `-` to read the description from standard input; with no argument a
//! built-in example is rendered.

mod config;
mod core;
mod error;
mod render;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{load_spec, InputSource};
use crate::core::size::resolve_size;

/// Fixed output path, relative to the working directory.
const OUTPUT_PATH: &str = "envelope.pdf";

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Render an envelope PDF from a TOML description")]
struct Cli {
    /// TOML input file, or `-` for standard input (defaults to a built-in example).
    input: Option<PathBuf>,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let source = InputSource::from_arg(cli.input.as_deref());
    run(&source, Path::new(OUTPUT_PATH))
}

/// Load, validate and render `source` into a PDF at `output`.
///
/// The output file is only created once the input, size and font have all
/// been validated.
fn run(source: &InputSource, output: &Path) -> Result<()> {
    let spec = load_spec(source)
        .with_context(|| format!("reading envelope from {}", source.describe()))?;

    let dims = resolve_size(&spec.size)?;
    tracing::debug!(
        "size {:?} resolved to {}x{} in",
        spec.size,
        dims.width,
        dims.height
    );

    let mut out =
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
    render::write_envelope_pdf(&mut out, dims, &spec.render, &spec.from, &spec.to)
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!("wrote {}", output.display());

    Ok(())
}
