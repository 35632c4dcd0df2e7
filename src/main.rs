//! scriptdoc — extract API documentation from `/*# ... */` comment blocks.
//!
//! Every input file is read as raw bytes and concatenated in argument
//! order. Each documentation block becomes one function or variable
//! element, and the resulting document is written to the output file:
//!
//! `scriptdoc script_vmath.cpp script_sys.cpp build/script.doc`

mod encode;
mod logging;
mod model;
mod parser;
mod report;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "scriptdoc",
    about = "Extract API documentation from /*# ... */ comment blocks",
    override_usage = "scriptdoc [OPTIONS] INFILE... OUTFILE"
)]
struct Cli {
    /// Input files (glob patterns supported) followed by the output file
    #[arg(value_name = "PATHS", required = true, num_args = 2..)]
    paths: Vec<String>,

    /// Output format: protobuf (default), json
    #[arg(short = 'f', long, default_value = "protobuf")]
    format: String,

    /// Log debug details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize_logging(logging::level_for(cli.verbose, cli.quiet))?;

    let (output, inputs) = cli
        .paths
        .split_last()
        .context("an output file is required")?;

    // Resolve the format before touching any file
    let encoder = encode::create_encoder(&cli.format)?;

    let input_files = expand_inputs(inputs)?;
    let input = read_inputs(&input_files)?;

    let mut reporter = report::TracingReporter::default();
    let doc = parser::parse_document(&input, &mut reporter);
    info!(
        elements = doc.elements.len(),
        skipped = reporter.count(),
        "parsed {} input file(s)",
        input_files.len()
    );

    let bytes = encoder.encode(&doc)?;
    write_atomic(Path::new(output), &bytes)?;
    debug!(format = encoder.name(), bytes = bytes.len(), "wrote {}", output);

    Ok(())
}

/// Resolve input arguments into file paths, keeping argument order.
///
/// An argument naming an existing file is taken as is; anything else is
/// expanded as a glob pattern with its matches sorted.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            bail!("no files matched: {}", pattern);
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}

/// Read and concatenate every input file, with no separator between them.
fn read_inputs(files: &[PathBuf]) -> Result<String> {
    let mut raw = Vec::new();
    for path in files {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        debug!(bytes = bytes.len(), "read {}", path.display());
        raw.extend_from_slice(&bytes);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Write `bytes` to a temporary file next to `path`, then move it into
/// place so a failed run never leaves a partial output file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
