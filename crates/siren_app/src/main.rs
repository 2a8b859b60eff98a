//! Siren - PSP Audio Recovery Tool
//!
//! Scans an opaque game data container for embedded RIFF audio records,
//! extracts them deduplicated by content hash, and optionally converts
//! each one to WAV through the external `psp_at3tool` decoder.

use anyhow::{Context, Result};
use clap::Parser;
use humansize::{format_size, BINARY};
use std::path::PathBuf;
use tracing::Level;

use siren_core::extraction::extract_all;
use siren_core::transcode::decode_all;
use siren_core::BlockSource;
use siren_io::{At3Tool, ContainerReader};

#[derive(Parser, Debug)]
#[command(name = "siren")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Container file to scan (e.g. PSP_GAME/USRDIR/cfc.dig)
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the extracted .at3 files are written into
    #[arg(short, long, default_value = "./extracted")]
    output: PathBuf,

    /// Path to the psp_at3tool binary; WAV conversion is skipped when absent
    #[arg(short, long)]
    at3tool: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_target(false)
        .init();

    let reader = ContainerReader::new(&args.input)
        .with_context(|| format!("Failed to open container: {}", args.input.display()))?;

    println!("[Siren] Scanning container: {}", args.input.display());
    println!("[Siren] Container size: {}", format_size(reader.size(), BINARY));

    let report = extract_all(reader, &args.output, |value| println!("{value}%"))
        .with_context(|| format!("Extraction failed on {}", args.input.display()))?;

    println!(
        "[Siren] Extraction complete: {} distinct file(s) ({} match(es)) -> {}",
        report.distinct_files(),
        report.matches_found,
        args.output.display()
    );

    if let Some(tool) = args.at3tool {
        // Stable conversion order regardless of hash-set iteration.
        let mut at3_paths: Vec<PathBuf> = report.paths.into_iter().collect();
        at3_paths.sort();

        println!(
            "[Siren] Converting {} file(s) with {}...",
            at3_paths.len(),
            tool.display()
        );

        let summary = decode_all(&At3Tool::new(tool), &at3_paths);

        println!(
            "[Siren] Conversion finished: {} WAV file(s) written, {} failed",
            summary.converted.len(),
            summary.failed.len()
        );
    }

    Ok(())
}
