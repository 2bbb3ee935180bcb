// src/main.rs
mod utils;
mod source;
mod extractors;
mod storage;

use std::path::PathBuf;

use clap::Parser;
use utils::AppError;
use extractors::{ExtractorConfig, JobExtractor};
use storage::CsvStore;

/// Command Line Interface for the job search results extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Saved HTML snapshot of a job search results page
    #[arg(short, long, default_value = "job-search.html")]
    input: PathBuf,

    /// CSV file to write the extracted jobs to
    #[arg(short, long, default_value = "linkedin_jobs.csv")]
    output: PathBuf,

    /// Quiet mode - only warnings, per-job progress drops to DEBUG
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.quiet);
    tracing::info!("Starting processing for args: {:?}", args);

    let count = run(&args)?;
    println!("Found {} job listings", count);

    Ok(())
}

/// Load, extract, save. Returns the number of jobs extracted.
fn run(args: &Args) -> Result<usize, AppError> {
    // 1. Read the document; a missing or unreadable file aborts the run
    let content = source::load_document(&args.input)?;

    // 2. Extract job records
    let extractor = JobExtractor::new(ExtractorConfig {
        trace_candidates: !args.quiet,
    });
    let jobs = extractor.extract(&content);
    tracing::info!("Extracted {} valid jobs from {}", jobs.len(), args.input.display());

    // 3. Save to CSV
    let store = CsvStore::new(&args.output);
    if store.save_jobs(&jobs)? > 0 {
        tracing::debug!("CSV written to {}", store.output_path().display());
    }

    Ok(jobs.len())
}
