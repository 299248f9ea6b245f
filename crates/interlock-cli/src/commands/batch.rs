//! Batch processing command

use crate::{BatchArgs, TilingArgs};
use anyhow::{Result, bail};
use interlock_ops::{NeverCancel, RenderOutcome, parallel};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, trace};

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, "batch::run");

    // Reject bad flags once instead of per file
    super::tile_params(&args.tiling)?;

    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch processing");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    std::fs::create_dir_all(&args.output_dir)?;

    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| process_file(input, &args.output_dir, &args.tiling, verbose))
        .collect();

    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(()) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(input: &Path, output_dir: &Path, tiling: &TilingArgs, verbose: u8) -> Result<()> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let output = output_dir.join(format!("{}.png", stem));

    if verbose > 0 {
        println!("Processing {} -> {}", input.display(), output.display());
    }

    let source = super::load_image(input)?;
    let plan = super::build_plan(&source, tiling)?;

    let mut result = source.clone();
    if parallel::render_parallel(&plan, &mut result, &NeverCancel) == RenderOutcome::Cancelled {
        bail!("Render of {} was cancelled", input.display());
    }

    super::save_image(&output, &result)
}
