//! Tile command

use crate::TileArgs;
use anyhow::{Result, bail};
use interlock_ops::{NeverCancel, RenderOutcome, parallel, render_regions};
use std::time::Instant;
use tracing::{debug, info, trace};

pub fn run(args: TileArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "tile::run");
    let source = super::load_image(&args.input)?;
    let plan = super::build_plan(&source, &args.tiling)?;

    if verbose > 0 {
        println!(
            "Tiling {} ({}x{}): tile {}, margin {}, repeats {}x{}, sheet {}",
            args.input.display(),
            source.width(),
            source.height(),
            plan.tile().surface.size(),
            plan.margin(),
            plan.repeats().0,
            plan.repeats().1,
            plan.sheet(),
        );
    }

    // Pixels outside the selection keep the source content
    let mut output = source.clone();
    let start = Instant::now();
    let outcome = if args.sequential {
        let regions = plan
            .selection()
            .split_into_tiles(args.region_size, args.region_size);
        debug!(regions = regions.len(), "Sequential render");
        render_regions(&plan, &mut output, &regions, &NeverCancel)
    } else {
        parallel::render_parallel(&plan, &mut output, &NeverCancel)
    };
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "Render finished");

    if outcome == RenderOutcome::Cancelled {
        bail!("Render was cancelled");
    }

    super::save_image(&args.output, &output)?;

    if verbose > 0 {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
