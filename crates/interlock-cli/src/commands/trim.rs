//! Trim command

use crate::TrimArgs;
use anyhow::Result;
use tracing::trace;

pub fn run(args: TrimArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "trim::run");
    let source = super::load_image(&args.input)?;
    let region = args.selection.unwrap_or_else(|| source.bounds());

    let tile = interlock_ops::trim(&source, region)?;
    super::save_image(&args.output, &tile.surface)?;

    if verbose > 0 {
        println!(
            "Trimmed {} to {} -> {}",
            region,
            tile.bounds,
            args.output.display()
        );
    }

    Ok(())
}
