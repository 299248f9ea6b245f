//! Plan command - prints the repeat geometry

use crate::PlanArgs;
use anyhow::Result;

pub fn run(args: PlanArgs) -> Result<()> {
    let source = super::load_image(&args.input)?;
    let plan = super::build_plan(&source, &args.tiling)?;
    let params = plan.params();

    println!("File:       {}", args.input.display());
    println!("Selection:  {}", plan.selection());
    println!("Tile:       {} (from {})", plan.tile().surface.size(), plan.tile().bounds);
    println!(
        "Margin:     {} (requested {}x{}{})",
        plan.margin(),
        params.horizontal_margin,
        params.vertical_margin,
        if params.linked_margins { ", linked" } else { "" }
    );
    println!("Pitch:      {}", plan.effective_tile_size());
    println!("Repeats:    {}x{}", plan.repeats().0, plan.repeats().1);
    let (px, py) = params.quantized_position();
    println!("Position:   {px:.3}, {py:.3}");
    println!("Sheet:      {}", plan.sheet());

    Ok(())
}
