//! CLI command implementations

pub mod batch;
pub mod plan;
pub mod tile;
pub mod trim;

use anyhow::{Context, Result, bail};
use interlock_core::{Rect, Surface};
use interlock_ops::{RenderPlan, TileParams};
use std::path::Path;

use crate::TilingArgs;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Surface> {
    interlock_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &Surface) -> Result<()> {
    interlock_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parse "X,Y" into a position vector.
pub fn parse_position(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y] = parts.as_slice() else {
        return Err(format!("expected X,Y, got '{s}'"));
    };
    let x: f64 = x.parse().map_err(|e| format!("invalid X '{x}': {e}"))?;
    let y: f64 = y.parse().map_err(|e| format!("invalid Y '{y}': {e}"))?;
    Ok((x, y))
}

/// Parse "X,Y,W,H" into a rectangle.
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, w, h] = parts.as_slice() else {
        return Err(format!("expected X,Y,W,H, got '{s}'"));
    };
    let int = |v: &str| v.parse::<i32>().map_err(|e| format!("invalid coordinate '{v}': {e}"));
    let dim = |v: &str| v.parse::<u32>().map_err(|e| format!("invalid size '{v}': {e}"));
    Ok(Rect::new(int(x)?, int(y)?, dim(w)?, dim(h)?))
}

/// Resolve command-line tiling flags into validated parameters.
pub fn tile_params(args: &TilingArgs) -> Result<TileParams> {
    let mut params = TileParams {
        linked_margins: !args.unlinked,
        ..TileParams::default()
    };

    if let Some(m) = args.margin {
        params.horizontal_margin = m;
        params.vertical_margin = m;
    }
    if let (true, Some(h), Some(v)) = (params.linked_margins, args.hmargin, args.vmargin) {
        if h != v {
            bail!("Margins are linked ({h} vs {v}); pass --unlinked for different margins");
        }
    }
    if let Some(h) = args.hmargin {
        params.set_horizontal_margin(h);
    }
    if let Some(v) = args.vmargin {
        params.set_vertical_margin(v);
    }
    if let Some(position) = args.position {
        params.position = position;
    }

    params.validate()?;
    Ok(params)
}

/// Build the render plan for a loaded source.
pub fn build_plan(source: &Surface, args: &TilingArgs) -> Result<RenderPlan> {
    let params = tile_params(args)?;
    let selection = args.selection.unwrap_or_else(|| source.bounds());
    Ok(RenderPlan::build(source, selection, params)?)
}
