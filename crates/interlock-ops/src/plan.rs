//! Repeat geometry and the per-session render plan.
//!
//! Given a tile of size `T`, a requested margin `M` and a selection of size
//! `S`, per axis:
//!
//! ```text
//! margin    = min(M, T / 2)
//! pitch     = T - margin                       (effective tile size)
//! repeats   = max(0, (S - margin) / pitch)
//! sheet     = repeats * pitch + margin
//! center    = (S - sheet) / 2
//! origin    = round(S.origin + center + position * center)
//! ```
//!
//! Copies of the tile are laid out every `pitch` pixels, so neighbouring
//! copies overlap by `margin` pixels. The sheet is the area covered by
//! those copies; everything else in the selection stays transparent.
//!
//! # Example
//!
//! ```rust
//! use interlock_core::{Rect, Size};
//! use interlock_ops::plan::plan;
//!
//! let g = plan(Size::new(10, 10), Size::new(2, 2), Rect::new(0, 0, 30, 30), (0.0, 0.0));
//! assert_eq!(g.effective, Size::new(8, 8));
//! assert_eq!(g.repeats, (3, 3));
//! assert_eq!(g.sheet, Rect::new(2, 2, 26, 26));
//! ```

use interlock_core::{Rect, Size, Surface};
use tracing::{debug, trace};

use crate::params::TileParams;
use crate::trim::{Tile, trim};
use crate::{OpsError, OpsResult};

/// Repeat geometry derived from tile size, margin, selection and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Margin after clamping to half the tile size.
    pub margin: Size,
    /// Repeat pitch: tile size minus margin, at least 1.
    pub effective: Size,
    /// Number of full pitch steps that fit, per axis.
    pub repeats: (u32, u32),
    /// Area covered by tile copies, in destination coordinates.
    pub sheet: Rect,
}

/// Computes the repeat geometry. Pure arithmetic; never fails.
pub fn plan(tile: Size, raw_margin: Size, selection: Rect, position: (f64, f64)) -> Geometry {
    let margin = Size::new(
        raw_margin.width.min(tile.width / 2),
        raw_margin.height.min(tile.height / 2),
    );
    let effective = Size::new(
        tile.width.saturating_sub(margin.width).max(1),
        tile.height.saturating_sub(margin.height).max(1),
    );

    let repeats_along = |extent: u32, margin: u32, pitch: u32| -> u32 {
        ((i64::from(extent) - i64::from(margin)) / i64::from(pitch)).max(0) as u32
    };
    let repeats = (
        repeats_along(selection.width, margin.width, effective.width),
        repeats_along(selection.height, margin.height, effective.height),
    );

    let sheet_size = Size::new(
        repeats.0 * effective.width + margin.width,
        repeats.1 * effective.height + margin.height,
    );

    let place = |origin: i32, extent: u32, sheet: u32, pos: f64| -> i32 {
        let center = (i64::from(extent) - i64::from(sheet)) as f64 / 2.0;
        (f64::from(origin) + center + pos * center).round_ties_even() as i32
    };
    let sheet = Rect::new(
        place(selection.x, selection.width, sheet_size.width, position.0),
        place(selection.y, selection.height, sheet_size.height, position.1),
        sheet_size.width,
        sheet_size.height,
    );

    Geometry {
        margin,
        effective,
        repeats,
        sheet,
    }
}

/// Everything a render pass reads, frozen for the session.
///
/// Built once from the source, selection and validated parameters, then
/// shared by reference with every worker. Changing parameters produces a
/// new plan through [`RenderPlan::with_params`], which keeps the already
/// trimmed tile.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    tile: Tile,
    selection: Rect,
    params: TileParams,
    geometry: Geometry,
}

impl RenderPlan {
    /// Trims the selection of `source` and plans the repeat geometry.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidParameter`] if `params` fail validation
    /// - [`OpsError::InvalidDimensions`] if the selection does not overlap
    ///   the source
    pub fn build(source: &Surface, selection: Rect, params: TileParams) -> OpsResult<Self> {
        trace!(selection = %selection, ?params, "RenderPlan::build");
        params.validate()?;

        let selection = selection.intersect(&source.bounds()).ok_or_else(|| {
            OpsError::InvalidDimensions(format!(
                "selection {} does not overlap source {}",
                selection,
                source.size()
            ))
        })?;

        let tile = trim(source, selection)?;
        Self::from_tile(tile, selection, params)
    }

    /// Plans the geometry for an already trimmed tile.
    ///
    /// # Errors
    ///
    /// Fails if `params` are invalid or the tile or selection is empty.
    pub fn from_tile(tile: Tile, selection: Rect, params: TileParams) -> OpsResult<Self> {
        params.validate()?;
        if tile.surface.is_empty() || selection.is_empty() {
            return Err(OpsError::InvalidDimensions(format!(
                "tile {} / selection {} must be non-empty",
                tile.surface.size(),
                selection
            )));
        }

        let geometry = plan(
            tile.surface.size(),
            Size::new(params.horizontal_margin, params.vertical_margin),
            selection,
            params.quantized_position(),
        );
        debug!(
            tile = %tile.surface.size(),
            margin = %geometry.margin,
            pitch = %geometry.effective,
            repeats_x = geometry.repeats.0,
            repeats_y = geometry.repeats.1,
            sheet = %geometry.sheet,
            "Planned tile sheet"
        );

        Ok(Self {
            tile,
            selection,
            params,
            geometry,
        })
    }

    /// Re-plans with new parameters, reusing the trimmed tile.
    ///
    /// # Errors
    ///
    /// Fails if `params` are invalid.
    pub fn with_params(&self, params: TileParams) -> OpsResult<Self> {
        Self::from_tile(self.tile.clone(), self.selection, params)
    }

    /// The trimmed tile.
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    /// The selection being rendered, clipped to the source.
    pub fn selection(&self) -> Rect {
        self.selection
    }

    /// The parameters this plan was built from.
    pub fn params(&self) -> &TileParams {
        &self.params
    }

    /// The full repeat geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Clamped margin.
    pub fn margin(&self) -> Size {
        self.geometry.margin
    }

    /// Repeat pitch.
    pub fn effective_tile_size(&self) -> Size {
        self.geometry.effective
    }

    /// Full repeats per axis.
    pub fn repeats(&self) -> (u32, u32) {
        self.geometry.repeats
    }

    /// Sheet rectangle in destination coordinates.
    pub fn sheet(&self) -> Rect {
        self.geometry.sheet
    }
}
