//! Tiling parameters.
//!
//! [`TileParams`] is the already-resolved numeric configuration a render
//! session consumes. Hosts collect it however they like (sliders, CLI
//! flags) and [`TileParams::validate`] checks it before a
//! [`RenderPlan`](crate::plan::RenderPlan) is built.
//!
//! # Example
//!
//! ```rust
//! use interlock_ops::TileParams;
//!
//! let mut params = TileParams::default();
//! params.set_horizontal_margin(12);
//! // Margins are linked by default
//! assert_eq!(params.vertical_margin, 12);
//!
//! params.position = (0.25, -1.0);
//! assert!(params.validate().is_ok());
//! ```

use std::ops::RangeInclusive;

use crate::{OpsError, OpsResult};

/// Largest accepted negative margin, per axis.
pub const MAX_MARGIN: u32 = 1000;

/// Accepted range for each position component.
pub const POSITION_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// Decimal places kept by [`TileParams::quantized_position`].
pub const POSITION_DECIMALS: i32 = 3;

/// Parameters of one tiling render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    /// Horizontal overlap between adjacent tile copies, in pixels.
    pub horizontal_margin: u32,
    /// Vertical overlap between adjacent tile copies, in pixels.
    pub vertical_margin: u32,
    /// Mirror margin edits to the other axis.
    pub linked_margins: bool,
    /// Sheet offset inside the selection: `(0, 0)` centers, `-1` is flush
    /// top/left and `+1` flush bottom/right on that axis.
    pub position: (f64, f64),
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            horizontal_margin: 0,
            vertical_margin: 0,
            linked_margins: true,
            position: (0.0, 0.0),
        }
    }
}

impl TileParams {
    /// Creates parameters with independent margins and a position.
    pub fn new(horizontal_margin: u32, vertical_margin: u32, position: (f64, f64)) -> Self {
        Self {
            horizontal_margin,
            vertical_margin,
            linked_margins: horizontal_margin == vertical_margin,
            position,
        }
    }

    /// Sets the horizontal margin, mirroring it when margins are linked.
    pub fn set_horizontal_margin(&mut self, margin: u32) {
        self.horizontal_margin = margin;
        if self.linked_margins {
            self.vertical_margin = margin;
        }
    }

    /// Sets the vertical margin, mirroring it when margins are linked.
    pub fn set_vertical_margin(&mut self, margin: u32) {
        self.vertical_margin = margin;
        if self.linked_margins {
            self.horizontal_margin = margin;
        }
    }

    /// Position rounded to [`POSITION_DECIMALS`] decimal places.
    pub fn quantized_position(&self) -> (f64, f64) {
        let scale = 10f64.powi(POSITION_DECIMALS);
        let q = |v: f64| (v * scale).round() / scale;
        (q(self.position.0), q(self.position.1))
    }

    /// Checks every parameter against its accepted range.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> OpsResult<()> {
        for (name, value) in [
            ("horizontal_margin", self.horizontal_margin),
            ("vertical_margin", self.vertical_margin),
        ] {
            if value > MAX_MARGIN {
                return Err(OpsError::InvalidParameter(format!(
                    "{name} = {value} exceeds {MAX_MARGIN}"
                )));
            }
        }

        for (name, value) in [("position.x", self.position.0), ("position.y", self.position.1)] {
            if !value.is_finite() || !POSITION_RANGE.contains(&value) {
                return Err(OpsError::InvalidParameter(format!(
                    "{name} = {value} outside [-1, 1]"
                )));
            }
        }

        Ok(())
    }
}
