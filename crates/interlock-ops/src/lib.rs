//! # interlock-ops
//!
//! Seamless interlocking tile rendering.
//!
//! A source sprite is trimmed to its opaque bounding box and repeated over
//! a selection on a regular grid. Neighbouring copies overlap by a
//! configurable negative margin, and the overlap bands are alpha-composited
//! so edges interlock instead of showing seams.
//!
//! # Pipeline
//!
//! ```text
//! source --trim--> Tile --plan--> Geometry --compose--> destination pixels
//! ```
//!
//! - [`trim`] - Opaque bounding box and tile extraction
//! - [`plan`] - Margin clamping, repeat counts, sheet placement; [`RenderPlan`]
//! - [`compose`] - Overlap zones and per-pixel blending
//! - [`composite`] - Premultiplied source-over
//! - [`render`] - Region render loops with cooperative cancellation
//! - [`parallel`] - Rayon scanline renderer (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use interlock_core::{Rgba8, Surface};
//! use interlock_ops::{NeverCancel, RenderPlan, TileParams, render};
//!
//! let mut sprite = Surface::new(64, 64);
//! for y in 20..30 {
//!     for x in 20..30 {
//!         sprite.set_pixel(x, y, Rgba8::opaque(255, 128, 0));
//!     }
//! }
//!
//! let params = TileParams::new(2, 2, (0.0, 0.0));
//! let plan = RenderPlan::build(&sprite, sprite.bounds(), params).unwrap();
//! assert_eq!(plan.repeats(), (7, 7));
//!
//! let mut out = Surface::new(64, 64);
//! let _ = render(&plan, &mut out, &NeverCancel);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod compose;
pub mod composite;
pub mod params;
pub mod plan;
pub mod render;
pub mod trim;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use compose::{Cell, Zone, render_pixel};
pub use error::{OpsError, OpsResult};
pub use params::TileParams;
pub use plan::{Geometry, RenderPlan, plan};
pub use render::{CancelToken, NeverCancel, RenderOutcome, render, render_region, render_regions};
pub use trim::{Tile, trim, trimmed_bounds};
