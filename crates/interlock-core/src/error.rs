//! Error types for interlock-core operations.
//!
//! The [`Error`] enum covers the failure modes of surface construction and
//! region access. Geometry itself never fails: out-of-range values are
//! clamped by the planner instead.

use crate::rect::Rect;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading pixel surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// Region extends beyond surface bounds.
    #[error("region {region} exceeds surface bounds {width}x{height}")]
    InvalidRegion {
        /// Requested region
        region: Rect,
        /// Surface width
        width: u32,
        /// Surface height
        height: u32,
    },

    /// Dimensions do not match the supplied data or are unusable.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// What was wrong
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
