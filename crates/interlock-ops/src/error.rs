//! Error types for tiling operations.

use thiserror::Error;

/// Error type for tiling operations.
///
/// Geometry never fails: margins, repeat counts and sheet placement are
/// clamped instead. Errors only come from rejected parameters or unusable
/// host buffers.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Parameter outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Selection or surface dimensions cannot be rendered.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Error from the surface layer.
    #[error(transparent)]
    Core(#[from] interlock_core::Error),
}

/// Result type for tiling operations.
pub type OpsResult<T> = Result<T, OpsError>;
