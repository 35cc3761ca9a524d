//! Error types for the geometry crate.

use thiserror::Error;

use crate::anchor::Anchor;

/// Errors that can occur while computing layout geometry.
///
/// Most geometry operations never fail: degenerate results are returned as
/// invalid rectangles and checked with [`Rectangle::is_valid`](crate::Rectangle::is_valid).
/// Only requests that have no meaningful answer are reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A grid subdivision was requested with zero divisions.
    #[error("grid divisions must be greater than zero")]
    ZeroGridDivisions,

    /// The anchor has no placement rule.
    #[error("anchor {0} is not supported for placement")]
    UnsupportedAnchor(Anchor),

    /// A coordinate or extent does not fit the coordinate type, either as
    /// given or after placement arithmetic.
    #[error("{0} is out of range for the coordinate type")]
    CoordinateOutOfRange(&'static str),

    /// A string did not name any anchor.
    #[error("unknown anchor name: {0:?}")]
    UnknownAnchorName(String),
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
