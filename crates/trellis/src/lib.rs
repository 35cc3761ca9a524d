//! Trellis: layout geometry and value mapping for plugin GUIs.
//!
//! Trellis is the host-independent part of a plugin GUI toolkit. It computes
//! where controls go and how their positions map to parameter values; drawing
//! and event dispatch are left to whatever windowing layer hosts the plugin.
//!
//! - [`Rectangle`] and [`Anchor`] (from `trellis-geometry`) place rectangles
//!   relative to each other.
//! - [`LinearValueConverter`] and friends (from `trellis-values`) map control
//!   positions to values.
//! - [`layout`] loads named-region layouts from TOML and resolves them against
//!   window bounds.
//!
//! # Getting Started
//!
//! ```
//! use trellis::prelude::*;
//!
//! let spec = LayoutSpec::from_toml_str(r#"
//! divisions = 2
//!
//! [[region]]
//! name = "display"
//! kind = "grid"
//! x0 = 0
//! y0 = 0
//! x1 = 2
//! y1 = 1
//!
//! [[region]]
//! name = "apply"
//! kind = "anchored"
//! anchor = "bottom-right"
//! width = 60
//! height = 20
//! "#)?;
//!
//! let layout = spec.resolve(&Rectangle::new(0, 0, 200, 100))?;
//! assert_eq!(layout.bounds("display"), Some(Rectangle::new(0, 0, 200, 50)));
//! assert_eq!(layout.bounds("apply"), Some(Rectangle::new(140, 80, 60, 20)));
//! # Ok::<(), trellis::TrellisError>(())
//! ```

mod error;
pub mod layout;
pub mod logging;

pub use error::{TrellisError, TrellisResult};
pub use layout::{LayoutSpec, Placement, RegionSpec, ResolvedLayout, ResolvedRegion, ValueRange};

pub use trellis_geometry::{Anchor, GeometryError, GeometryResult, Rectangle, Scalar};
pub use trellis_values::{
    LinearValueConverter, ValueConverter, ValueError, ValueResult, bound_value, hash_combine,
    map_value,
};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::layout::{LayoutSpec, Placement, ResolvedLayout, ValueRange};
    pub use crate::{TrellisError, TrellisResult};
    pub use trellis_geometry::{Anchor, Rectangle};
    pub use trellis_values::{LinearValueConverter, ValueConverter};
}
