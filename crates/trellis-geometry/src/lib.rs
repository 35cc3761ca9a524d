//! Layout geometry for Trellis.
//!
//! This crate provides [`Rectangle`], a generic axis-aligned rectangle used to
//! compute widget placement, along with the [`Anchor`] tags used to place one
//! rectangle against another.
//!
//! # Building layouts
//!
//! ```
//! use trellis_geometry::{Anchor, Rectangle};
//!
//! let window = Rectangle::new(0, 0, 400, 300);
//!
//! // A button in the bottom-right corner
//! let ok = Rectangle::anchored_to(&window, Anchor::BottomRight, 80, 25);
//! assert_eq!(ok, Rectangle::new(320, 275, 80, 25));
//!
//! // The top half of the window, minus 5 pixels on either side
//! let top = Rectangle::from_grid_positions(&window, 2, 0, 0, 2, 1)?
//!     .with_horizontal_margins(5);
//! assert_eq!(top, Rectangle::new(5, 0, 390, 150));
//! # Ok::<(), trellis_geometry::GeometryError>(())
//! ```
//!
//! # Invalid rectangles
//!
//! Transforms never fail. A transform that collapses a rectangle (for example
//! margins wider than the rectangle itself) returns a rectangle with zero or
//! negative extents, and [`Rectangle::anchored_to`] returns
//! `Rectangle::default()` for anchors it has no rule for. Check
//! [`Rectangle::is_valid`] before using the result:
//!
//! ```
//! use trellis_geometry::{Anchor, Rectangle};
//!
//! let parent = Rectangle::new(0, 0, 100, 100);
//! let r = Rectangle::anchored_to(&parent, Anchor::TopLeft, 10, 10);
//! assert!(!r.is_valid());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Rectangle`] and [`Anchor`].

mod anchor;
mod error;
mod grid;
pub mod logging;
mod rect;
mod scalar;

pub use anchor::Anchor;
pub use error::{GeometryError, GeometryResult};
pub use rect::Rectangle;
pub use scalar::Scalar;
