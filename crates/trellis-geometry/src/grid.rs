//! Grid-fraction subdivision of a rectangle.
//!
//! A parent rectangle is treated as an `n` x `n` grid of equal cells. A
//! sub-rectangle is addressed by the grid lines it spans, so
//! `(x0, y0) = (0, 0), (x1, y1) = (n, n)` is the whole parent and
//! `(0, 0), (1, 1)` is the top-left cell.
//!
//! Only the parent's extents are used: the result is measured from the
//! origin, not from the parent's top-left corner. Callers that lay out inside
//! an offset parent move the result themselves.
//!
//! Cell sizes are computed in `f64` and each grid line is converted back to
//! the coordinate type separately, so integer layouts may lose up to one unit
//! per edge but adjacent regions always share their edges exactly.

use crate::error::{GeometryError, GeometryResult};
use crate::logging::targets;
use crate::rect::Rectangle;
use crate::scalar::Scalar;

impl<T: Scalar> Rectangle<T> {
    /// The sub-rectangle of `parent` spanning grid lines `[x0, x1) x [y0, y1)`
    /// of a `divisions` x `divisions` grid.
    ///
    /// The parent's position is ignored. Grid lines past `divisions`
    /// extrapolate beyond the parent, and `x1 < x0` (or `y1 < y0`) yields an
    /// invalid rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroGridDivisions`] if `divisions` is zero,
    /// and [`GeometryError::CoordinateOutOfRange`] if a grid line or extent
    /// does not fit `T`.
    pub fn from_grid_positions(
        parent: &Rectangle<T>,
        divisions: u32,
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
    ) -> GeometryResult<Self> {
        if divisions == 0 {
            tracing::debug!(
                target: targets::GRID,
                %parent,
                "rejected grid subdivision with zero divisions"
            );
            return Err(GeometryError::ZeroGridDivisions);
        }

        let cell_width = parent.width().to_f64() / f64::from(divisions);
        let cell_height = parent.height().to_f64() / f64::from(divisions);
        let line = |cell: f64, n: u32, name: &'static str| {
            T::try_from_f64(cell * f64::from(n)).ok_or(GeometryError::CoordinateOutOfRange(name))
        };

        let left = line(cell_width, x0, "x")?;
        let top = line(cell_height, y0, "y")?;
        let right = line(cell_width, x1, "right")?;
        let bottom = line(cell_height, y1, "bottom")?;

        let width = right
            .checked_sub(left)
            .ok_or(GeometryError::CoordinateOutOfRange("width"))?;
        let height = bottom
            .checked_sub(top)
            .ok_or(GeometryError::CoordinateOutOfRange("height"))?;

        Ok(Self::new(left, top, width, height))
    }

    /// A single cell of a `divisions` x `divisions` grid over `parent`.
    ///
    /// Equivalent to `from_grid_positions(parent, divisions, column, row,
    /// column + 1, row + 1)`.
    pub fn grid_cell(
        parent: &Rectangle<T>,
        divisions: u32,
        column: u32,
        row: u32,
    ) -> GeometryResult<Self> {
        Self::from_grid_positions(
            parent,
            divisions,
            column,
            row,
            column.saturating_add(1),
            row.saturating_add(1),
        )
    }
}
