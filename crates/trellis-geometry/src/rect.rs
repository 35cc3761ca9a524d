//! The generic layout rectangle.
//!
//! [`Rectangle`] is a plain value: every transform returns a new rectangle and
//! leaves the receiver untouched. Rectangles with zero or negative extents are
//! representable on purpose; callers check [`Rectangle::is_valid`] after a
//! chain of transforms instead of handling an error at every step.

use std::fmt;

use crate::anchor::Anchor;
use crate::error::{GeometryError, GeometryResult};
use crate::logging::targets;
use crate::scalar::Scalar;

/// An axis-aligned rectangle defined by its top-left corner and extents.
///
/// The coordinate type defaults to `i32`, which is what widget layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle<T = i32> {
    x: T,
    y: T,
    width: T,
    height: T,
}

impl<T: Scalar> Rectangle<T> {
    /// Create a new rectangle. No validation is performed.
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Left edge.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Top edge.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.width
    }

    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// Horizontal center. Truncates for integer coordinates.
    #[inline]
    pub fn middle_x(&self) -> T {
        self.x + self.width.half()
    }

    /// Vertical center. Truncates for integer coordinates.
    #[inline]
    pub fn middle_y(&self) -> T {
        self.y + self.height.half()
    }

    /// Check that the rectangle has strictly positive width and height.
    ///
    /// This is `x < right && y < bottom` for any rectangle whose edges are
    /// representable, but never computes the edges, so it cannot overflow.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > T::ZERO && self.height > T::ZERO
    }

    /// Check if a point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive, so adjacent rectangles never both claim a point.
    #[inline]
    pub fn contains(&self, px: T, py: T) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    fn checked_right(&self) -> GeometryResult<T> {
        self.x
            .checked_add(self.width)
            .ok_or(GeometryError::CoordinateOutOfRange("right"))
    }

    fn checked_bottom(&self) -> GeometryResult<T> {
        self.y
            .checked_add(self.height)
            .ok_or(GeometryError::CoordinateOutOfRange("bottom"))
    }

    /// Return the rectangle if its right and bottom edges fit `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoordinateOutOfRange`] naming the first edge
    /// that overflows.
    pub fn checked(self) -> GeometryResult<Self> {
        self.checked_right()?;
        self.checked_bottom()?;
        Ok(self)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    #[inline]
    pub fn set_width(&mut self, width: T) {
        self.width = width;
    }

    #[inline]
    pub fn set_height(&mut self, height: T) {
        self.height = height;
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Same position, new size.
    #[inline]
    pub fn resized(&self, width: T, height: T) -> Self {
        Self::new(self.x, self.y, width, height)
    }

    /// Same size, new position.
    #[inline]
    pub fn moved(&self, x: T, y: T) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Same size, positioned so the center lands on `(x, y)`.
    #[inline]
    pub fn centered_to(&self, x: T, y: T) -> Self {
        Self::new(
            x - self.width.half(),
            y - self.height.half(),
            self.width,
            self.height,
        )
    }

    /// Move the left edge by `dx` while the right edge stays put.
    #[inline]
    pub fn left_shifted(&self, dx: T) -> Self {
        Self::new(self.x + dx, self.y, self.width - dx, self.height)
    }

    /// Move the right edge by `dx` while the left edge stays put.
    #[inline]
    pub fn right_shifted(&self, dx: T) -> Self {
        Self::new(self.x, self.y, self.width + dx, self.height)
    }

    /// Inset the left and right edges by `margin`.
    ///
    /// A negative margin grows the rectangle. A margin larger than half the
    /// width produces a negative width; check [`is_valid`](Self::is_valid).
    #[inline]
    pub fn with_horizontal_margins(&self, margin: T) -> Self {
        Self::new(
            self.x + margin,
            self.y,
            self.width - margin * T::TWO,
            self.height,
        )
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Build a `width` x `height` rectangle at horizontal position `x` whose
    /// bottom edge sits `offset_from_bottom` above the bottom of `parent`.
    pub fn anchored_to_bottom_of(
        parent: &Rectangle<T>,
        x: T,
        width: T,
        height: T,
        offset_from_bottom: T,
    ) -> Self {
        Self::new(
            x,
            parent.bottom() - height - offset_from_bottom,
            width,
            height,
        )
    }

    /// Like [`anchored_to_bottom_of`](Self::anchored_to_bottom_of), but
    /// reports placements that do not fit `T` instead of overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoordinateOutOfRange`] if the parent's bottom
    /// edge, the computed `y`, or the result's own edges overflow.
    pub fn try_anchored_to_bottom_of(
        parent: &Rectangle<T>,
        x: T,
        width: T,
        height: T,
        offset_from_bottom: T,
    ) -> GeometryResult<Self> {
        let y = parent
            .checked_bottom()?
            .checked_sub(height)
            .and_then(|y| y.checked_sub(offset_from_bottom))
            .ok_or(GeometryError::CoordinateOutOfRange("y"))?;
        Self::new(x, y, width, height).checked()
    }

    /// Place a `width` x `height` rectangle inside `parent` at `anchor`.
    ///
    /// Only the bottom row of anchors is placed:
    ///
    /// | anchor | x | y |
    /// |---|---|---|
    /// | `BottomLeft` | `parent.x` | `parent.bottom - height` |
    /// | `BottomMiddle` | `parent.x` | `parent.bottom - height` |
    /// | `BottomRight` | `parent.right - width` | `parent.bottom - height` |
    ///
    /// `BottomMiddle` shares the left edge with `BottomLeft`; both keep the
    /// caller's width.
    ///
    /// Any other anchor returns `Rectangle::default()`, which is invalid.
    /// Use [`try_anchored_to`](Self::try_anchored_to) to get an error instead.
    pub fn anchored_to(parent: &Rectangle<T>, anchor: Anchor, width: T, height: T) -> Self {
        match Self::place(parent, anchor, width, height) {
            Some(rect) => rect,
            None => {
                tracing::debug!(
                    target: targets::ANCHOR,
                    %anchor,
                    "no placement rule for anchor, returning empty rectangle"
                );
                Self::default()
            }
        }
    }

    /// Like [`anchored_to`](Self::anchored_to), but reports unsupported
    /// anchors as [`GeometryError::UnsupportedAnchor`] and arithmetic that
    /// does not fit `T` as [`GeometryError::CoordinateOutOfRange`].
    pub fn try_anchored_to(
        parent: &Rectangle<T>,
        anchor: Anchor,
        width: T,
        height: T,
    ) -> GeometryResult<Self> {
        let x = match anchor {
            Anchor::BottomLeft | Anchor::BottomMiddle => Some(parent.x),
            Anchor::BottomRight => parent.checked_right()?.checked_sub(width),
            _ => return Err(GeometryError::UnsupportedAnchor(anchor)),
        }
        .ok_or(GeometryError::CoordinateOutOfRange("x"))?;
        let y = parent
            .checked_bottom()?
            .checked_sub(height)
            .ok_or(GeometryError::CoordinateOutOfRange("y"))?;
        Self::new(x, y, width, height).checked()
    }

    fn place(parent: &Rectangle<T>, anchor: Anchor, width: T, height: T) -> Option<Self> {
        let y = parent.bottom() - height;
        let x = match anchor {
            Anchor::BottomLeft | Anchor::BottomMiddle => parent.x,
            Anchor::BottomRight => parent.x + parent.width - width,
            _ => return None,
        };
        Some(Self::new(x, y, width, height))
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Rectangle<T> {
    fn from((x, y, width, height): (T, T, T, T)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl<T: Scalar> From<Rectangle<T>> for (T, T, T, T) {
    fn from(rect: Rectangle<T>) -> Self {
        (rect.x, rect.y, rect.width, rect.height)
    }
}

impl<T: Scalar> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

static_assertions::assert_impl_all!(Rectangle<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Rectangle<f64>: Send, Sync, Copy);
