//! Placement anchors.
//!
//! An [`Anchor`] names one of the nine reference points of a rectangle
//! (three rows by three columns). It is used by
//! [`Rectangle::anchored_to`](crate::Rectangle::anchored_to) to place a child
//! rectangle against a parent.

use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;

/// A relative placement tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Anchor {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleMiddle,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Anchor {
    /// All anchors in row-major order.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopMiddle,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleMiddle,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomMiddle,
        Anchor::BottomRight,
    ];

    /// The kebab-case name used in layout files.
    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopMiddle => "top-middle",
            Anchor::TopRight => "top-right",
            Anchor::MiddleLeft => "middle-left",
            Anchor::MiddleMiddle => "middle-middle",
            Anchor::MiddleRight => "middle-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomMiddle => "bottom-middle",
            Anchor::BottomRight => "bottom-right",
        }
    }

    /// Returns true if [`Rectangle::anchored_to`](crate::Rectangle::anchored_to)
    /// has a placement rule for this anchor.
    ///
    /// Only the bottom row is placed; everything else yields the sentinel.
    #[inline]
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            Anchor::BottomLeft | Anchor::BottomMiddle | Anchor::BottomRight
        )
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.name() == normalized)
            .ok_or_else(|| GeometryError::UnknownAnchorName(s.to_string()))
    }
}
