//! Declarative layouts loaded from TOML.
//!
//! A [`LayoutSpec`] lists named regions and how each one is placed inside a
//! bounds rectangle. Resolving the layout against the current window bounds
//! gives a [`ResolvedLayout`] with one rectangle per region, so a window can
//! re-run the same layout whenever it is resized.
//!
//! # File format
//!
//! ```toml
//! # Default grid size for `grid` regions
//! divisions = 4
//!
//! [[region]]
//! name = "waveform"
//! kind = "grid"
//! x0 = 0
//! y0 = 0
//! x1 = 4
//! y1 = 3
//!
//! [[region]]
//! name = "ok"
//! kind = "anchored"
//! anchor = "bottom-right"
//! width = 80
//! height = 25
//!
//! [[region]]
//! name = "gain"
//! kind = "bottom-offset"
//! x = 5
//! width = 200
//! height = 20
//! offset = 30
//! range = { min = -60.0, max = 12.0 }
//! ```
//!
//! Region kinds:
//!
//! - `grid`: [`Rectangle::from_grid_positions`], moved by the bounds'
//!   top-left corner so the region sits inside the bounds. An optional
//!   per-region `divisions` overrides the file-level default.
//! - `anchored`: [`Rectangle::try_anchored_to`]. Anchors without a placement
//!   rule are an error here rather than an empty rectangle.
//! - `bottom-offset`: [`Rectangle::try_anchored_to_bottom_of`]. `x` is an
//!   absolute coordinate, not relative to the bounds.
//!
//! Numbers in the file are checked against the coordinate type, and so is
//! the placement arithmetic. A region that does not fit is an error, never a
//! wrapped or saturated rectangle.
//!
//! A region may carry a `range`, which becomes a [`LinearValueConverter`] for
//! the control placed there.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trellis_geometry::{Anchor, GeometryError, GeometryResult, Rectangle, Scalar};
use trellis_values::LinearValueConverter;

use crate::error::{TrellisError, TrellisResult};
use crate::logging::targets;

fn default_divisions() -> u32 {
    1
}

/// A set of named regions to place inside a bounds rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    /// Grid size used by `grid` regions that do not set their own.
    #[serde(default = "default_divisions")]
    pub divisions: u32,
    /// Regions in declaration order.
    #[serde(default, rename = "region")]
    pub regions: Vec<RegionSpec>,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            divisions: default_divisions(),
            regions: Vec::new(),
        }
    }
}

/// One named region of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub name: String,
    /// Value range for the control in this region, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,
    #[serde(flatten)]
    pub placement: Placement,
}

/// How a region is placed inside the layout bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Placement {
    /// Spans grid lines `[x0, x1) x [y0, y1)`.
    Grid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        divisions: Option<u32>,
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
    },
    /// Placed at an anchor point of the bounds.
    Anchored {
        anchor: Anchor,
        width: f64,
        height: f64,
    },
    /// Sits `offset` above the bottom of the bounds, at absolute `x`.
    BottomOffset {
        x: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        offset: f64,
    },
}

/// Minimum and maximum of a control's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// A linear converter over this range.
    pub fn converter(&self) -> LinearValueConverter {
        LinearValueConverter::new(self.min, self.max)
    }
}

impl LayoutSpec {
    /// Create an empty spec with the given default grid size.
    pub fn new(divisions: u32) -> Self {
        Self {
            divisions,
            regions: Vec::new(),
        }
    }

    /// Append a region.
    pub fn with_region(mut self, name: impl Into<String>, placement: Placement) -> Self {
        self.regions.push(RegionSpec {
            name: name.into(),
            range: None,
            placement,
        });
        self
    }

    /// Append a region for a control with a value range.
    pub fn with_ranged_region(
        mut self,
        name: impl Into<String>,
        placement: Placement,
        range: ValueRange,
    ) -> Self {
        self.regions.push(RegionSpec {
            name: name.into(),
            range: Some(range),
            placement,
        });
        self
    }

    /// Parse a spec from TOML text.
    pub fn from_toml_str(text: &str) -> TrellisResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a spec from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> TrellisResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TrellisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render the layout as TOML.
    pub fn to_toml_string(&self) -> TrellisResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write the layout to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> TrellisResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| TrellisError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Place every region inside `bounds`.
    ///
    /// Regions that resolve to an invalid rectangle are kept (and logged);
    /// see [`ResolvedLayout::invalid_regions`].
    ///
    /// # Errors
    ///
    /// - [`TrellisError::DuplicateRegion`] if two regions share a name.
    /// - [`TrellisError::Region`] if a grid region has zero divisions, an
    ///   anchored region uses an anchor without a placement rule, or a number
    ///   or computed edge does not fit `T`.
    pub fn resolve<T: Scalar>(&self, bounds: &Rectangle<T>) -> TrellisResult<ResolvedLayout<T>> {
        let mut seen = HashSet::with_capacity(self.regions.len());
        let mut regions = Vec::with_capacity(self.regions.len());

        for spec in &self.regions {
            if !seen.insert(spec.name.as_str()) {
                return Err(TrellisError::DuplicateRegion(spec.name.clone()));
            }

            let rect = self
                .place(&spec.placement, bounds)
                .map_err(|source| TrellisError::Region {
                    name: spec.name.clone(),
                    source,
                })?;

            if rect.is_valid() {
                debug!(target: targets::LAYOUT, region = %spec.name, %rect, "placed region");
            } else {
                warn!(target: targets::LAYOUT, region = %spec.name, %rect, %bounds, "region resolved to an empty rectangle");
            }

            regions.push(ResolvedRegion {
                name: spec.name.clone(),
                bounds: rect,
                converter: spec.range.as_ref().map(ValueRange::converter),
            });
        }

        Ok(ResolvedLayout { regions })
    }

    fn place<T: Scalar>(
        &self,
        placement: &Placement,
        bounds: &Rectangle<T>,
    ) -> GeometryResult<Rectangle<T>> {
        match *placement {
            Placement::Grid {
                divisions,
                x0,
                y0,
                x1,
                y1,
            } => {
                let cell = Rectangle::from_grid_positions(
                    bounds,
                    divisions.unwrap_or(self.divisions),
                    x0,
                    y0,
                    x1,
                    y1,
                )?;
                let x = bounds
                    .x()
                    .checked_add(cell.x())
                    .ok_or(GeometryError::CoordinateOutOfRange("x"))?;
                let y = bounds
                    .y()
                    .checked_add(cell.y())
                    .ok_or(GeometryError::CoordinateOutOfRange("y"))?;
                cell.moved(x, y).checked()
            }
            Placement::Anchored {
                anchor,
                width,
                height,
            } => Rectangle::try_anchored_to(
                bounds,
                anchor,
                coordinate(width, "width")?,
                coordinate(height, "height")?,
            ),
            Placement::BottomOffset {
                x,
                width,
                height,
                offset,
            } => Rectangle::try_anchored_to_bottom_of(
                bounds,
                coordinate(x, "x")?,
                coordinate(width, "width")?,
                coordinate(height, "height")?,
                coordinate(offset, "offset")?,
            ),
        }
    }
}

fn coordinate<T: Scalar>(value: f64, name: &'static str) -> GeometryResult<T> {
    T::try_from_f64(value).ok_or(GeometryError::CoordinateOutOfRange(name))
}

/// A region placed inside concrete bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRegion<T = i32> {
    pub name: String,
    pub bounds: Rectangle<T>,
    /// Present when the region spec has a `range`.
    pub converter: Option<LinearValueConverter>,
}

/// The result of [`LayoutSpec::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayout<T = i32> {
    regions: Vec<ResolvedRegion<T>>,
}

impl<T: Scalar> ResolvedLayout<T> {
    /// Look up a region by name.
    pub fn get(&self, name: &str) -> Option<&ResolvedRegion<T>> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Bounds of a region by name.
    pub fn bounds(&self, name: &str) -> Option<Rectangle<T>> {
        self.get(name).map(|r| r.bounds)
    }

    /// Regions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedRegion<T>> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Names of regions whose rectangle has no area.
    pub fn invalid_regions(&self) -> Vec<&str> {
        self.regions
            .iter()
            .filter(|r| !r.bounds.is_valid())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// The first region containing the point, in declaration order.
    pub fn hit_test(&self, px: T, py: T) -> Option<&ResolvedRegion<T>> {
        self.regions.iter().find(|r| r.bounds.contains(px, py))
    }
}

static_assertions::assert_impl_all!(LayoutSpec: Send, Sync);
static_assertions::assert_impl_all!(ResolvedLayout<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use trellis_values::ValueConverter;

    use super::*;

    const SAMPLE: &str = r#"
divisions = 4

[[region]]
name = "waveform"
kind = "grid"
x0 = 0
y0 = 0
x1 = 4
y1 = 3

[[region]]
name = "ok"
kind = "anchored"
anchor = "bottom-right"
width = 80
height = 25

[[region]]
name = "gain"
kind = "bottom-offset"
x = 5
width = 200
height = 20
offset = 30
range = { min = -60.0, max = 12.0 }
"#;

    #[test]
    fn test_parse_sample() {
        let spec = LayoutSpec::from_toml_str(SAMPLE).unwrap();
        assert_eq!(spec.divisions, 4);
        assert_eq!(spec.regions.len(), 3);
        assert_eq!(
            spec.regions[1].placement,
            Placement::Anchored {
                anchor: Anchor::BottomRight,
                width: 80.0,
                height: 25.0,
            }
        );
        assert_eq!(spec.regions[2].range, Some(ValueRange { min: -60.0, max: 12.0 }));
    }

    #[test]
    fn test_resolve_sample() {
        let spec = LayoutSpec::from_toml_str(SAMPLE).unwrap();
        let layout = spec.resolve(&Rectangle::new(0, 0, 400, 300)).unwrap();

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.bounds("waveform"), Some(Rectangle::new(0, 0, 400, 225)));
        assert_eq!(layout.bounds("ok"), Some(Rectangle::new(320, 275, 80, 25)));
        assert_eq!(layout.bounds("gain"), Some(Rectangle::new(5, 250, 200, 20)));
        assert!(layout.invalid_regions().is_empty());

        let gain = layout.get("gain").unwrap();
        let converter = gain.converter.unwrap();
        assert_eq!(converter.from_normalized_to_value(1.0), 12.0);
        assert!(layout.get("ok").unwrap().converter.is_none());
    }

    #[test]
    fn test_defaults() {
        let spec = LayoutSpec::from_toml_str("").unwrap();
        assert_eq!(spec, LayoutSpec::default());
        assert!(spec.resolve(&Rectangle::new(0, 0, 10, 10)).unwrap().is_empty());
    }

    #[test]
    fn test_region_divisions_override() {
        let spec = LayoutSpec::new(4).with_region(
            "half",
            Placement::Grid {
                divisions: Some(2),
                x0: 1,
                y0: 0,
                x1: 2,
                y1: 2,
            },
        );
        let layout = spec.resolve(&Rectangle::new(0, 0, 100, 100)).unwrap();
        assert_eq!(layout.bounds("half"), Some(Rectangle::new(50, 0, 50, 100)));
    }

    #[test]
    fn test_duplicate_region() {
        let placement = Placement::Anchored {
            anchor: Anchor::BottomLeft,
            width: 1.0,
            height: 1.0,
        };
        let spec = LayoutSpec::new(1)
            .with_region("a", placement.clone())
            .with_region("a", placement);
        let err = spec.resolve(&Rectangle::new(0, 0, 10, 10)).unwrap_err();
        assert!(matches!(err, TrellisError::DuplicateRegion(name) if name == "a"));
    }

    #[test]
    fn test_unsupported_anchor_is_error() {
        let spec = LayoutSpec::new(1).with_region(
            "title",
            Placement::Anchored {
                anchor: Anchor::TopMiddle,
                width: 10.0,
                height: 10.0,
            },
        );
        let err = spec.resolve(&Rectangle::new(0, 0, 10, 10)).unwrap_err();
        match err {
            TrellisError::Region { name, source } => {
                assert_eq!(name, "title");
                assert_eq!(source, GeometryError::UnsupportedAnchor(Anchor::TopMiddle));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_divisions_is_error() {
        let spec = LayoutSpec::new(0).with_region(
            "cell",
            Placement::Grid {
                divisions: None,
                x0: 0,
                y0: 0,
                x1: 1,
                y1: 1,
            },
        );
        let err = spec.resolve(&Rectangle::new(0, 0, 10, 10)).unwrap_err();
        assert!(matches!(
            err,
            TrellisError::Region {
                source: GeometryError::ZeroGridDivisions,
                ..
            }
        ));
    }

    #[test]
    fn test_numbers_too_large_for_coordinates() {
        let spec = LayoutSpec::from_toml_str(
            r#"
[[region]]
name = "meter"
kind = "bottom-offset"
x = 0
width = 10
height = 3e9
offset = 3e9
"#,
        )
        .unwrap();
        let bounds = Rectangle::new(0, 0, 400, 300);
        let err = spec.resolve(&bounds).unwrap_err();
        assert!(matches!(
            err,
            TrellisError::Region {
                ref name,
                source: GeometryError::CoordinateOutOfRange("height"),
            } if name == "meter"
        ));

        // The same file fits when resolved in floating point.
        let layout = spec.resolve(&Rectangle::new(0.0, 0.0, 400.0, 300.0)).unwrap();
        assert_eq!(layout.bounds("meter").unwrap().y(), 300.0 - 6e9);
    }

    #[test]
    fn test_placement_arithmetic_overflow() {
        let bounds = Rectangle::new(0, 0, 400, 300);
        let offset = LayoutSpec::new(1).with_region(
            "meter",
            Placement::BottomOffset {
                x: 0.0,
                width: 10.0,
                height: 2e9,
                offset: 2e9,
            },
        );
        assert!(matches!(
            offset.resolve(&bounds).unwrap_err(),
            TrellisError::Region {
                source: GeometryError::CoordinateOutOfRange("y"),
                ..
            }
        ));

        let anchored = LayoutSpec::new(1).with_region(
            "ok",
            Placement::Anchored {
                anchor: Anchor::BottomRight,
                width: -2_147_483_648.0,
                height: 10.0,
            },
        );
        assert!(matches!(
            anchored.resolve(&bounds).unwrap_err(),
            TrellisError::Region {
                source: GeometryError::CoordinateOutOfRange("x"),
                ..
            }
        ));

        let grid = LayoutSpec::new(1).with_region(
            "strip",
            Placement::Grid {
                divisions: None,
                x0: 0,
                y0: 0,
                x1: 1,
                y1: 1,
            },
        );
        assert!(matches!(
            grid.resolve(&Rectangle::new(i32::MAX - 5, 0, 10, 10)).unwrap_err(),
            TrellisError::Region {
                source: GeometryError::CoordinateOutOfRange("right"),
                ..
            }
        ));
    }

    #[test]
    fn test_grid_regions_follow_offset_bounds() {
        let spec = LayoutSpec::new(4).with_region(
            "cell",
            Placement::Grid {
                divisions: None,
                x0: 1,
                y0: 2,
                x1: 3,
                y1: 4,
            },
        );
        let layout = spec.resolve(&Rectangle::new(100, 50, 80, 40)).unwrap();
        assert_eq!(layout.bounds("cell"), Some(Rectangle::new(120, 70, 40, 20)));
    }

    #[test]
    fn test_invalid_regions_are_reported() {
        let spec = LayoutSpec::new(4)
            .with_region(
                "inverted",
                Placement::Grid {
                    divisions: None,
                    x0: 3,
                    y0: 0,
                    x1: 1,
                    y1: 1,
                },
            )
            .with_region(
                "fine",
                Placement::Grid {
                    divisions: None,
                    x0: 0,
                    y0: 0,
                    x1: 1,
                    y1: 1,
                },
            );
        let layout = spec.resolve(&Rectangle::new(0, 0, 100, 100)).unwrap();
        assert_eq!(layout.invalid_regions(), vec!["inverted"]);
    }

    #[test]
    fn test_hit_test() {
        let spec = LayoutSpec::from_toml_str(SAMPLE).unwrap();
        let layout = spec.resolve(&Rectangle::new(0, 0, 400, 300)).unwrap();
        assert_eq!(layout.hit_test(350, 290).map(|r| r.name.as_str()), Some("ok"));
        assert_eq!(layout.hit_test(10, 10).map(|r| r.name.as_str()), Some("waveform"));
        assert!(layout.hit_test(300, 240).is_none());
    }

    #[test]
    fn test_float_bounds() {
        let spec = LayoutSpec::from_toml_str(SAMPLE).unwrap();
        let layout = spec.resolve(&Rectangle::new(0.0f32, 0.0, 401.0, 301.0)).unwrap();
        assert_eq!(layout.bounds("waveform"), Some(Rectangle::new(0.0, 0.0, 401.0, 225.75)));
    }

    #[test]
    fn test_toml_round_trip() {
        let spec = LayoutSpec::from_toml_str(SAMPLE).unwrap();
        let text = spec.to_toml_string().unwrap();
        assert_eq!(LayoutSpec::from_toml_str(&text).unwrap(), spec);
    }
}
