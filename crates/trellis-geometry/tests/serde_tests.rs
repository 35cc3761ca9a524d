//! Serialization format of geometry types.
//!
//! Run with `cargo test -p trellis-geometry --features serde`.

#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use trellis_geometry::{Anchor, Rectangle};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Placement {
    anchor: Anchor,
    bounds: Rectangle,
}

#[test]
fn test_rectangle_fields() {
    let text = toml::to_string(&Rectangle::new(1, 2, 30, 40)).unwrap();
    let parsed: toml::Table = text.parse().unwrap();
    assert_eq!(parsed["x"].as_integer(), Some(1));
    assert_eq!(parsed["y"].as_integer(), Some(2));
    assert_eq!(parsed["width"].as_integer(), Some(30));
    assert_eq!(parsed["height"].as_integer(), Some(40));
}

#[test]
fn test_anchor_kebab_case() {
    let placement: Placement = toml::from_str(
        r#"
        anchor = "bottom-middle"
        bounds = { x = 0, y = 10, width = 100, height = 20 }
        "#,
    )
    .unwrap();

    assert_eq!(
        placement,
        Placement {
            anchor: Anchor::BottomMiddle,
            bounds: Rectangle::new(0, 10, 100, 20),
        }
    );
}

#[test]
fn test_unknown_anchor_rejected() {
    let result: Result<Placement, _> = toml::from_str(
        r#"
        anchor = "bottom"
        bounds = { x = 0, y = 0, width = 1, height = 1 }
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_float_rectangle() {
    let r: Rectangle<f64> = toml::from_str("x = 0.5\ny = 1.0\nwidth = 2.25\nheight = 3.0\n").unwrap();
    assert_eq!(r, Rectangle::new(0.5, 1.0, 2.25, 3.0));
    assert!(r.is_valid());
}
