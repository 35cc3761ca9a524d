//! Value mapping for Trellis controls.
//!
//! Sliders and knobs report a normalized position in `0.0..=1.0`. The helpers
//! here turn that into a parameter value and back, clamp user input, and
//! format values for display.
//!
//! ```
//! use trellis_values::{LinearValueConverter, ValueConverter};
//!
//! let gain = LinearValueConverter::new(-60.0, 12.0);
//! assert_eq!(gain.from_normalized_to_value(0.5), -24.0);
//! assert_eq!(gain.from_string_to_value("30")?, 12.0);
//! # Ok::<(), trellis_values::ValueError>(())
//! ```

mod converter;
mod error;
mod hash;
pub mod logging;
mod range;

pub use converter::{LinearValueConverter, ValueConverter};
pub use error::{ValueError, ValueResult};
pub use hash::hash_combine;
pub use range::{bound_value, map_value};
