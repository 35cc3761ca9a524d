//! Converters between control positions, values and text.
//!
//! A slider works in normalized positions (`0.0..=1.0`) while the parameter
//! it controls has its own range and display format. A [`ValueConverter`]
//! sits between the two.

use tracing::trace;

use crate::error::{ValueError, ValueResult};
use crate::logging::targets;
use crate::range::{bound_value, map_value};

/// Maps between normalized control positions, values, and text.
pub trait ValueConverter {
    /// Value for a normalized position.
    fn from_normalized_to_value(&self, normalized: f64) -> f64;

    /// Normalized position for a value.
    fn to_normalized_from_value(&self, value: f64) -> f64;

    /// Display text for a value.
    fn to_string_from_value(&self, value: f64) -> String;

    /// Value for user-entered text.
    fn from_string_to_value(&self, text: &str) -> ValueResult<f64>;
}

/// Linear mapping between `[0, 1]` and `[minimum, maximum]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearValueConverter {
    minimum: f64,
    maximum: f64,
}

impl LinearValueConverter {
    /// Create a converter for the range `[minimum, maximum]`.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }
}

impl Default for LinearValueConverter {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl ValueConverter for LinearValueConverter {
    fn from_normalized_to_value(&self, normalized: f64) -> f64 {
        map_value(normalized, 0.0, 1.0, self.minimum, self.maximum)
    }

    fn to_normalized_from_value(&self, value: f64) -> f64 {
        map_value(value, self.minimum, self.maximum, 0.0, 1.0)
    }

    fn to_string_from_value(&self, value: f64) -> String {
        format!("{value:.6}")
    }

    /// Parses `text` and clamps the result into the converter's range.
    fn from_string_to_value(&self, text: &str) -> ValueResult<f64> {
        let trimmed = text.trim();
        let parsed: f64 = trimmed.parse().map_err(|source| ValueError::Parse {
            input: text.to_string(),
            source,
        })?;
        if !parsed.is_finite() {
            return Err(ValueError::NonFinite(text.to_string()));
        }

        let (low, high) = if self.minimum <= self.maximum {
            (self.minimum, self.maximum)
        } else {
            (self.maximum, self.minimum)
        };
        let value = bound_value(low, parsed, high);
        trace!(target: targets::CONVERTER, text = trimmed, value, "parsed value");
        Ok(value)
    }
}

static_assertions::assert_impl_all!(LinearValueConverter: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_normalized_mapping() {
        let conv = LinearValueConverter::new(-60.0, 12.0);
        assert_eq!(conv.from_normalized_to_value(0.0), -60.0);
        assert_eq!(conv.from_normalized_to_value(1.0), 12.0);
        assert_eq!(conv.from_normalized_to_value(0.5), -24.0);
        assert_eq!(conv.to_normalized_from_value(-24.0), 0.5);
    }

    #[test]
    fn test_to_string_six_decimals() {
        let conv = LinearValueConverter::default();
        assert_eq!(conv.to_string_from_value(0.5), "0.500000");
        assert_eq!(conv.to_string_from_value(-3.0), "-3.000000");
    }

    #[test]
    fn test_from_string_clamps() {
        let conv = LinearValueConverter::new(0.0, 100.0);
        assert_eq!(conv.from_string_to_value(" 42.5 ").unwrap(), 42.5);
        assert_eq!(conv.from_string_to_value("250").unwrap(), 100.0);
        assert_eq!(conv.from_string_to_value("-1").unwrap(), 0.0);
    }

    #[test]
    fn test_from_string_reversed_range_clamps() {
        let conv = LinearValueConverter::new(10.0, -10.0);
        assert_eq!(conv.from_string_to_value("20").unwrap(), 10.0);
        assert_eq!(conv.from_string_to_value("-20").unwrap(), -10.0);
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        let conv = LinearValueConverter::default();
        assert!(matches!(
            conv.from_string_to_value("loud"),
            Err(ValueError::Parse { .. })
        ));
        assert_eq!(
            conv.from_string_to_value("inf"),
            Err(ValueError::NonFinite("inf".into()))
        );
    }

    #[test]
    fn test_shared_trait_object() {
        let conv: Arc<dyn ValueConverter + Send + Sync> =
            Arc::new(LinearValueConverter::new(20.0, 20_000.0));
        let value = conv.from_normalized_to_value(0.0);
        assert_eq!(conv.to_string_from_value(value), "20.000000");
    }
}
