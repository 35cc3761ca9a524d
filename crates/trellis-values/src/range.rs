//! Clamping and linear range mapping.

/// Clamp `n` into `[lower, upper]`.
///
/// Unlike [`Ord::clamp`] this does not panic when `lower > upper`; the lower
/// bound wins. It also works for floats.
#[inline]
pub fn bound_value<T: PartialOrd + Copy>(lower: T, n: T, upper: T) -> T {
    let capped = if upper < n { upper } else { n };
    if capped < lower { lower } else { capped }
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The mapping is linear and not clamped: values outside the input range map
/// outside the output range. Reversed ranges are fine. A degenerate input
/// range (`in_min == in_max`) maps everything to `out_min`.
#[inline]
pub fn map_value(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (out_max - out_min) * (value - in_min) / span
}
