//! Tracing targets for the values crate.

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const VALUES: &str = "trellis_values";
    /// Text and range conversion.
    pub const CONVERTER: &str = "trellis_values::converter";
}
