//! Tracing targets for the geometry crate.
//!
//! The geometry types never install a subscriber. Events are emitted only on
//! the soft-failure paths (sentinel results and rejected grid requests), so
//! enabling these targets at `debug` level shows where a layout went wrong.
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis_geometry::anchor=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const GEOMETRY: &str = "trellis_geometry";
    /// Anchored placement.
    pub const ANCHOR: &str = "trellis_geometry::anchor";
    /// Grid subdivision.
    pub const GRID: &str = "trellis_geometry::grid";
}
