//! Tracing targets for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see layout diagnostics, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis::layout=debug,trellis_geometry=debug")
//!     .init();
//! ```
//!
//! The geometry and value crates define their own targets in
//! [`trellis_geometry::logging::targets`] and [`trellis_values::logging::targets`].

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const TRELLIS: &str = "trellis";
    /// Layout loading and resolution.
    pub const LAYOUT: &str = "trellis::layout";
}
