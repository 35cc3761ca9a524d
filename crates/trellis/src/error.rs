//! Error types for Trellis.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use trellis_geometry::GeometryError;

/// Errors that can occur while loading or resolving a layout.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Reading or writing a layout file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The layout file is not valid TOML or does not match the schema.
    #[error("invalid layout file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The layout could not be written as TOML.
    #[error("failed to serialize layout: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Two regions share a name.
    #[error("duplicate region name: {0:?}")]
    DuplicateRegion(String),

    /// A region cannot be placed: zero grid divisions, an unsupported anchor,
    /// or a coordinate that does not fit the coordinate type.
    #[error("cannot place region {name:?}: {source}")]
    Region {
        name: String,
        #[source]
        source: GeometryError,
    },
}

/// A specialized Result type for Trellis operations.
pub type TrellisResult<T> = Result<T, TrellisError>;
