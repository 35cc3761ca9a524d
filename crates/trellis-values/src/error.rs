//! Error types for value conversion.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors that can occur when converting text to a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The text is not a number.
    #[error("cannot parse {input:?} as a number: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// The text parsed to infinity or NaN.
    #[error("{0:?} is not a finite number")]
    NonFinite(String),
}

/// Result type for value conversion.
pub type ValueResult<T> = Result<T, ValueError>;
