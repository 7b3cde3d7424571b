use std::num::ParseIntError;
use thiserror::Error;

/// Errors produced by the string conversions that validate their input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringError {
    /// `bin2hex` input is not a (signed, 64-bit) base-2 integer.
    #[error("`{input}` is not a base-2 integer: {source}")]
    InvalidBinary {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
