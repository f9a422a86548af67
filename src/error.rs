//! Errors returned by fallible rational conversions.

use thiserror::Error;

/// Result type alias for fallible rational conversions.
pub type RatioResult<T> = Result<T, RatioError>;

/// Why a rational could not be narrowed to a plain integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    #[error("cannot convert a NaN rational to an integer")]
    NotANumber,

    #[error("{numer}/{denom} is not an integer")]
    NotAnInteger { numer: String, denom: String },

    #[error("{value} does not fit in a {bits}-bit integer")]
    OutOfRange { value: String, bits: u32 },
}
