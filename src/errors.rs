//! Typed error hierarchy for wordnum.
//!
//! Three enums cover the three layers:
//! - `NumeralError` — input validation and conversion failures
//! - `ExtractError` — no single integer could be found in a piece of text
//! - `ClientError` — file access around the converter

use std::path::PathBuf;

use thiserror::Error;

/// Errors from validating and converting a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("Expected an integer, got '{input}'")]
    NotAnInteger { input: String },

    #[error("Expected a non-negative integer, got {value}")]
    Negative { value: String },

    #[error("Number is too large, the largest supported unit is '{largest_unit}'")]
    TooLarge { largest_unit: &'static str },
}

/// Errors from extracting an integer out of free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error(
        "None or multiple numeric words found ({with_digits} with digits, {numeric} numeric)"
    )]
    InvalidNumber { with_digits: usize, numeric: usize },
}

/// Errors from the file client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Numeral(#[from] NumeralError),
}
