//! Pull a single integer out of free-form text.
//!
//! The text must hold exactly one whitespace-delimited word containing a
//! digit, and that word must be made only of ASCII digits. Thousands
//! separators, decimals, signs and units glued to the digits all make the
//! text invalid.

use num_bigint::BigUint;
use tracing::debug;

use crate::errors::ExtractError;

fn has_digit(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

/// Extract the one integer embedded in `text`.
pub fn extract_number(text: &str) -> Result<BigUint, ExtractError> {
    let with_digits: Vec<&str> = text.split_whitespace().filter(|w| has_digit(w)).collect();
    let numeric = with_digits.iter().filter(|w| is_numeric(w)).count();

    debug!(
        with_digits = with_digits.len(),
        numeric, "scanned text for numbers"
    );

    match with_digits.as_slice() {
        [word] if numeric == 1 => word.parse().map_err(|_| ExtractError::InvalidNumber {
            with_digits: 1,
            numeric,
        }),
        _ => Err(ExtractError::InvalidNumber {
            with_digits: with_digits.len(),
            numeric,
        }),
    }
}
