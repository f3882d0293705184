//! Integer to English numeral conversion.
//!
//! A number is split into base-1000 groups. Each group is named by
//! [`name_small_group`] and followed by its scale word ("thousand",
//! "million", ...). Groups are joined most-significant first:
//!
//! - a trailing group below 100 at the lowest level is introduced by "and"
//!   ("one thousand and five")
//! - any other non-zero group is separated by a comma on the previous token
//!   ("one thousand, five hundred")
//! - zero groups contribute nothing
//!
//! The vocabulary ends at level 50 ("novenquadragintillion"), so anything at or
//! above `1000^51` is rejected with [`NumeralError::TooLarge`].

pub mod tables;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use tracing::debug;

use crate::errors::NumeralError;
use tables::{MAX_LEVEL, SCALE, TENS, UNITS, largest_unit};

const GROUP_BASE: u32 = 1000;

/// One base-1000 group of a number and the level it sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Group {
    value: u16,
    level: usize,
}

/// Name a group in `0..=999` without any scale word.
///
/// Returns an empty list for zero. The hundreds part is a single token
/// ("three hundred").
pub fn name_small_group(group: u16) -> Vec<String> {
    debug_assert!(group < 1000, "group {} out of range", group);

    let hundreds = usize::from(group / 100);
    let rest = usize::from(group % 100);
    let mut tokens = Vec::new();

    if hundreds > 0 {
        tokens.push(format!("{} hundred", UNITS[hundreds]));
        if rest > 0 {
            tokens.push("and".to_string());
        }
    }

    if rest < 20 {
        tokens.push(UNITS[rest].to_string());
    } else {
        tokens.push(TENS[rest / 10].to_string());
        tokens.push(UNITS[rest % 10].to_string());
    }

    tokens.retain(|t| !t.is_empty());
    tokens
}

/// Split `n` into groups, least-significant first, starting at `level`.
///
/// Zero groups are kept so levels stay aligned.
fn split_groups(n: &BigUint, level: usize) -> Result<Vec<Group>, NumeralError> {
    let mut groups = Vec::new();
    let mut rest = n.clone();
    let mut level = level;

    while !rest.is_zero() {
        if level > MAX_LEVEL {
            return Err(NumeralError::TooLarge {
                largest_unit: largest_unit(),
            });
        }
        let value = (&rest % GROUP_BASE).iter_u32_digits().next().unwrap_or(0);
        groups.push(Group {
            value: value as u16,
            level,
        });
        rest /= GROUP_BASE;
        level += 1;
    }

    Ok(groups)
}

/// Tokens for `n × 1000^level` as it reads inside a larger number.
///
/// `compose(&0, 0)` is `["zero"]`; zero at any higher level yields no tokens.
pub fn compose(n: &BigUint, level: usize) -> Result<Vec<String>, NumeralError> {
    if level > MAX_LEVEL {
        return Err(NumeralError::TooLarge {
            largest_unit: largest_unit(),
        });
    }
    if n.is_zero() {
        return Ok(if level == 0 {
            vec!["zero".to_string()]
        } else {
            Vec::new()
        });
    }

    let groups = split_groups(n, level)?;
    let mut tokens: Vec<String> = Vec::new();

    for group in groups.iter().rev().filter(|g| g.value > 0) {
        debug!(value = group.value, level = group.level, "naming group");

        if !tokens.is_empty() {
            if group.level == 0 && group.value < 100 {
                tokens.push("and".to_string());
            } else if let Some(last) = tokens.last_mut() {
                last.push(',');
            }
        }

        tokens.extend(name_small_group(group.value));
        let unit = SCALE[group.level];
        if !unit.is_empty() {
            tokens.push(unit.to_string());
        }
    }

    Ok(tokens)
}

/// Convert a non-negative integer to its English numeral.
///
/// ```
/// use num_bigint::BigUint;
/// assert_eq!(
///     wordnum::numeral::convert(&BigUint::from(1025u32)).unwrap(),
///     "one thousand and twenty five"
/// );
/// ```
pub fn convert(n: &BigUint) -> Result<String, NumeralError> {
    Ok(compose(n, 0)?.join(" "))
}

/// Convert any signed integer, rejecting negatives.
pub fn convert_integer(n: impl Into<BigInt>) -> Result<String, NumeralError> {
    convert(&to_unsigned(n.into())?)
}

/// Parse an integer literal, rejecting fractions, words and negatives.
///
/// Surrounding whitespace and a leading `+` are accepted.
pub fn parse_integer(input: &str) -> Result<BigUint, NumeralError> {
    let trimmed = input.trim();
    let value: BigInt = trimmed.parse().map_err(|_| NumeralError::NotAnInteger {
        input: trimmed.to_string(),
    })?;
    to_unsigned(value)
}

fn to_unsigned(value: BigInt) -> Result<BigUint, NumeralError> {
    value.to_biguint().ok_or_else(|| NumeralError::Negative {
        value: value.to_string(),
    })
}
