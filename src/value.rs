//! A number paired with its English numeral.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::errors::NumeralError;
use crate::numeral::{convert, parse_integer};

/// A non-negative integer together with its converted numeral.
///
/// Equality and ordering follow the number. Arithmetic returns a new value
/// and fails the same way conversion does, so a result past the vocabulary
/// is an error rather than a value without words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordNumeral {
    num: BigUint,
    numeral: String,
}

impl WordNumeral {
    pub fn new(num: BigUint) -> Result<Self, NumeralError> {
        let numeral = convert(&num)?;
        Ok(Self { num, numeral })
    }

    /// Replace the cached pair with a fresh conversion of `num`.
    ///
    /// On error the previous pair is left untouched.
    pub fn update(&mut self, num: BigUint) -> Result<&str, NumeralError> {
        *self = Self::new(num)?;
        Ok(&self.numeral)
    }

    pub fn num(&self) -> &BigUint {
        &self.num
    }

    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    pub fn into_parts(self) -> (BigUint, String) {
        (self.num, self.numeral)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, NumeralError> {
        Self::new(&self.num + &other.num)
    }

    /// Subtract, failing with [`NumeralError::Negative`] below zero.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, NumeralError> {
        if other.num > self.num {
            let diff = &other.num - &self.num;
            return Err(NumeralError::Negative {
                value: format!("-{}", diff),
            });
        }
        Self::new(&self.num - &other.num)
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, NumeralError> {
        Self::new(&self.num * &other.num)
    }
}

impl Default for WordNumeral {
    fn default() -> Self {
        Self {
            num: BigUint::default(),
            numeral: "zero".to_string(),
        }
    }
}

impl PartialOrd for WordNumeral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordNumeral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num.cmp(&other.num)
    }
}

impl fmt::Display for WordNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numeral)
    }
}

impl FromStr for WordNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_integer(s)?)
    }
}

impl TryFrom<u64> for WordNumeral {
    type Error = NumeralError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(BigUint::from(value))
    }
}
