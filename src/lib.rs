//! Convert non-negative integers of any size up to the
//! novenquadragintillions into English numerals.
//!
//! ```
//! use num_bigint::BigUint;
//! use wordnum::convert;
//!
//! assert_eq!(convert(&BigUint::from(1100u32)).unwrap(), "one thousand, one hundred");
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod numeral;
pub mod value;

pub use client::NumeralClient;
pub use errors::{ClientError, ExtractError, NumeralError};
pub use extract::extract_number;
pub use numeral::{convert, convert_integer, parse_integer};
pub use value::WordNumeral;
