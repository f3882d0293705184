//! CLI command implementations.
//!
//! | Module    | Handles                          |
//! |-----------|----------------------------------|
//! | `convert` | `-n`, `-f`, `-t`                 |
//! | `config`  | `Config`                         |

pub mod config;
pub mod convert;

pub use config::cmd_config;
pub use convert::{cmd_file, cmd_number, cmd_text};
