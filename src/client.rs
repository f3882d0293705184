//! File-reading front end for the converter.
//!
//! A [`NumeralClient`] reads a text file, hands its contents to an extraction
//! handler and converts the one integer it finds. Text without exactly one
//! valid integer is a soft result (the configured invalid message), while
//! missing files and numbers past the vocabulary are hard errors.

use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use tracing::{info, warn};

use crate::errors::{ClientError, ExtractError};
use crate::extract::extract_number;
use crate::numeral::convert;
use crate::value::WordNumeral;

/// Message returned when the input holds no single valid integer.
pub const DEFAULT_INVALID_MESSAGE: &str = "number invalid";

/// Turns text into the integer to convert.
pub type Handler = fn(&str) -> Result<BigUint, ExtractError>;

/// Reads files, extracts a number and keeps the last successful conversion.
#[derive(Debug, Clone)]
pub struct NumeralClient {
    handler: Handler,
    invalid_message: String,
    file_path: Option<PathBuf>,
    file_contents: Option<String>,
    word_numeral: Option<WordNumeral>,
}

impl Default for NumeralClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NumeralClient {
    pub fn new() -> Self {
        Self::with_handler(extract_number)
    }

    pub fn with_handler(handler: Handler) -> Self {
        Self {
            handler,
            invalid_message: DEFAULT_INVALID_MESSAGE.to_string(),
            file_path: None,
            file_contents: None,
            word_numeral: None,
        }
    }

    pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = message.into();
        self
    }

    /// Read `path`, extract its number and return the numeral.
    ///
    /// The path is recorded even when the contents are invalid; the contents
    /// and the numeral are only cached on success.
    pub fn convert_file(&mut self, path: &Path) -> Result<String, ClientError> {
        if !path.exists() {
            return Err(ClientError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ClientError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        self.file_path = Some(path.to_path_buf());
        let contents = std::fs::read_to_string(path).map_err(|source| ClientError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = contents.len(), "read input file");

        let num = match (self.handler)(&contents) {
            Ok(num) => num,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "no valid number in file");
                return Ok(self.invalid_message.clone());
            }
        };

        let word_numeral = WordNumeral::new(num)?;
        let numeral = word_numeral.numeral().to_string();
        self.file_contents = Some(contents);
        self.word_numeral = Some(word_numeral);
        Ok(numeral)
    }

    /// Extract and convert the number in `text` without touching the cache.
    pub fn text_to_numeral(&self, text: &str) -> Result<String, ClientError> {
        match (self.handler)(text) {
            Ok(num) => Ok(convert(&num)?),
            Err(err) => {
                warn!(error = %err, "no valid number in text");
                Ok(self.invalid_message.clone())
            }
        }
    }

    pub fn invalid_message(&self) -> &str {
        &self.invalid_message
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn file_contents(&self) -> Option<&str> {
        self.file_contents.as_deref()
    }

    pub fn num(&self) -> Option<&BigUint> {
        self.word_numeral.as_ref().map(WordNumeral::num)
    }

    pub fn word_numeral(&self) -> Option<&str> {
        self.word_numeral.as_ref().map(WordNumeral::numeral)
    }
}

impl std::fmt::Display for NumeralClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = "file_contents".len() + 2;
        let path = self
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let contents = self
            .file_contents
            .as_deref()
            .map(|c| c.replace('\n', " "))
            .unwrap_or_default();
        let num = self.num().map(BigUint::to_string).unwrap_or_default();
        let numeral = self.word_numeral().unwrap_or_default();

        writeln!(f, "{:>width$} :\t{}", "file path", path)?;
        writeln!(f, "{:>width$} :\t{}", "file_contents", contents)?;
        writeln!(f, "{:>width$} :\t{}", "num", num)?;
        write!(f, "{:>width$} :\t{}", "word_numeral", numeral)
    }
}
