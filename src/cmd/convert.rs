//! Number, file and text conversion — `wordnum -n/-f/-t`.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use wordnum::NumeralClient;
use wordnum::config::WordnumConfig;
use wordnum::numeral::{convert, parse_integer};

pub fn cmd_number(value: &str) -> Result<()> {
    let num = parse_integer(value)?;
    let numeral = convert(&num).with_context(|| format!("Failed to convert {}", num))?;
    println!("{}", numeral);
    Ok(())
}

pub fn cmd_file(config: &WordnumConfig, path: &Path) -> Result<()> {
    let mut client = NumeralClient::new().with_invalid_message(config.invalid_message());
    let numeral = client.convert_file(path)?;
    debug!("client state\n{}", client);
    println!("{}", numeral);
    Ok(())
}

pub fn cmd_text(config: &WordnumConfig, text: &str) -> Result<()> {
    let client = NumeralClient::new().with_invalid_message(config.invalid_message());
    println!("{}", client.text_to_numeral(text)?);
    Ok(())
}
