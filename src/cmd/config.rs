//! Configuration view and validation commands — `wordnum config`.

use anyhow::Result;

use super::super::ConfigCommands;
use wordnum::config::{WordnumConfig, WordnumToml};

pub fn cmd_config(config: &WordnumConfig, command: Option<ConfigCommands>) -> Result<()> {
    let config_path = &config.config_path;

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Wordnum Configuration");
            println!("=====================");
            println!();

            if config_path.exists() {
                println!("Config file: {}", config_path.display());
            } else {
                println!("No wordnum.toml found at {}", config_path.display());
                println!("Using default configuration.");
            }
            println!();

            let toml = &config.toml;
            println!("[output]");
            println!("  invalid_message = \"{}\"", toml.output.invalid_message);
            println!();
            println!("[logging]");
            println!("  level = \"{}\"", toml.logging.level);
            println!("  format = \"{}\"", toml.logging.format);
            println!();

            println!("Effective values (with env/CLI overrides):");
            println!("  log level = \"{}\"", config.log_level());
            println!("  log format = \"{}\"", config.log_format());
            println!();
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            if !config_path.exists() {
                println!("No wordnum.toml found. Using defaults (valid).");
                return Ok(());
            }

            let warnings = config.validate();
            if warnings.is_empty() {
                println!("Configuration is valid.");
            } else {
                println!("Configuration warnings:");
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            if config_path.exists() {
                println!("wordnum.toml already exists at {}", config_path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            WordnumToml::default().save(config_path)?;

            println!("Created wordnum.toml at {}", config_path.display());
            println!();
            println!("You can now customize:");
            println!("  - [output] invalid_message");
            println!("  - [logging] level, format");
            println!();
        }
    }

    Ok(())
}
