use anyhow::{Context, Result};
use clap::{ArgGroup, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use wordnum::config::WordnumConfig;
use wordnum::logging;

mod cmd;

#[derive(Parser)]
#[command(name = "wordnum")]
#[command(version, about = "Convert integers to English numerals")]
#[command(group(ArgGroup::new("input").args(["number", "file", "text"])))]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file. Defaults to ./wordnum.toml when present.
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Number to be converted to a numeral
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub number: Option<String>,

    /// Path of a text file containing one number
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Text containing one number
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub text: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View, validate or create the configuration file
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Write a default wordnum.toml
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = WordnumConfig::with_cli_args(&cwd, cli.config_file.clone(), cli.verbose)?;
    logging::init(&config.log_level(), config.log_format())?;

    match &cli.command {
        Some(Commands::Config { command }) => cmd::cmd_config(&config, command.clone())?,
        None => {
            if let Some(number) = &cli.number {
                cmd::cmd_number(number)?;
            } else if let Some(path) = &cli.file {
                cmd::cmd_file(&config, path)?;
            } else if let Some(text) = &cli.text {
                cmd::cmd_text(&config, text)?;
            } else {
                Cli::command().print_help()?;
                println!();
            }
        }
    }

    Ok(())
}
