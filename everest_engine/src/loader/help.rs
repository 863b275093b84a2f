//! module `loader::help`

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Stock help table.
pub const HELP_TOML: &str = include_str!("../../data/help.toml");

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Parses help commands from TOML text
/// # Errors
/// - on TOML parsing error
pub fn parse_help_commands(toml_text: &str) -> Result<Vec<HelpCommand>> {
    let wrapper: HelpCommandFile = toml::from_str(toml_text).context("parsing help commands")?;
    info!("{} help commands loaded", wrapper.commands.len());
    Ok(wrapper.commands)
}

/// Loads the stock help commands
/// # Errors
/// - if the embedded help table fails to parse
pub fn load_help_commands() -> Result<Vec<HelpCommand>> {
    parse_help_commands(HELP_TOML)
}
