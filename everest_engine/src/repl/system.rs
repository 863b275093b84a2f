//! `repl::system` module
//!
//! Handlers for help and for input the game could not act on.

use log::info;

use crate::loader::help::HelpCommand;
use crate::view::View;

/// Lists the available commands.
pub fn help_handler(commands: &[HelpCommand], view: &mut View) {
    view.subtitle("Available commands:");
    for cmd in commands {
        view.info(format!("- {}: {}", cmd.command, cmd.description));
    }
}

/// Blank input.
pub fn no_command_handler(view: &mut View) {
    view.error("Please enter a command.");
}

/// A verb that needs an argument arrived without one.
pub fn missing_argument_handler(verb: &str, view: &mut View) {
    let prompt = match verb {
        "take" | "get" => "Please specify the item you want to take.".to_string(),
        "use" => "Please specify the item you want to use.".to_string(),
        "examine" | "x" => "Please specify the item you want to examine.".to_string(),
        "go" | "move" | "climb" => "Please specify a direction: north, south, east or west.".to_string(),
        other => format!("Please tell me what you want to {other}."),
    };
    view.error(prompt);
}

/// The verb was not recognized.
pub fn unknown_handler(verb: &str, view: &mut View) {
    info!("unrecognized command '{verb}'");
    view.error("That command doesn't exist. Type 'help' for a list of commands.");
}
