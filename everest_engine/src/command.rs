//! Command module
//!
//! Turns a raw line of player input into a [`Command`]. Parsing happens in two
//! steps: [`tokenize`] lower-cases the line and splits off the verb, keeping
//! the rest of the line intact as a single argument (so "take oxygen tank"
//! yields the argument "oxygen tank"); [`parse_command`] then maps the verb
//! onto a command.
use everest_data::Direction;
use variantly::Variantly;

/// A verb and whatever followed it on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub verb: String,
    pub argument: Option<String>,
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Examine(String),
    Help,
    Inventory,
    Look,
    MoveTo(Direction),
    /// A verb that needs an argument was given none. Holds the verb.
    MissingArgument(String),
    /// Blank input.
    NoCommand,
    Take(String),
    /// Verb not recognized. Holds the verb as typed (lower-cased).
    Unknown(String),
    UseItem(String),
}

/// Split a line into a lower-cased verb and optional argument.
///
/// Returns `None` for blank input. The argument is everything after the first
/// run of whitespace, trimmed; it is not split further.
pub fn tokenize(input: &str) -> Option<ParsedInput> {
    let line = input.trim().to_lowercase();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_string(), rest.trim()),
        None => (line.clone(), ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_string());
    Some(ParsedInput { verb, argument })
}

/// Parses an input string and returns the corresponding `Command`.
pub fn parse_command(input: &str) -> Command {
    let Some(ParsedInput { verb, argument }) = tokenize(input) else {
        return Command::NoCommand;
    };
    match verb.as_str() {
        "north" | "south" | "east" | "west" | "n" | "s" | "e" | "w" => verb
            .parse::<Direction>()
            .map_or_else(|_| Command::Unknown(verb.clone()), Command::MoveTo),
        "go" | "move" | "climb" => match argument.as_deref().map(str::parse::<Direction>) {
            Some(Ok(dir)) => Command::MoveTo(dir),
            Some(Err(_)) => Command::Unknown(format!("{verb} {}", argument.clone().unwrap_or_default())),
            None => Command::MissingArgument(verb.clone()),
        },
        "look" | "l" => Command::Look,
        "inventory" | "inv" | "i" => Command::Inventory,
        "help" | "?" => Command::Help,
        "take" | "get" => with_argument(&verb, argument, Command::Take),
        "use" => with_argument(&verb, argument, Command::UseItem),
        "examine" | "x" => with_argument(&verb, argument, Command::Examine),
        _ => Command::Unknown(verb.clone()),
    }
}

fn with_argument(verb: &str, argument: Option<String>, build: fn(String) -> Command) -> Command {
    argument.map_or_else(|| Command::MissingArgument(verb.to_string()), build)
}
