//! Command dispatch.
//!
//! The host runs a read-eval-print loop; this module and its submodules
//! implement the handlers that apply one [`Command`] to the world and the
//! player's state, pushing everything to show onto a [`View`].

pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::Result;

use crate::command::Command;
use crate::loader::help::HelpCommand;
use crate::state::GameState;
use crate::view::View;
use crate::world::WorldModel;

/// Route a parsed command to its handler.
///
/// # Errors
/// Propagates internal consistency failures from handlers, such as the
/// player's location missing from the world.
pub fn dispatch(
    world: &mut WorldModel,
    state: &mut GameState,
    help: &[HelpCommand],
    view: &mut View,
    command: &Command,
) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        MoveTo(direction) => move_to_handler(world, state, view, *direction)?,
        Look => look_handler(world, state, view)?,
        Inventory => inv_handler(state, view),
        Help => help_handler(help, view),
        Take(thing) => take_handler(world, state, view, thing)?,
        UseItem(thing) => use_handler(world, state, view, thing)?,
        Examine(thing) => examine_handler(world, state, view, thing)?,
        MissingArgument(verb) => missing_argument_handler(verb, view),
        NoCommand => no_command_handler(view),
        Unknown(verb) => unknown_handler(verb, view),
    }
    Ok(())
}
