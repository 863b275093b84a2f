//! The game session.
//!
//! [`EverestGame`] owns one climb: the world, the player's state and the help
//! table. Hosts call [`EverestGame::start`] once, then feed each input line to
//! [`EverestGame::handle_input`] until it reports the run has terminated.

use anyhow::{Context, Result};
use everest_data::WorldDef;
use log::{error, info};

use crate::command::parse_command;
use crate::item::ItemHolder;
use crate::loader::help::{HelpCommand, load_help_commands};
use crate::loader::{initialize, load_worlddef};
use crate::repl::{dispatch, help_handler};
use crate::state::GameState;
use crate::view::{OutputLine, View};
use crate::world::WorldModel;

/// Everything a host needs to show after one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutput {
    pub lines: Vec<OutputLine>,
    /// The run has ended (won or lost); no further input will be processed.
    pub terminated: bool,
}

/// A single climb of the mountain.
#[derive(Debug, Clone)]
pub struct EverestGame {
    pristine: WorldModel,
    world: WorldModel,
    state: GameState,
    help: Vec<HelpCommand>,
}

impl EverestGame {
    /// A new game on the stock route.
    ///
    /// # Errors
    /// - if the embedded world or help data is malformed
    pub fn new() -> Result<Self> {
        let def = load_worlddef()?;
        Self::from_def(&def)
    }

    /// A new game on the route described by `def`.
    ///
    /// # Errors
    /// - if `def` fails validation or the help data is malformed
    pub fn from_def(def: &WorldDef) -> Result<Self> {
        let (world, state) = initialize(def).context("while building world from definition")?;
        let help = load_help_commands()?;
        Ok(Self {
            pristine: world.clone(),
            world,
            state,
            help,
        })
    }

    /// A new game on an already built world.
    pub fn from_world(world: WorldModel, help: Vec<HelpCommand>) -> Self {
        let state = GameState::new(world.landmarks.start.clone());
        info!("new game '{}' starting at '{}'", world.title, state.current_location);
        Self {
            pristine: world.clone(),
            world,
            state,
            help,
        }
    }

    /// Throw away the current climb and start over from the initial world.
    pub fn reset(&mut self) {
        self.world = self.pristine.clone();
        self.state = GameState::new(self.world.landmarks.start.clone());
        info!("game reset");
    }

    pub fn title(&self) -> &str {
        &self.world.title
    }

    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Items across every location plus the inventory.
    pub fn total_items(&self) -> usize {
        self.world.item_count() + self.state.items().len()
    }

    /// Welcome text and the command list, shown once before any input.
    pub fn start(&self) -> Vec<OutputLine> {
        let mut view = View::new();
        view.title(self.world.title.clone());
        for line in &self.world.intro {
            view.narrative(line.clone());
        }
        help_handler(&self.help, &mut view);
        view.take_lines()
    }

    /// Process one line of player input.
    ///
    /// Internal consistency errors are reported as a single error line and
    /// leave the run going. Once the run has ended, input is ignored.
    pub fn handle_input(&mut self, input: &str) -> TurnOutput {
        let mut view = View::new();
        if self.state.is_over() {
            view.info("The expedition is over. Start a new game to climb again.");
            return TurnOutput {
                lines: view.take_lines(),
                terminated: true,
            };
        }

        let command = parse_command(input);
        info!("command: {command:?}");
        if let Err(e) = dispatch(&mut self.world, &mut self.state, &self.help, &mut view, &command) {
            error!("while handling {command:?}: {e:#}");
            view = View::new();
            view.error(format!("Something went wrong: {e}"));
        }

        TurnOutput {
            lines: view.take_lines(),
            terminated: self.state.is_over(),
        }
    }
}
