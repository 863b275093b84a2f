#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const EVEREST_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod entity_search;
pub mod game;
pub mod item;
pub mod loader;
pub mod location;
pub mod phase;
pub mod repl;
pub mod state;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use everest_data::{Direction, ItemKind};
pub use game::{EverestGame, TurnOutput};
pub use item::{Item, ItemHolder};
pub use loader::{initialize, load_world};
pub use location::Location;
pub use state::{DeathCause, Ending, GameState, Phase};
pub use view::{OutputLine, Style, View};
pub use world::{Landmarks, WorldModel};
