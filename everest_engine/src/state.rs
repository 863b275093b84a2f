//! Player-facing state that changes turn by turn.

use crate::item::{Item, ItemHolder};

/// Coarse progress through the expedition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    AtBasecamp,
    OnMountain,
    AtSummit,
    Descending,
    GameOver,
}

/// Ways the mountain can kill you.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Avalanche,
    Fall,
    Exhaustion,
    Hypoxia,
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Victory,
    Death(DeathCause),
}

/// Mutable state of a single climb.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Always a key into `WorldModel::locations`.
    pub current_location: String,
    pub inventory: Vec<Item>,
    /// Cleared on every successful move.
    pub weather_checked: bool,
    pub has_reached_summit: bool,
    /// Only meaningful once `has_reached_summit` is set.
    pub has_rested_during_descent: bool,
    /// An oxygen tank was used since the last move.
    pub has_used_oxygen: bool,
    pub phase: Phase,
    pub ending: Option<Ending>,
}

impl GameState {
    /// Fresh state for a climber standing at `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current_location: start.into(),
            inventory: Vec::new(),
            weather_checked: false,
            has_reached_summit: false,
            has_rested_during_descent: false,
            has_used_oxygen: false,
            phase: Phase::AtBasecamp,
            ending: None,
        }
    }

    /// Finish the run. Later endings never replace the first.
    pub fn end(&mut self, ending: Ending) {
        if self.ending.is_none() {
            self.ending = Some(ending);
        }
        self.phase = Phase::GameOver;
    }

    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }
}

impl ItemHolder for GameState {
    fn items(&self) -> &[Item] {
        &self.inventory
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.inventory
    }
}
