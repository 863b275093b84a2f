//! `repl::movement` module
//!
//! Contains the handler for commands that change the player's location, along
//! with the hazard gates that can end the climb on the way.
//!
//! A move runs through these steps, stopping at the first fatal outcome:
//! 1. resolve the exit from the current location
//! 2. weather gate: leaving a location that needs a weather check, unchecked
//! 3. special transitions keyed on the (from, to) pair (rope, rest, summit)
//! 4. commit the move and describe the new location
//! 5. phase tracking
//! 6. altitude warning if oxygen was not used for a high-altitude move

use anyhow::{Result, anyhow};
use everest_data::Direction;
use log::{info, warn};

use crate::ItemKind;
use crate::item::ItemHolder;
use crate::phase::check_game_state;
use crate::state::{DeathCause, Ending, GameState};
use crate::view::View;
use crate::world::WorldModel;

/// Result of checking the special rules for a (from, to) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Proceed,
    Fatal,
}

/// Move the player to a neighboring location, if the mountain allows it.
///
/// # Errors
/// - if the current location (or the exit's destination) is missing from the world.
///   Nothing is changed in that case.
pub fn move_to_handler(world: &WorldModel, state: &mut GameState, view: &mut View, direction: Direction) -> Result<()> {
    let current = world.location(&state.current_location)?;

    let Some(next_name) = current.exit(direction) else {
        view.error("You can't go that way.");
        view.info(format!("Exits: {}", current.exit_list()));
        info!("no exit {direction} from '{}'", current.name);
        return Ok(());
    };
    let next = world
        .location(next_name)
        .map_err(|e| anyhow!("exit {direction} from '{}' is broken: {e}", current.name))?;

    if current.requires_weather_check && !state.weather_checked {
        view.narrative(format!(
            "As you start moving towards {}, you hear a loud rumbling. Before you can react, an avalanche engulfs you.",
            next.name
        ));
        view.game_over(
            "Game Over: You were caught in an avalanche. Always check weather conditions before proceeding to the next camp.",
        );
        warn!("avalanche leaving '{}' towards '{}' without a weather check", current.name, next.name);
        state.end(Ending::Death(DeathCause::Avalanche));
        return Ok(());
    }

    if check_transition(world, state, view, &current.name, &next.name) == Transition::Fatal {
        return Ok(());
    }

    state.current_location.clone_from(&next.name);
    state.weather_checked = false;
    view.subtitle(next.name.clone());
    view.narrative(next.description.clone());
    info!("player moved {direction} from '{}' to '{}'", current.name, next.name);

    check_game_state(world, state, view);
    if state.is_over() {
        return Ok(());
    }

    if (world.is_high_altitude(&current.name) || world.is_high_altitude(&next.name)) && !state.has_used_oxygen {
        view.warning("The air is dangerously thin up here. Use an oxygen tank before you move on.");
        info!("player moved at high altitude without using oxygen");
    }
    state.has_used_oxygen = false;
    Ok(())
}

/// Apply the special rules for moving from `from` to `to`, before the move commits.
///
/// Sets the summit and rest flags as a side effect. A `Fatal` result has already
/// ended the run and pushed its narrative.
pub fn check_transition(world: &WorldModel, state: &mut GameState, view: &mut View, from: &str, to: &str) -> Transition {
    let marks = &world.landmarks;

    if from == marks.approach_base && to == marks.summit_approach {
        if !state.has_kind(ItemKind::Rope) {
            view.narrative("You attempt to climb the Hillary Step without a rope. It's an extremely dangerous move.");
            view.narrative("You lose your footing and fall. The fall is fatal.");
            view.game_over("Game Over: Always ensure you have proper equipment before attempting dangerous climbs.");
            warn!("fatal fall entering '{to}' without a rope");
            state.end(Ending::Death(DeathCause::Fall));
            return Transition::Fatal;
        }
        view.action(
            "You affix the rope to the remaining 500 meters of the climb. Installing rope lines helps you safely navigate the Hillary Step.",
        );
        info!("rope used to climb from '{from}' to '{to}'");
    }

    if to == marks.summit {
        state.has_reached_summit = true;
        state.has_rested_during_descent = false;
        info!("summit reached");
    }

    if from == marks.high_camp && to == marks.descent_camp && state.has_reached_summit && !state.has_rested_during_descent
    {
        view.narrative(format!("As you attempt to descend from {from} to {to}, exhaustion overtakes you."));
        view.narrative("Your body, pushed to its limits by the summit climb, gives out. You collapse on the mountain.");
        view.game_over("Game Over: Always rest and recover at the Sherpa Tent before attempting the long descent.");
        warn!("exhaustion descending from '{from}' without resting");
        state.end(Ending::Death(DeathCause::Exhaustion));
        return Transition::Fatal;
    }

    if to == marks.rest_stop && state.has_reached_summit {
        state.has_rested_during_descent = true;
        view.action(
            "You take a moment to rest on the comfortable bed. You can feel your strength returning, preparing you for the descent ahead.",
        );
        info!("player rested at '{to}' after summiting");
    }

    Transition::Proceed
}
