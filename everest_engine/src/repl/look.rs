//! Observation command handlers.
//!
//! Looking around and checking the pack never change the world or the
//! player's state; repeating them is always safe.

use anyhow::Result;
use log::info;

use crate::item::ItemHolder;
use crate::state::GameState;
use crate::view::View;
use crate::world::WorldModel;

/// Shows description, hazard hints, items and exits of the current location.
///
/// # Errors
/// Returns an error if the player's current location cannot be resolved.
pub fn look_handler(world: &WorldModel, state: &GameState, view: &mut View) -> Result<()> {
    let location = world.location(&state.current_location)?;
    view.subtitle(location.name.clone());
    view.narrative(location.description.clone());
    if !location.weather_hint.is_empty() {
        view.info(location.weather_hint.clone());
    }
    if !location.oxygen_hint.is_empty() {
        view.info(location.oxygen_hint.clone());
    }

    let items = location.item_summary();
    if items.is_empty() {
        view.info("You don't see any items here.");
    } else {
        view.info("You see the following items:");
        for name in items {
            view.action(format!("- {name}"));
        }
    }
    view.info(format!("Exits: {}", location.exit_list()));

    info!("player looked around '{}'", location.name);
    Ok(())
}

/// Shows the items the player is carrying.
pub fn inv_handler(state: &GameState, view: &mut View) {
    info!("player checked inventory ({} items)", state.inventory.len());
    let items = state.item_summary();
    if items.is_empty() {
        view.info("Your inventory is empty.");
        return;
    }
    view.info("Your inventory contains:");
    for name in items {
        view.action(format!("- {name}"));
    }
}
