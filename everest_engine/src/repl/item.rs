//! `repl::item` module
//!
//! Handlers for taking, using and examining items. Item names typed by the
//! player are resolved through [`crate::entity_search`].

use anyhow::{Result, anyhow, bail};
use log::info;

use crate::ItemKind;
use crate::entity_search::{ItemMatch, SearchError, SearchScope, find_item_match, matched_item};
use crate::item::ItemHolder;
use crate::state::GameState;
use crate::view::View;
use crate::world::WorldModel;

const DEFAULT_MAP_TEXT: &str = "You consult the map. It shows the route through the camps to the summit.";

/// Moves the first matching item from the current location into the inventory.
///
/// # Errors
/// Returns an error if the player's current location cannot be resolved.
pub fn take_handler(world: &mut WorldModel, state: &mut GameState, view: &mut View, thing: &str) -> Result<()> {
    let index = match find_item_match(world, state, thing, SearchScope::Surroundings) {
        Ok(ItemMatch::Surroundings(index)) => index,
        Ok(ItemMatch::Inventory(_)) => bail!("surroundings search for '{thing}' matched the inventory"),
        Err(SearchError::NoMatchingName(_)) => {
            view.error(format!("There's no {thing} here to take."));
            return Ok(());
        },
        Err(e) => bail!(e),
    };

    let location = world.location_mut(&state.current_location)?;
    let mut item = location
        .remove_item(index)
        .ok_or_else(|| anyhow!("item index {index} out of range in '{}'", location.name))?;
    item.picked_up = true;
    view.action(format!("You have taken the {}.", item.name));
    info!("player took '{}' from '{}'", item.name, location.name);
    state.add_item(item);
    Ok(())
}

/// Uses an item from the inventory.
///
/// Oxygen tanks are consumed, and only at high altitude. Everything else
/// stays in the pack.
///
/// # Errors
/// Returns an error if the player's current location cannot be resolved.
pub fn use_handler(world: &WorldModel, state: &mut GameState, view: &mut View, thing: &str) -> Result<()> {
    let index = match find_item_match(world, state, thing, SearchScope::Inventory) {
        Ok(ItemMatch::Inventory(index)) => index,
        Ok(ItemMatch::Surroundings(_)) => bail!("inventory search for '{thing}' matched the surroundings"),
        Err(SearchError::NoMatchingName(_)) => {
            view.error(format!("You don't have a {thing} in your inventory."));
            return Ok(());
        },
        Err(e) => bail!(e),
    };
    let (name, kind, use_text) = {
        let item = &state.inventory[index];
        (item.name.clone(), item.kind, item.use_text.clone())
    };

    match kind {
        ItemKind::Map => {
            view.narrative(use_text.unwrap_or_else(|| DEFAULT_MAP_TEXT.to_string()));
            info!("player read the '{name}'");
        },
        ItemKind::OxygenTank => {
            let location = world.location(&state.current_location)?;
            if world.is_high_altitude(&location.name) {
                state.remove_item(index);
                state.has_used_oxygen = true;
                view.action("You use the oxygen tank. It helps you breathe in the thin air.");
                info!(
                    "player used an oxygen tank at '{}' ({} left)",
                    location.name,
                    state.count_kind(ItemKind::OxygenTank)
                );
            } else {
                view.info("The air here is still breathable. Save the oxygen tank for the death zone.");
                info!("player tried to use an oxygen tank at '{}'", location.name);
            }
        },
        ItemKind::WeatherRadio => {
            state.weather_checked = true;
            view.success("You check the weather conditions. The forecast shows stable weather for the next 24 hours.");
            view.success("You've successfully checked the weather and can proceed safely.");
            info!("weather checked at '{}'", state.current_location);
        },
        ItemKind::Rope | ItemKind::Gear => {
            view.error(format!("You can't use the {name} right now."));
            info!("player tried to use '{name}'");
        },
    }
    Ok(())
}

/// Shows the description of an item in the inventory or the current location.
///
/// # Errors
/// Returns an error if the player's current location cannot be resolved.
pub fn examine_handler(world: &WorldModel, state: &GameState, view: &mut View, thing: &str) -> Result<()> {
    let found = match find_item_match(world, state, thing, SearchScope::Visible) {
        Ok(found) => found,
        Err(SearchError::NoMatchingName(_)) => {
            view.error(format!("You don't see any {thing} here."));
            return Ok(());
        },
        Err(e) => bail!(e),
    };
    let item = matched_item(world, state, found).ok_or_else(|| anyhow!("matched item for '{thing}' vanished"))?;
    view.subtitle(item.name.clone());
    view.narrative(item.description.clone());
    info!("player examined '{}'", item.name);
    Ok(())
}
