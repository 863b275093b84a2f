//! Entity Search Module
//!
//! Every handler that takes an item name from the player resolves it here, so
//! the matching policy lives in exactly one place.
//!
//! Matching is case-insensitive and by substring: an item matches if its name
//! *contains* the search text, so "oxygen" finds "Oxygen Tank" and "radio"
//! finds "Weather Radio". The first match in holder order wins.

use thiserror::Error;

use crate::item::{Item, ItemHolder};
use crate::state::GameState;
use crate::world::WorldModel;

/// Where to look for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only the player's inventory.
    Inventory,
    /// Only the items lying in the player's current location.
    Surroundings,
    /// Inventory first, then the current location.
    Visible,
}

/// Where a matched item was found, with its index in that holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMatch {
    Inventory(usize),
    Surroundings(usize),
}

/// Possible errors / situations causing a failed item search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no item in scope with a name matching '{0}'")]
    NoMatchingName(String),
    #[error("current location '{0}' not found in world")]
    InvalidLocation(String),
}

/// True if `name` contains `pattern`, ignoring case. A blank pattern matches nothing.
pub fn name_matches(name: &str, pattern: &str) -> bool {
    let lc_pattern = pattern.trim().to_lowercase();
    !lc_pattern.is_empty() && name.to_lowercase().contains(&lc_pattern)
}

/// Index of the first item in `items` whose name matches `pattern`.
pub fn find_item_index(items: &[Item], pattern: &str) -> Option<usize> {
    items.iter().position(|item| name_matches(&item.name, pattern))
}

/// Find an item matching `pattern` within `scope`.
///
/// # Errors
/// - `NoMatchingName` if nothing in scope matches
/// - `InvalidLocation` if the scope includes the surroundings and the player's location is unknown
pub fn find_item_match(
    world: &WorldModel,
    state: &GameState,
    pattern: &str,
    scope: SearchScope,
) -> Result<ItemMatch, SearchError> {
    if matches!(scope, SearchScope::Inventory | SearchScope::Visible)
        && let Some(index) = find_item_index(state.items(), pattern)
    {
        return Ok(ItemMatch::Inventory(index));
    }
    if matches!(scope, SearchScope::Surroundings | SearchScope::Visible) {
        let location = world
            .locations
            .get(&state.current_location)
            .ok_or_else(|| SearchError::InvalidLocation(state.current_location.clone()))?;
        if let Some(index) = find_item_index(location.items(), pattern) {
            return Ok(ItemMatch::Surroundings(index));
        }
    }
    Err(SearchError::NoMatchingName(pattern.to_string()))
}

/// Resolve an [`ItemMatch`] back to the item it points at.
pub fn matched_item<'a>(world: &'a WorldModel, state: &'a GameState, found: ItemMatch) -> Option<&'a Item> {
    match found {
        ItemMatch::Inventory(index) => state.inventory.get(index),
        ItemMatch::Surroundings(index) => world
            .locations
            .get(&state.current_location)
            .and_then(|loc| loc.items.get(index)),
    }
}
