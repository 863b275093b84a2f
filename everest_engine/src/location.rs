//! Location definitions.
//!
//! A location is a node in the fixed route graph: a camp, a pitch, or a tent.
//! Everything about a location is fixed once the world is built except its
//! item list, which shrinks as the player takes things.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use everest_data::{Direction, LocationDef};

use crate::item::{Item, ItemHolder};

/// Any visitable place on the mountain.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub weather_hint: String,
    pub oxygen_hint: String,
    /// Leaving this location without checking the weather first is fatal.
    pub requires_weather_check: bool,
    /// In the death zone or above.
    pub high_altitude: bool,
    /// Exits are one-way; the destination need not lead back.
    pub exits: BTreeMap<Direction, String>,
    pub items: Vec<Item>,
}

impl ItemHolder for Location {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}

impl Location {
    /// Build a location from its definition, placing `count` instances of each item.
    ///
    /// # Errors
    /// - if an exit key is not a direction
    pub fn from_def(def: &LocationDef) -> Result<Location> {
        let mut exits = BTreeMap::new();
        for (token, to) in &def.exits {
            let dir = token
                .parse::<Direction>()
                .map_err(|e| anyhow!("invalid exit from '{}': {e}", def.name))?;
            exits.insert(dir, to.clone());
        }
        Ok(Location {
            name: def.name.clone(),
            description: def.desc.clone(),
            weather_hint: def.weather_hint.clone(),
            oxygen_hint: def.oxygen_hint.clone(),
            requires_weather_check: def.weather_check,
            high_altitude: def.high_altitude,
            exits,
            items: def.items.iter().flat_map(Item::instances_from_def).collect(),
        })
    }

    /// Name of the location reached by going `dir`, if any.
    pub fn exit(&self, dir: Direction) -> Option<&str> {
        self.exits.get(&dir).map(String::as_str)
    }

    /// Comma separated exit directions, e.g. "north, south, west".
    pub fn exit_list(&self) -> String {
        self.exits.keys().map(|dir| dir.as_str()).collect::<Vec<_>>().join(", ")
    }
}
