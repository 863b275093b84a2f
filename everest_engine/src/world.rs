//! The static route graph.
//!
//! [`WorldModel`] holds every location on the mountain and the landmarks the
//! climbing rules refer to. It is built once per game; only the item lists of
//! its locations change during play.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use everest_data::LandmarksDef;

use crate::item::ItemHolder;
use crate::location::Location;

/// Locations with special meaning to the movement and phase rules.
#[derive(Debug, Clone, Default)]
pub struct Landmarks {
    pub start: String,
    pub summit: String,
    pub summit_approach: String,
    pub approach_base: String,
    pub high_camp: String,
    pub descent_camp: String,
    pub rest_stop: String,
    pub death_zone_camp: String,
}

impl From<&LandmarksDef> for Landmarks {
    fn from(def: &LandmarksDef) -> Self {
        Self {
            start: def.start.clone(),
            summit: def.summit.clone(),
            summit_approach: def.summit_approach.clone(),
            approach_base: def.approach_base.clone(),
            high_camp: def.high_camp.clone(),
            descent_camp: def.descent_camp.clone(),
            rest_stop: def.rest_stop.clone(),
            death_zone_camp: def.death_zone_camp.clone(),
        }
    }
}

/// Every location on the mountain, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct WorldModel {
    pub title: String,
    pub intro: Vec<String>,
    pub locations: HashMap<String, Location>,
    pub landmarks: Landmarks,
}

impl WorldModel {
    /// Look up a location by name.
    /// # Errors
    /// - if no location has that name
    pub fn location(&self, name: &str) -> Result<&Location> {
        self.locations
            .get(name)
            .ok_or_else(|| anyhow!("location '{name}' not found in world"))
    }

    /// Look up a location by name for modification.
    /// # Errors
    /// - if no location has that name
    pub fn location_mut(&mut self, name: &str) -> Result<&mut Location> {
        self.locations
            .get_mut(name)
            .ok_or_else(|| anyhow!("location '{name}' not found in world"))
    }

    /// True for the death zone and above. Unknown names are not high altitude.
    pub fn is_high_altitude(&self, name: &str) -> bool {
        self.locations.get(name).is_some_and(|loc| loc.high_altitude)
    }

    /// Number of items lying around in all locations.
    pub fn item_count(&self) -> usize {
        self.locations.values().map(|loc| loc.items().len()).sum()
    }
}
