//! Loader utilities for building a `WorldModel` from serialized data.
//!
//! The stock world and help table are TOML files embedded at compile time, so
//! a game can always be built without touching the filesystem. An alternate
//! world file can be loaded from a path instead.

pub mod help;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use everest_data::WorldDef;
use log::info;

use crate::location::Location;
use crate::state::GameState;
use crate::world::{Landmarks, WorldModel};

/// The stock Everest route.
pub const WORLD_TOML: &str = include_str!("../data/world.toml");

/// Parse a `WorldDef` from TOML text.
///
/// # Errors
/// - on TOML syntax or shape errors
pub fn parse_worlddef(toml_text: &str) -> Result<WorldDef> {
    toml::from_str(toml_text).context("while parsing world definition")
}

/// Load the `WorldDef` for the stock route.
///
/// # Errors
/// - if the embedded world data fails to parse
pub fn load_worlddef() -> Result<WorldDef> {
    parse_worlddef(WORLD_TOML)
}

/// Load a `WorldDef` from a TOML file on disk.
///
/// # Errors
/// - on file IO or parse errors
pub fn load_worlddef_from_path(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading world file '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("in world file '{}'", path.display()))
}

/// Build the stock `WorldModel`.
///
/// # Errors
/// - if the embedded world data is malformed
pub fn load_world() -> Result<WorldModel> {
    let def = load_worlddef()?;
    build_world_from_def(&def)
}

/// Build a `WorldModel` from a TOML file on disk.
///
/// # Errors
/// - on file IO, parse, or validation errors
pub fn load_world_from_path(path: &Path) -> Result<WorldModel> {
    let def = load_worlddef_from_path(path)?;
    build_world_from_def(&def)
}

/// Validate a `WorldDef` and turn it into a `WorldModel`.
///
/// # Errors
/// - if validation reports any problem (all problems are listed in the error)
pub fn build_world_from_def(def: &WorldDef) -> Result<WorldModel> {
    validate_worlddef(def)?;

    let mut world = WorldModel {
        title: def.game.title.clone(),
        intro: def.game.intro.lines().map(str::to_string).collect(),
        landmarks: Landmarks::from(&def.game.landmarks),
        ..WorldModel::default()
    };
    for loc_def in &def.locations {
        let location = Location::from_def(loc_def).with_context(|| format!("building location '{}'", loc_def.name))?;
        world.locations.insert(location.name.clone(), location);
    }

    info!("{} locations added to WorldModel", world.locations.len());
    info!("{} items placed in WorldModel", world.item_count());
    Ok(world)
}

/// Build the world and the matching starting state.
///
/// # Errors
/// - if the definition fails validation
pub fn initialize(def: &WorldDef) -> Result<(WorldModel, GameState)> {
    let world = build_world_from_def(def)?;
    let state = GameState::new(world.landmarks.start.clone());
    info!("new climb initialized at '{}'", state.current_location);
    Ok((world, state))
}

/// Validate the `WorldDef` and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = everest_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world definition validation failed:\n{details}");
}
