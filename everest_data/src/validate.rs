use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// ```
/// use everest_data::{GameDef, LandmarksDef, LocationDef, WorldDef, validate_world};
///
/// let camp = LocationDef {
///     name: "camp".into(),
///     desc: "A camp.".into(),
///     weather_hint: String::new(),
///     oxygen_hint: String::new(),
///     weather_check: false,
///     high_altitude: false,
///     exits: Default::default(),
///     items: Vec::new(),
/// };
/// let landmarks = LandmarksDef {
///     start: "camp".into(),
///     summit: "camp".into(),
///     summit_approach: "camp".into(),
///     approach_base: "camp".into(),
///     high_camp: "camp".into(),
///     descent_camp: "camp".into(),
///     rest_stop: "camp".into(),
///     death_zone_camp: "camp".into(),
/// };
/// let world = WorldDef {
///     game: GameDef { title: "Demo".into(), intro: String::new(), landmarks },
///     locations: vec![camp],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.game.title.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game title missing".to_string(),
        });
    }

    let mut locations = HashSet::new();
    track_ids(
        "location",
        world.locations.iter().map(|loc| loc.name.as_str()),
        &mut locations,
        &mut errors,
    );

    for (field, name) in world.game.landmarks.entries() {
        check_ref("location", name, &locations, format!("landmark '{field}'"), &mut errors);
    }

    for loc in &world.locations {
        let mut directions = HashSet::new();
        for (token, to) in &loc.exits {
            match token.parse::<Direction>() {
                Ok(dir) if !directions.insert(dir) => errors.push(ValidationError::InvalidValue {
                    context: format!("exit '{token}' from '{}' repeats direction '{dir}'", loc.name),
                }),
                Ok(_) => {},
                Err(_) => errors.push(ValidationError::InvalidValue {
                    context: format!("exit '{token}' from '{}' is not a direction", loc.name),
                }),
            }
            check_ref(
                "location",
                to,
                &locations,
                format!("exit '{token}' from '{}'", loc.name),
                &mut errors,
            );
        }
        for item in &loc.items {
            if item.name.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("unnamed item in '{}'", loc.name),
                });
            }
            if item.count == 0 {
                errors.push(ValidationError::InvalidValue {
                    context: format!("item '{}' in '{}' has a count of zero", item.name, loc.name),
                });
            }
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
