use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Stable identifier used across `WorldDef` references. Locations are keyed by name.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
}

/// Game-level metadata and the landmarks the climbing rules key on.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub landmarks: LandmarksDef,
}

/// Named locations with special meaning to the movement and phase rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LandmarksDef {
    /// Where the climb begins and must end.
    pub start: Id,
    pub summit: Id,
    /// The last pitch below the summit (the Hillary Step). Needs a rope to enter.
    pub summit_approach: Id,
    /// The location the approach is climbed from (the South Summit).
    pub approach_base: Id,
    /// Highest camp before the summit push.
    pub high_camp: Id,
    /// First camp below `high_camp` on the way down.
    pub descent_camp: Id,
    /// Where a climber can recover after summiting.
    pub rest_stop: Id,
    /// Arriving here without bottled oxygen is fatal.
    pub death_zone_camp: Id,
}

impl LandmarksDef {
    /// Every landmark paired with its field name, for validation and logging.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("start", &self.start),
            ("summit", &self.summit),
            ("summit_approach", &self.summit_approach),
            ("approach_base", &self.approach_base),
            ("high_camp", &self.high_camp),
            ("descent_camp", &self.descent_camp),
            ("rest_stop", &self.rest_stop),
            ("death_zone_camp", &self.death_zone_camp),
        ]
    }
}

/// Location definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub name: Id,
    pub desc: String,
    #[serde(default)]
    pub weather_hint: String,
    #[serde(default)]
    pub oxygen_hint: String,
    #[serde(default)]
    pub weather_check: bool,
    #[serde(default)]
    pub high_altitude: bool,
    /// Direction token -> destination location name.
    #[serde(default)]
    pub exits: BTreeMap<String, Id>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Item definition. `count` identical instances are placed in the owning location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub use_text: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

/// What an item does when used (or carried).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Map,
    OxygenTank,
    WeatherRadio,
    Rope,
    #[default]
    Gear,
}

/// Compass directions usable as exit keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a direction", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Accepts full names and single-letter abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}
