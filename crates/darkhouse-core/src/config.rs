//! Layout and night configuration.
//!
//! The house ships as data: rooms, their connections, an ambient color,
//! and decorative furniture the render layer draws. Everything is
//! validated here once at startup; past this boundary the core never
//! returns an error.

use darkhouse_logic::house::{HouseError, HouseGraph, RoomDef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::SceneBounds;

/// A furniture rectangle in room-relative [0, 1] coordinates. Opaque to
/// the simulation; carried for the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One room as it appears in layout data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    /// Display label for the HUD.
    pub label: String,
    pub connections: Vec<String>,
    /// Ambient color, e.g. "#1a1a1a".
    pub ambient: String,
    #[serde(default)]
    pub furniture: Vec<FurnitureSpec>,
}

/// The whole house layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseSpec {
    pub rooms: Vec<RoomSpec>,
}

impl HouseSpec {
    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the layout into a graph.
    pub fn build_graph(&self) -> Result<HouseGraph, ConfigError> {
        let defs: Vec<RoomDef> = self
            .rooms
            .iter()
            .map(|r| RoomDef {
                name: r.name.clone(),
                connections: r.connections.clone(),
                ambient: r.ambient.clone(),
            })
            .collect();
        Ok(HouseGraph::build(&defs)?)
    }

    /// The built-in seven-room house.
    pub fn standard_house() -> Self {
        Self {
            rooms: vec![
                room(
                    "bedroom",
                    "Bedroom",
                    "#232323",
                    &["hallway"],
                    vec![
                        item("bed", 0.25, 0.25, 0.25, 0.15),
                        item("dresser", 0.7, 0.2, 0.1, 0.2),
                    ],
                ),
                room(
                    "hallway",
                    "Hallway",
                    "#1a1a1a",
                    &["bedroom", "kitchen", "bathroom", "study", "basement"],
                    vec![
                        item("plant", 0.1, 0.3, 0.05, 0.1),
                        item("painting", 0.4, 0.1, 0.15, 0.08),
                    ],
                ),
                room(
                    "kitchen",
                    "Kitchen",
                    "#202020",
                    &["hallway", "pantry"],
                    vec![
                        item("counter", 0.2, 0.2, 0.4, 0.1),
                        item("fridge", 0.7, 0.15, 0.1, 0.25),
                        item("island", 0.35, 0.5, 0.2, 0.15),
                    ],
                ),
                room(
                    "bathroom",
                    "Bathroom",
                    "#1c1c1c",
                    &["hallway"],
                    vec![
                        item("sink", 0.3, 0.2, 0.15, 0.1),
                        item("shower", 0.6, 0.15, 0.15, 0.2),
                    ],
                ),
                room(
                    "study",
                    "Study",
                    "#1e1e1e",
                    &["hallway"],
                    vec![
                        item("desk", 0.3, 0.3, 0.25, 0.12),
                        item("bookshelf", 0.1, 0.1, 0.1, 0.4),
                        item("chair", 0.35, 0.45, 0.08, 0.08),
                    ],
                ),
                room(
                    "basement",
                    "Basement",
                    "#151515",
                    &["hallway"],
                    vec![
                        item("boxes", 0.15, 0.2, 0.2, 0.2),
                        item("workbench", 0.5, 0.1, 0.3, 0.15),
                        item("tools", 0.6, 0.4, 0.15, 0.1),
                    ],
                ),
                room(
                    "pantry",
                    "Pantry",
                    "#191919",
                    &["kitchen"],
                    vec![
                        item("shelves", 0.1, 0.1, 0.8, 0.1),
                        item("shelves", 0.1, 0.3, 0.8, 0.1),
                        item("shelves", 0.1, 0.5, 0.8, 0.1),
                    ],
                ),
            ],
        }
    }
}

fn room(
    name: &str,
    label: &str,
    ambient: &str,
    connections: &[&str],
    furniture: Vec<FurnitureSpec>,
) -> RoomSpec {
    RoomSpec {
        name: name.to_string(),
        label: label.to_string(),
        connections: connections.iter().map(|c| c.to_string()).collect(),
        ambient: ambient.to_string(),
        furniture,
    }
}

fn item(kind: &str, x: f32, y: f32, w: f32, h: f32) -> FurnitureSpec {
    FurnitureSpec {
        kind: kind.to_string(),
        x,
        y,
        w,
        h,
    }
}

/// Errors raised while validating configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid house layout: {0}")]
    Layout(#[from] HouseError),
    #[error("malformed layout JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scene bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

/// Everything needed to start a night.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightConfig {
    pub house: HouseSpec,
    pub bounds: SceneBounds,
    /// Room the player wakes up in.
    pub player_start: String,
    /// Room the stalker starts patrolling from.
    pub stalker_start: String,
    /// Seed for the night's randomness; equal seeds replay identically.
    pub seed: u64,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self {
            house: HouseSpec::standard_house(),
            bounds: SceneBounds::default(),
            player_start: "bedroom".to_string(),
            stalker_start: "kitchen".to_string(),
            seed: 0,
        }
    }
}

impl NightConfig {
    pub(crate) fn validate_bounds(&self) -> Result<(), ConfigError> {
        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return Err(ConfigError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        Ok(())
    }
}
