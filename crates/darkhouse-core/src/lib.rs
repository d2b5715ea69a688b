//! Darkhouse Core - Night Pursuit Simulation Engine
//!
//! A headless simulation of one night in a dark house. The player (driven
//! by an external input layer) moves between rooms under a flashlight;
//! a stalker patrols the house graph, hunts the player's last known room
//! once the night deepens, chases inside a shared room, and can end the
//! night. The engine consumes a per-frame player snapshot and emits audio
//! cues and screen-effect intensities for the render and sound layers.
//!
//! # Architecture
//!
//! - **State** ([`state`]): positions, the player snapshot, the world
//!   clock, and the audio cue feed
//! - **Stalker** ([`stalker`]): the adversary state machine
//! - **Engine** ([`engine`]): owns everything and drives one tick per frame
//! - **Config** ([`config`]): the house layout and night parameters,
//!   validated once at startup
//!
//! # Example
//!
//! ```rust,no_run
//! use darkhouse_core::prelude::*;
//!
//! let config = NightConfig::default();
//! let mut engine = NightEngine::new(&config).expect("built-in layout is valid");
//!
//! let mut player = PlayerState::new(engine.player_start_room(), Vec2::new(400.0, 300.0));
//! loop {
//!     let report = engine.update(&player, 1000.0 / 60.0);
//!     if report.game_over {
//!         engine.restart();
//!     }
//!     // feed report.cues / report.heartbeat / report.shake to collaborators,
//!     // refresh `player` from the input layer
//!     # let _ = &mut player;
//! }
//! ```

pub mod config;
pub mod engine;
pub mod stalker;
pub mod state;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::{HouseSpec, NightConfig};
    pub use crate::engine::NightEngine;
    pub use crate::state::{AudioCue, PlayerState, TickReport, Vec2};
}
