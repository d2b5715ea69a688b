//! Shared state types: positions, the player snapshot, scene bounds, the
//! world clock, and the audio cue feed.

use darkhouse_logic::house::RoomId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the night in in-game minutes (12 AM to 6 AM).
pub const NIGHT_MINUTES: u32 = 360;

/// 2D position in scene units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// Per-frame snapshot of the player, produced by the input layer.
/// The core reads it and never writes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    pub room: RoomId,
    pub position: Vec2,
    /// Flashlight facing angle in radians.
    pub flashlight_angle: f32,
    /// Whether the room lights are on.
    pub lights_on: bool,
}

impl PlayerState {
    /// A lit, forward-facing player; callers adjust fields per frame.
    pub fn new(room: RoomId, position: Vec2) -> Self {
        Self {
            room,
            position,
            flashlight_angle: 0.0,
            lights_on: true,
        }
    }
}

/// Scene rectangle the stalker repositions into when it enters a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
}

impl SceneBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: &Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Uniformly random point inside the bounds.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// In-game clock: one minute per elapsed real second, wrapped over the
/// night.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorldClock {
    minutes: u32,
    carry_ms: f32,
}

impl WorldClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a frame's delta; every full second adds one minute.
    pub fn advance(&mut self, delta_ms: f32) {
        if delta_ms <= 0.0 {
            return;
        }
        self.carry_ms += delta_ms;
        while self.carry_ms >= 1000.0 {
            self.carry_ms -= 1000.0;
            self.minutes = (self.minutes + 1) % NIGHT_MINUTES;
        }
    }

    /// Minutes since midnight, in [0, [`NIGHT_MINUTES`]).
    pub fn elapsed(&self) -> u32 {
        self.minutes
    }

    /// HUD readout, "12:00 AM" through "5:59 AM".
    pub fn clock_face(&self) -> String {
        let hour = self.minutes / 60;
        let minute = self.minutes % 60;
        let display_hour = if hour == 0 { 12 } else { hour };
        format!("{}:{:02} AM", display_hour, minute)
    }
}

/// Audio events the core emits for the sound layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// A door creaks as the stalker enters another room.
    DoorCreak,
    /// The stalker screams: close contact, or the catch itself.
    Scream,
}

/// Cue queue plus the continuously recomputed heartbeat volume.
///
/// Cues may repeat across consecutive ticks while their trigger holds; the
/// sound layer restarts playback on each one.
#[derive(Debug, Clone, Default)]
pub struct AudioFeed {
    cues: Vec<AudioCue>,
    heartbeat: f32,
}

impl AudioFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }

    /// Take all queued cues, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    /// Heartbeat volume in [0, 1].
    pub fn heartbeat(&self) -> f32 {
        self.heartbeat
    }

    pub fn set_heartbeat(&mut self, volume: f32) {
        self.heartbeat = volume.clamp(0.0, 1.0);
    }
}

/// Everything the render and sound layers need from one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub cues: Vec<AudioCue>,
    /// Heartbeat volume in [0, 1]; saturates at 0.8 during a chase.
    pub heartbeat: f32,
    /// Instantaneous shake amplitude; the renderer max-merges and decays it.
    pub shake: f32,
    /// Vignette opacity in [0, 1].
    pub vignette: f32,
    pub game_over: bool,
}
