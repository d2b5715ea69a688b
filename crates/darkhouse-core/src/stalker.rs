//! The stalker: room-level patrol cadence, hunt escalation, in-room chase,
//! and the audio pressure that tracks all of it.

use darkhouse_logic::chase;
use darkhouse_logic::house::{HouseGraph, RoomId};
use darkhouse_logic::nav;
use darkhouse_logic::sight;
use rand::Rng;

use crate::state::{AudioCue, AudioFeed, PlayerState, SceneBounds, Vec2};

/// In-game minute (3 AM) past which the stalker escalates for the rest of
/// the night.
pub const HUNT_START_MINUTES: u32 = 180;

/// Shake amplitude reported on the catch; the renderer decays it.
pub const CATCH_SHAKE: f32 = 20.0;

const PATROL_SPEED: f32 = 2.0;
const HUNT_SPEED: f32 = 3.0;
const PATROL_MOVE_INTERVAL_MS: f32 = 5000.0;
const HUNT_MOVE_INTERVAL_MS: f32 = 3000.0;
/// Under this distance the scream cue re-triggers every tick.
const SCREAM_DISTANCE: f32 = 100.0;
/// Distance at which the heartbeat starts rising.
const HEARTBEAT_RANGE: f32 = 400.0;
/// The heartbeat saturates at this volume.
const HEARTBEAT_CEILING: f32 = 0.8;

/// The adversary's mutable state. One per night; the engine tick is its
/// only mutator.
#[derive(Debug, Clone)]
pub struct Stalker {
    room: RoomId,
    position: Vec2,
    speed: f32,
    hunting: bool,
    last_known_player_room: Option<RoomId>,
    move_timer_ms: f32,
    move_interval_ms: f32,
}

impl Stalker {
    /// Spawn patrolling in `start_room` at a random point in the bounds.
    pub fn spawn<R: Rng>(start_room: RoomId, bounds: &SceneBounds, rng: &mut R) -> Self {
        Self {
            room: start_room,
            position: bounds.random_point(rng),
            speed: PATROL_SPEED,
            hunting: false,
            last_known_player_room: None,
            move_timer_ms: 0.0,
            move_interval_ms: PATROL_MOVE_INTERVAL_MS,
        }
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Only meaningful while the stalker shares the player's room.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_hunting(&self) -> bool {
        self.hunting
    }

    pub fn last_known_player_room(&self) -> Option<RoomId> {
        self.last_known_player_room
    }

    /// One tick. Returns `true` when this tick caught the player.
    ///
    /// Step order is load-bearing: escalation feeds the chase speed table,
    /// tracking feeds the room-change decision, and the audio derivation
    /// reads the state everything else just wrote.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng>(
        &mut self,
        player: &PlayerState,
        minutes: u32,
        delta_ms: f32,
        graph: &HouseGraph,
        bounds: &SceneBounds,
        rng: &mut R,
        audio: &mut AudioFeed,
    ) -> bool {
        self.escalate(minutes);
        self.track_player(player);

        let caught = if self.room == player.room {
            self.chase(player, audio)
        } else {
            self.move_timer_ms += delta_ms;
            if self.move_timer_ms >= self.move_interval_ms {
                self.change_room(graph, bounds, rng, audio);
                self.move_timer_ms = 0.0;
            }
            false
        };

        self.update_audio(player, audio);
        caught
    }

    /// Latch hunt mode once the clock passes the threshold. The latch
    /// survives the clock wrapping back past midnight.
    fn escalate(&mut self, minutes: u32) {
        if !self.hunting && minutes >= HUNT_START_MINUTES {
            self.hunting = true;
            self.speed = HUNT_SPEED;
            self.move_interval_ms = HUNT_MOVE_INTERVAL_MS;
            tracing::debug!(minutes, "stalker escalated to hunt mode");
        }
    }

    /// The stalker only learns where the player is while the lights are
    /// off; a lit room is never recorded.
    fn track_player(&mut self, player: &PlayerState) {
        if !player.lights_on && self.last_known_player_room != Some(player.room) {
            self.last_known_player_room = Some(player.room);
        }
    }

    fn chase(&mut self, player: &PlayerState, audio: &mut AudioFeed) -> bool {
        let seen = player.lights_on
            || sight::in_flashlight_cone(
                player.position.x,
                player.position.y,
                player.flashlight_angle,
                self.position.x,
                self.position.y,
            );
        self.speed = chase::pursuit_speed(self.hunting, seen);

        let dist = self.position.distance(&player.position);
        if dist > chase::HOLD_DISTANCE {
            let (dx, dy) = chase::step_toward(
                self.position.x,
                self.position.y,
                player.position.x,
                player.position.y,
                self.speed,
            );
            self.position.x += dx;
            self.position.y += dy;

            if dist < chase::CATCH_DISTANCE {
                audio.push(AudioCue::Scream);
                return true;
            }
        }
        false
    }

    /// Pick the next room: one hop along the shortest path to the player's
    /// last known room while hunting, otherwise a uniformly random
    /// neighbor. Entering a room repositions the stalker and creaks a door.
    fn change_room<R: Rng>(
        &mut self,
        graph: &HouseGraph,
        bounds: &SceneBounds,
        rng: &mut R,
        audio: &mut AudioFeed,
    ) {
        let hunted_hop = if self.hunting {
            self.last_known_player_room
                .map(|target| nav::shortest_path(graph, self.room, target))
                .and_then(|path| path.get(1).copied())
        } else {
            None
        };

        let next = match hunted_hop {
            Some(hop) => hop,
            None => {
                let options = graph.neighbors(self.room).unwrap_or_default();
                if options.is_empty() {
                    return;
                }
                options[rng.gen_range(0..options.len())]
            }
        };

        tracing::debug!(
            from = graph.name_of(self.room).unwrap_or("?"),
            to = graph.name_of(next).unwrap_or("?"),
            hunting = self.hunting,
            "stalker changed rooms"
        );
        self.room = next;
        self.position = bounds.random_point(rng);
        audio.push(AudioCue::DoorCreak);
    }

    /// Heartbeat rises as the stalker closes in and saturates at 0.8;
    /// inside scream range the cue re-fires every tick and the sound layer
    /// restarts playback.
    fn update_audio(&mut self, player: &PlayerState, audio: &mut AudioFeed) {
        if self.room == player.room {
            let dist = self.position.distance(&player.position);
            audio.set_heartbeat(((HEARTBEAT_RANGE - dist) / HEARTBEAT_RANGE).min(HEARTBEAT_CEILING));
            if dist < SCREAM_DISTANCE {
                audio.push(AudioCue::Scream);
            }
        } else {
            audio.set_heartbeat(0.0);
        }
    }
}
