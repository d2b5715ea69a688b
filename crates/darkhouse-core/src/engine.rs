//! The night engine: owns the graph, the clock, the stalker, the audio
//! feed, and the seeded RNG, and drives one tick per frame.

use darkhouse_logic::house::{HouseGraph, RoomId};
use darkhouse_logic::sight;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, NightConfig};
use crate::stalker::{Stalker, CATCH_SHAKE};
use crate::state::{AudioFeed, PlayerState, SceneBounds, TickReport, Vec2, WorldClock};

/// Drives one night. External collaborators call [`update`](Self::update)
/// once per frame with the current player snapshot and consume the
/// returned [`TickReport`].
pub struct NightEngine {
    graph: HouseGraph,
    clock: WorldClock,
    stalker: Stalker,
    audio: AudioFeed,
    rng: ChaCha8Rng,
    bounds: SceneBounds,
    stalker_start: RoomId,
    player_start: RoomId,
    game_over: bool,
}

impl NightEngine {
    /// Validate the configured layout and spawn the stalker.
    ///
    /// All configuration errors surface here; a constructed engine never
    /// returns an error again.
    pub fn new(config: &NightConfig) -> Result<Self, ConfigError> {
        config.validate_bounds()?;
        let graph = config.house.build_graph()?;
        let stalker_start = graph.id_of(&config.stalker_start).map_err(ConfigError::Layout)?;
        let player_start = graph.id_of(&config.player_start).map_err(ConfigError::Layout)?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let stalker = Stalker::spawn(stalker_start, &config.bounds, &mut rng);

        Ok(Self {
            graph,
            clock: WorldClock::new(),
            stalker,
            audio: AudioFeed::new(),
            rng,
            bounds: config.bounds,
            stalker_start,
            player_start,
            game_over: false,
        })
    }

    /// Run one tick: advance the clock, update the stalker, derive screen
    /// tension from the resulting state.
    ///
    /// Once the night has ended in a catch, ticks return a terminal report
    /// and mutate nothing until [`restart`](Self::restart).
    pub fn update(&mut self, player: &PlayerState, delta_ms: f32) -> TickReport {
        if self.game_over {
            return TickReport {
                heartbeat: self.audio.heartbeat(),
                game_over: true,
                ..TickReport::default()
            };
        }

        self.clock.advance(delta_ms);
        let caught = self.stalker.update(
            player,
            self.clock.elapsed(),
            delta_ms,
            &self.graph,
            &self.bounds,
            &mut self.rng,
            &mut self.audio,
        );

        let mut shake = 0.0;
        let mut vignette = 0.0;
        if caught {
            self.game_over = true;
            shake = CATCH_SHAKE;
            tracing::info!(
                room = self.graph.name_of(self.stalker.room()).unwrap_or("?"),
                "the stalker caught the player"
            );
        } else if self.stalker.room() == player.room {
            // the render layer only reacts to a threat it can show
            let seen = player.lights_on
                || sight::in_flashlight_cone(
                    player.position.x,
                    player.position.y,
                    player.flashlight_angle,
                    self.stalker.position().x,
                    self.stalker.position().y,
                );
            if seen {
                let tension = sight::tension_from_distance(
                    self.stalker.position().distance(&player.position),
                );
                shake = tension.shake;
                vignette = tension.vignette;
            }
        }

        TickReport {
            cues: self.audio.drain(),
            heartbeat: self.audio.heartbeat(),
            shake,
            vignette,
            game_over: self.game_over,
        }
    }

    /// Reset the night in one transition: clock, stalker, audio feed, and
    /// the game-over flag reinitialize together; no tick can observe a
    /// partial reset.
    pub fn restart(&mut self) {
        self.clock = WorldClock::new();
        self.audio = AudioFeed::new();
        self.stalker = Stalker::spawn(self.stalker_start, &self.bounds, &mut self.rng);
        self.game_over = false;
        tracing::info!("night restarted");
    }

    pub fn graph(&self) -> &HouseGraph {
        &self.graph
    }

    pub fn stalker_room(&self) -> RoomId {
        self.stalker.room()
    }

    /// Only meaningful while the stalker shares the player's room.
    pub fn stalker_position(&self) -> Vec2 {
        self.stalker.position()
    }

    pub fn is_hunting(&self) -> bool {
        self.stalker.is_hunting()
    }

    pub fn last_known_player_room(&self) -> Option<RoomId> {
        self.stalker.last_known_player_room()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Minutes since midnight on the in-game clock.
    pub fn clock_minutes(&self) -> u32 {
        self.clock.elapsed()
    }

    /// HUD clock readout, e.g. "3:05 AM".
    pub fn clock_face(&self) -> String {
        self.clock.clock_face()
    }

    pub fn player_start_room(&self) -> RoomId {
        self.player_start
    }
}
