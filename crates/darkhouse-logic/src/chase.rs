//! In-room pursuit math.
//!
//! The stalker closes on the player with straight-line steps; being seen
//! (lit room, or caught in the flashlight cone) makes it faster.

/// Distance at or below which the stalker holds still instead of jittering
/// around the player.
pub const HOLD_DISTANCE: f32 = 10.0;

/// Distance below which a pursuit step makes contact.
pub const CATCH_DISTANCE: f32 = 50.0;

/// Units per tick while engaged, gated on whether the player can see the
/// stalker and whether it has escalated for the late night.
pub fn pursuit_speed(hunting: bool, seen: bool) -> f32 {
    match (hunting, seen) {
        (true, true) => 4.0,
        (true, false) | (false, true) => 3.0,
        (false, false) => 2.0,
    }
}

/// Displacement of `speed` units from `(from_x, from_y)` toward
/// `(to_x, to_y)`. Zero within [`HOLD_DISTANCE`] of the target.
pub fn step_toward(from_x: f32, from_y: f32, to_x: f32, to_y: f32, speed: f32) -> (f32, f32) {
    let dx = to_x - from_x;
    let dy = to_y - from_y;
    let dist = dx.hypot(dy);
    if dist <= HOLD_DISTANCE {
        return (0.0, 0.0);
    }
    (dx / dist * speed, dy / dist * speed)
}
