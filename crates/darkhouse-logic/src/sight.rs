//! Flashlight-cone visibility and proximity tension.
//!
//! Pure geometry shared by the stalker (to tell whether it has been seen)
//! and the render layer (to light the stalker and drive screen effects).

use std::f32::consts::{FRAC_PI_4, PI, TAU};

/// Half-angle of the flashlight cone: 45 degrees, a 90-degree-wide wedge.
pub const CONE_HALF_ANGLE: f32 = FRAC_PI_4;

/// Distance at which proximity tension starts to register.
pub const NEAR_RADIUS: f32 = 200.0;

/// Signed smallest rotation from angle `a` to angle `b`, in [-pi, pi].
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let mut diff = (b - a) % TAU;
    if diff > PI {
        diff -= TAU;
    } else if diff < -PI {
        diff += TAU;
    }
    diff
}

/// Whether `target` falls inside the cone centered on `facing` at the
/// observer's position. Purely angular; callers gate by distance.
pub fn in_flashlight_cone(
    observer_x: f32,
    observer_y: f32,
    facing: f32,
    target_x: f32,
    target_y: f32,
) -> bool {
    let bearing = (target_y - observer_y).atan2(target_x - observer_x);
    angle_difference(facing, bearing).abs() < CONE_HALF_ANGLE
}

/// Screen-effect intensities derived from how close the threat is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tension {
    /// Shake amplitude; callers merge this with their current value via max.
    pub shake: f32,
    /// Vignette opacity in [0, 1].
    pub vignette: f32,
}

/// Tension at the default [`NEAR_RADIUS`].
pub fn tension_from_distance(distance: f32) -> Tension {
    tension_within(distance, NEAR_RADIUS)
}

/// Tension for a custom near radius. Zero at or beyond the radius.
pub fn tension_within(distance: f32, near_radius: f32) -> Tension {
    if distance >= near_radius {
        return Tension::default();
    }
    Tension {
        shake: ((near_radius - distance) / 10.0).max(0.0),
        vignette: ((near_radius - distance) / near_radius).clamp(0.0, 1.0),
    }
}
