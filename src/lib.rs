//! Octo Bounce - a ball bouncing inside a rotating regular polygon
//!
//! Core modules:
//! - `sim`: Simulation core (polygon geometry, collisions, frame update)
//! - `settings`: Startup configuration (defaults, JSON files)
//! - `clock`: Frame clock used by the headless runner
//! - `error`: Construction and configuration errors

pub mod clock;
pub mod error;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, SimError};
pub use settings::SimConfig;

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Arena (window) dimensions, the polygon pivots around the centre
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    /// Target frame rate of the host loop
    pub const TARGET_FPS: u32 = 60;

    /// Polygon defaults
    pub const POLYGON_RADIUS: f32 = 300.0; // centre to any vertex
    pub const POLYGON_VERTICES: usize = 8;
    /// Degrees per second
    pub const POLYGON_ANGULAR_SPEED_DEG: f32 = 10.0;
    /// Angle of vertex 0 (radians)
    pub const POLYGON_PHASE: f32 = std::f32::consts::FRAC_PI_4;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Units per second
    pub const BALL_SPEED: f32 = 350.0;
    pub const BALL_DIRECTION_DEG: f32 = 37.0;

    /// Slack for float comparisons against edge lines
    pub const CONTACT_EPSILON: f32 = 1e-3;
}

/// Normalized angle to [-π, π)
///
/// Wraps in a single step, so huge angles cost the same as small ones.
/// Non-finite input is returned unchanged.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
