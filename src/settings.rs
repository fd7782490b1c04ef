//! Simulation settings
//!
//! Loaded once at startup from defaults or a JSON file; the frame loop never
//! reads them again.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SimError};
use crate::sim::polygon::apothem;

/// Startup parameters for a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    /// Arena width, the polygon pivots around the arena centre
    pub width: f32,
    /// Arena height
    pub height: f32,
    /// Target frames per second of the host loop
    pub fps: u32,

    // === Polygon ===
    /// Centre to any vertex
    pub polygon_radius: f32,
    pub vertex_count: usize,
    /// Degrees per second (positive turns clockwise on screen)
    pub angular_speed_deg: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Units per second
    pub ball_speed: f32,
    /// Launch direction in degrees from the +x axis
    pub ball_direction_deg: f32,
    /// Start position relative to the arena centre
    pub ball_offset: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            fps: TARGET_FPS,

            polygon_radius: POLYGON_RADIUS,
            vertex_count: POLYGON_VERTICES,
            angular_speed_deg: POLYGON_ANGULAR_SPEED_DEG,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_direction_deg: BALL_DIRECTION_DEG,
            // Halfway from the centre towards the top of the screen
            ball_offset: Vec2::new(0.0, -POLYGON_RADIUS / 2.0),
        }
    }
}

impl SimConfig {
    /// Check every parameter the simulation relies on
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("angular speed", self.angular_speed_deg),
            ("ball speed", self.ball_speed),
            ("ball direction", self.ball_direction_deg),
            ("ball offset x", self.ball_offset.x),
            ("ball offset y", self.ball_offset.y),
        ] {
            if !value.is_finite() {
                return Err(SimError::NonFinite { name, value });
            }
        }
        if self.fps == 0 {
            return Err(SimError::InvalidFrameRate(self.fps));
        }
        if !(self.polygon_radius.is_finite() && self.polygon_radius > 0.0) {
            return Err(SimError::InvalidRadius(self.polygon_radius));
        }
        if self.vertex_count < 3 {
            return Err(SimError::TooFewVertices(self.vertex_count));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(SimError::InvalidBallRadius(self.ball_radius));
        }

        let inner = apothem(self.polygon_radius, self.vertex_count);
        if self.ball_radius >= inner {
            return Err(SimError::BallDoesNotFit {
                ball_radius: self.ball_radius,
                apothem: inner,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pivot of the polygon
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radians per second
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed_deg.to_radians()
    }

    pub fn initial_velocity(&self) -> Vec2 {
        Vec2::from_angle(self.ball_direction_deg.to_radians()) * self.ball_speed
    }

    /// Seconds per frame at the target rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}
