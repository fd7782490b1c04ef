//! Simulation state
//!
//! Everything that survives from one frame to the next lives in
//! [`Simulation`]: the polygon's rotation angle and the ball's position and
//! velocity. Nothing is global, so several simulations can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::max_edge_distance;
use super::polygon::RegularPolygon;
use crate::consts::CONTACT_EPSILON;
use crate::error::SimError;
use crate::settings::SimConfig;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Result<Self, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidBallRadius(radius));
        }
        check_finite("ball position", pos)?;
        check_finite("ball velocity", vel)?;
        Ok(Self { pos, vel, radius })
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// What the host shell draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub angle: f32,
    /// World-space outline, in winding order
    pub polygon: Vec<Vec2>,
    pub ball_center: Vec2,
    pub ball_radius: f32,
}

/// A ball inside a spinning polygon
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) polygon: RegularPolygon,
    pub(crate) ball: Ball,
    /// Current rotation (radians, normalized to [-π, π))
    pub(crate) angle: f32,
    /// Radians per second
    pub(crate) angular_speed: f32,
    /// Frames advanced so far
    pub(crate) frame: u64,
    /// Wall contacts resolved so far
    pub(crate) bounces: u64,
}

impl Simulation {
    /// Build the arena described by `config` with the ball at its start position.
    ///
    /// Fails if the config is invalid or the ball would start overlapping a wall.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let polygon = RegularPolygon::new(
            config.polygon_radius,
            config.vertex_count,
            config.centre(),
        )?;
        let ball = Ball::new(
            config.centre() + config.ball_offset,
            config.initial_velocity(),
            config.ball_radius,
        )?;
        let sim = Self::from_parts(polygon, ball, config.angular_speed())?;

        let overlap = sim.max_overlap()?;
        if overlap > CONTACT_EPSILON {
            return Err(SimError::BallOutsideArena {
                x: sim.ball.pos.x,
                y: sim.ball.pos.y,
                overlap,
            });
        }

        log::info!(
            "Simulation ready: {}-gon r={} at ({}, {}), ball r={} speed={:.1}",
            sim.polygon.vertex_count(),
            sim.polygon.radius(),
            sim.polygon.pivot().x,
            sim.polygon.pivot().y,
            sim.ball.radius,
            sim.ball.speed()
        );
        Ok(sim)
    }

    /// Assemble a simulation from prebuilt parts at angle 0.
    ///
    /// The ball only has to be small enough to fit; it may start overlapping a
    /// wall and will be pushed out on the first frame.
    pub fn from_parts(
        polygon: RegularPolygon,
        ball: Ball,
        angular_speed: f32,
    ) -> Result<Self, SimError> {
        if !angular_speed.is_finite() {
            return Err(SimError::NonFinite {
                name: "angular speed",
                value: angular_speed,
            });
        }
        let apothem = polygon.apothem();
        if ball.radius >= apothem {
            return Err(SimError::BallDoesNotFit {
                ball_radius: ball.radius,
                apothem,
            });
        }

        Ok(Self {
            polygon,
            ball,
            angle: 0.0,
            angular_speed,
            frame: 0,
            bounces: 0,
        })
    }

    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    #[inline]
    pub fn polygon(&self) -> &RegularPolygon {
        &self.polygon
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn bounces(&self) -> u64 {
        self.bounces
    }

    /// Polygon outline at the current angle
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.polygon.world_vertices(self.angle)
    }

    /// How far the ball reaches past the worst wall (`<= 0` when fully inside)
    pub fn max_overlap(&self) -> Result<f32, SimError> {
        let dist = max_edge_distance(self.ball.pos, &self.world_vertices(), self.polygon.pivot())?;
        Ok(dist + self.ball.radius)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            angle: self.angle,
            polygon: self.world_vertices(),
            ball_center: self.ball.pos,
            ball_radius: self.ball.radius,
        }
    }
}

fn check_finite(name: &'static str, v: Vec2) -> Result<(), SimError> {
    if v.is_finite() {
        Ok(())
    } else {
        let value = if v.x.is_finite() { v.y } else { v.x };
        Err(SimError::NonFinite { name, value })
    }
}
