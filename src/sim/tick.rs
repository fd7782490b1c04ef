//! Per-frame simulation update
//!
//! One frame, in order: spin the polygon, rebuild its outline, move the ball,
//! then resolve wall contacts edge by edge.

use super::collision::{Contact, integrate, resolve_collisions};
use super::state::Simulation;
use crate::consts::CONTACT_EPSILON;
use crate::error::SimError;
use crate::normalize_angle;

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Frame number after this update (first frame is 1)
    pub frame: u64,
    /// Wall contacts resolved this frame, in edge order
    pub contacts: Vec<Contact>,
    /// Overlap left with the worst wall after resolution (`<= 0` when contained)
    pub residual_overlap: f32,
}

impl FrameReport {
    /// Ball centre ended up outside the polygon
    pub fn escaped(&self, ball_radius: f32) -> bool {
        self.residual_overlap > ball_radius
    }
}

/// Advance the simulation by `dt` seconds.
///
/// A negative or non-finite `dt` is treated as zero. There is no sub-stepping,
/// so a very large `dt` can carry the ball through a wall; that shows up as a
/// positive `residual_overlap` and a warning rather than an error.
pub fn tick(sim: &mut Simulation, dt: f32) -> Result<FrameReport, SimError> {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame time {dt}, using 0");
        0.0
    };

    let angle = sim.angle + sim.angular_speed * dt;
    if angle.is_finite() {
        sim.angle = normalize_angle(angle);
    } else {
        log::warn!("Rotation step overflowed (speed {}, dt {dt}), keeping angle", sim.angular_speed);
    }
    let vertices = sim.world_vertices();
    let centre = sim.polygon.pivot();

    let ball = &mut sim.ball;
    ball.pos = integrate(ball.pos, ball.vel, dt);

    let resolution = resolve_collisions(ball.pos, ball.vel, ball.radius, &vertices, centre)?;
    ball.pos = resolution.pos;
    ball.vel = resolution.vel;

    sim.frame += 1;
    sim.bounces += resolution.contacts.len() as u64;

    let residual_overlap = sim.max_overlap()?;
    if residual_overlap > sim.ball.radius {
        log::warn!(
            "Frame {}: ball escaped the polygon (overlap {:.2}, dt {:.4})",
            sim.frame,
            residual_overlap,
            dt
        );
    } else if residual_overlap > CONTACT_EPSILON {
        log::debug!(
            "Frame {}: residual overlap {:.4} after corner resolution",
            sim.frame,
            residual_overlap
        );
    }

    Ok(FrameReport {
        frame: sim.frame,
        contacts: resolution.contacts,
        residual_overlap,
    })
}
