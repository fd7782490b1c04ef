//! Ball motion and collision response against the polygon walls
//!
//! Every edge of the polygon is an infinite wall line with an outward normal.
//! A ball is in contact with an edge when its centre is closer than one radius
//! to the outside of that line. Contacts are resolved one edge at a time, in
//! vertex order, by pushing the ball back to tangency and reflecting its
//! velocity. Near a corner two walls can both fire in the same frame; the
//! second one sees the position and velocity the first one left behind.

use glam::Vec2;

use super::polygon::{edge_normal, edges};
use crate::error::SimError;

/// A wall contact that fired during resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Edge index (edge `i` runs from vertex `i` to vertex `i + 1`, wrapping)
    pub edge: usize,
    /// Outward unit normal of the edge
    pub normal: Vec2,
    /// How far the ball overlapped the edge when it was checked (`dist + radius`)
    pub depth: f32,
}

/// Ball state after all edges have been processed
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Contacts in the order they were resolved
    pub contacts: Vec<Contact>,
}

impl Resolution {
    #[inline]
    pub fn hit(&self) -> bool {
        !self.contacts.is_empty()
    }
}

/// Explicit Euler step
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Signed distance from `point` to the line through `p1` with unit `normal`.
/// Positive on the outward side.
#[inline]
pub fn signed_distance(point: Vec2, p1: Vec2, normal: Vec2) -> f32 {
    normal.dot(point - p1)
}

/// Push the ball out of every edge it touches and reflect its velocity.
///
/// `vertices` must be screen-clockwise (see [`super::polygon::outward_normal`])
/// and `centre` is the point they were rotated about. Any overlap fires a
/// contact; a ball exactly tangent to a wall does not.
pub fn resolve_collisions(
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_radius: f32,
    vertices: &[Vec2],
    centre: Vec2,
) -> Result<Resolution, SimError> {
    if vertices.len() < 3 {
        return Err(SimError::TooFewVertices(vertices.len()));
    }

    let mut pos = ball_pos;
    let mut vel = ball_vel;
    let mut contacts = Vec::new();

    for (i, p1, _) in edges(vertices) {
        let normal = edge_normal(vertices, centre, i)?;
        let dist = signed_distance(pos, p1, normal);

        if dist > -ball_radius {
            let depth = dist + ball_radius;
            // Back to exact tangency with this edge
            pos -= depth * normal;
            vel = reflect_velocity(vel, normal);

            log::debug!("edge {i} contact, depth {depth:.3}");
            contacts.push(Contact {
                edge: i,
                normal,
                depth,
            });
        }
    }

    Ok(Resolution { pos, vel, contacts })
}

/// Largest signed distance from `point` to any edge line (negative when inside)
pub fn max_edge_distance(point: Vec2, vertices: &[Vec2], centre: Vec2) -> Result<f32, SimError> {
    if vertices.len() < 3 {
        return Err(SimError::TooFewVertices(vertices.len()));
    }

    let mut max = f32::NEG_INFINITY;
    for (i, p1, _) in edges(vertices) {
        let normal = edge_normal(vertices, centre, i)?;
        max = max.max(signed_distance(point, p1, normal));
    }
    Ok(max)
}
