//! Regular polygon geometry for the rotating arena
//!
//! The arena is a regular N-gon described once at the origin (the base shape)
//! and re-derived every frame by rotating the base about the origin and moving
//! it onto the pivot. Vertices are listed in increasing angle order starting at
//! π/4. With the y axis pointing down (screen space) that order runs clockwise,
//! which is what makes `(dy, -dx)` an outward normal.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::POLYGON_PHASE;
use crate::error::SimError;
use crate::polar_to_cartesian;

/// Rotational direction of a vertex list, as seen on a y-down screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Clockwise on screen, counter-clockwise with the y axis up
    ScreenClockwise,
    /// Counter-clockwise on screen, clockwise with the y axis up
    ScreenCounterClockwise,
}

impl Winding {
    /// Classify a vertex list by the sign of its shoelace area.
    ///
    /// Returns `None` for fewer than 3 vertices or a zero/non-finite area.
    pub fn of(vertices: &[Vec2]) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let twice_area: f32 = edges(vertices).map(|(_, a, b)| a.perp_dot(b)).sum();
        if !twice_area.is_finite() || twice_area == 0.0 {
            None
        } else if twice_area > 0.0 {
            Some(Winding::ScreenClockwise)
        } else {
            Some(Winding::ScreenCounterClockwise)
        }
    }

    /// Unit normal of the edge `p1 -> p2` pointing out of a polygon wound this way.
    ///
    /// `p1` and `p2` must be relative to the polygon centre. Returns
    /// `SimError::ZeroLengthEdge` when the edge has no direction.
    pub fn outward_normal(self, p1: Vec2, p2: Vec2) -> Result<Vec2, SimError> {
        let edge = p2 - p1;
        let normal = match self {
            Winding::ScreenClockwise => Vec2::new(edge.y, -edge.x),
            Winding::ScreenCounterClockwise => Vec2::new(-edge.y, edge.x),
        };
        normal.try_normalize().ok_or(SimError::ZeroLengthEdge)
    }
}

/// Outward normal `(dy, -dx)` normalized, for centre-relative vertices.
///
/// Precondition: the vertices come from a `Winding::ScreenClockwise` list, the
/// order produced by `generate_base_polygon`. For the opposite order this
/// returns the *inward* normal and collision response pushes the ball the wrong
/// way, so other windings must go through `Winding::outward_normal`.
#[inline]
pub fn outward_normal(p1: Vec2, p2: Vec2) -> Result<Vec2, SimError> {
    Winding::ScreenClockwise.outward_normal(p1, p2)
}

/// Outward normal of edge `index` of a screen-clockwise polygon centred at `centre`
pub fn edge_normal(vertices: &[Vec2], centre: Vec2, index: usize) -> Result<Vec2, SimError> {
    let n = vertices.len();
    if n < 3 {
        return Err(SimError::TooFewVertices(n));
    }
    let p1 = vertices[index % n] - centre;
    let p2 = vertices[(index + 1) % n] - centre;
    outward_normal(p1, p2).map_err(|_| SimError::DegenerateEdge { index: index % n })
}

/// Iterate edges as `(index, start, end)`, wrapping the last vertex to the first
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (usize, Vec2, Vec2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (i, vertices[i], vertices[(i + 1) % n]))
}

/// Vertices of a regular polygon centred at the origin.
///
/// Vertex `i` sits at angle `π/4 + i·2π/vertex_count` on a circle of `radius`.
pub fn generate_base_polygon(radius: f32, vertex_count: usize) -> Result<Vec<Vec2>, SimError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(SimError::InvalidRadius(radius));
    }
    if vertex_count < 3 {
        return Err(SimError::TooFewVertices(vertex_count));
    }

    let step = TAU / vertex_count as f32;
    Ok((0..vertex_count)
        .map(|i| polar_to_cartesian(radius, POLYGON_PHASE + i as f32 * step))
        .collect())
}

/// Rotate every vertex about the origin by `angle`, then move it onto `pivot`
pub fn rotate_and_translate(base: &[Vec2], angle: f32, pivot: Vec2) -> Vec<Vec2> {
    let (sin_a, cos_a) = angle.sin_cos();
    base.iter()
        .map(|v| pivot + Vec2::new(v.x * cos_a - v.y * sin_a, v.x * sin_a + v.y * cos_a))
        .collect()
}

/// Inscribed radius of a regular polygon with circumradius `radius`
#[inline]
pub fn apothem(radius: f32, vertex_count: usize) -> f32 {
    radius * (std::f32::consts::PI / vertex_count as f32).cos()
}

/// A validated regular polygon spinning about a fixed pivot
#[derive(Debug, Clone)]
pub struct RegularPolygon {
    /// Circumradius (pivot to any vertex)
    radius: f32,
    /// World-space centre of rotation
    pivot: Vec2,
    /// Vertices at angle 0, centred at the origin
    base: Vec<Vec2>,
}

impl RegularPolygon {
    pub fn new(radius: f32, vertex_count: usize, pivot: Vec2) -> Result<Self, SimError> {
        if !pivot.is_finite() {
            let value = if pivot.x.is_finite() { pivot.y } else { pivot.x };
            return Err(SimError::NonFinite { name: "pivot", value });
        }

        let base = generate_base_polygon(radius, vertex_count)?;

        debug_assert_eq!(Winding::of(&base), Some(Winding::ScreenClockwise));

        Ok(Self {
            radius,
            pivot,
            base,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.base.len()
    }

    /// Base vertices (angle 0, centred at the origin)
    pub fn base_vertices(&self) -> &[Vec2] {
        &self.base
    }

    /// Distance from the pivot to the middle of any edge
    pub fn apothem(&self) -> f32 {
        apothem(self.radius, self.vertex_count())
    }

    /// World-space vertices for the given rotation angle
    pub fn world_vertices(&self, angle: f32) -> Vec<Vec2> {
        rotate_and_translate(&self.base, angle, self.pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_octagon_first_vertex_at_45_degrees() {
        let base = generate_base_polygon(300.0, 8).unwrap();
        assert_eq!(base.len(), 8);
        let expected = 300.0 * (PI / 4.0).cos();
        assert_relative_eq!(base[0].x, expected, epsilon = 1e-3);
        assert_relative_eq!(base[0].y, expected, epsilon = 1e-3);
        // Next vertex straight down on screen (positive y)
        assert_relative_eq!(base[1].x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(base[1].y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_parameters_rejected() {
        assert_eq!(
            generate_base_polygon(0.0, 8).unwrap_err(),
            SimError::InvalidRadius(0.0)
        );
        assert_eq!(
            generate_base_polygon(-5.0, 8).unwrap_err(),
            SimError::InvalidRadius(-5.0)
        );
        assert!(matches!(
            generate_base_polygon(f32::NAN, 8),
            Err(SimError::InvalidRadius(_))
        ));
        assert_eq!(
            generate_base_polygon(10.0, 2).unwrap_err(),
            SimError::TooFewVertices(2)
        );
        assert!(RegularPolygon::new(10.0, 8, Vec2::new(f32::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_constructed_polygons_are_screen_clockwise() {
        for n in [3, 4, 8, 17, 360] {
            let polygon = RegularPolygon::new(50.0, n, Vec2::new(-3.0, 7.0)).unwrap();
            assert_eq!(
                Winding::of(&polygon.world_vertices(1.0)),
                Some(Winding::ScreenClockwise)
            );
        }
    }

    #[test]
    fn test_zero_length_edge_fails() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(outward_normal(p, p).unwrap_err(), SimError::ZeroLengthEdge);

        let vertices = [
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(
            edge_normal(&vertices, Vec2::ZERO, 0).unwrap_err(),
            SimError::DegenerateEdge { index: 0 }
        );
    }

    #[test]
    fn test_octagon_normals_point_outward() {
        let polygon = RegularPolygon::new(300.0, 8, Vec2::new(400.0, 400.0)).unwrap();
        for angle in [0.0, 0.3, 1.7, -2.9] {
            let world = polygon.world_vertices(angle);
            let centre = polygon.pivot();
            for (i, p1, p2) in edges(&world) {
                let normal = edge_normal(&world, centre, i).unwrap();
                assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-5);
                let midpoint = (p1 + p2) * 0.5 - centre;
                // Midpoint-to-centre vector points against the outward normal
                assert!(normal.dot(-midpoint) < 0.0, "edge {i} normal points inward");
            }
        }
    }

    #[test]
    fn test_reversed_winding_inverts_normal() {
        let mut base = generate_base_polygon(100.0, 8).unwrap();
        assert_eq!(Winding::of(&base), Some(Winding::ScreenClockwise));
        base.reverse();
        assert_eq!(Winding::of(&base), Some(Winding::ScreenCounterClockwise));

        // The fixed (dy, -dx) formula is wrong for this order...
        let naive = outward_normal(base[0], base[1]).unwrap();
        let midpoint = (base[0] + base[1]) * 0.5;
        assert!(naive.dot(midpoint) < 0.0);
        // ...and the winding-aware one is right
        let aware = Winding::ScreenCounterClockwise
            .outward_normal(base[0], base[1])
            .unwrap();
        assert!(aware.dot(midpoint) > 0.0);
    }

    #[test]
    fn test_apothem() {
        let polygon = RegularPolygon::new(300.0, 8, Vec2::ZERO).unwrap();
        assert_relative_eq!(polygon.apothem(), 300.0 * (PI / 8.0).cos(), epsilon = 1e-3);
        let square = RegularPolygon::new(2.0_f32.sqrt(), 4, Vec2::ZERO).unwrap();
        assert_relative_eq!(square.apothem(), 1.0, epsilon = 1e-5);
        assert_eq!(apothem(300.0, 8), polygon.apothem());
    }

    #[test]
    fn test_world_vertices_at_zero_angle_are_translated_base() {
        let pivot = Vec2::new(400.0, 400.0);
        let polygon = RegularPolygon::new(300.0, 8, pivot).unwrap();
        let world = polygon.world_vertices(0.0);
        for (w, b) in world.iter().zip(polygon.base_vertices()) {
            assert_relative_eq!(w.x, b.x + pivot.x, epsilon = 1e-3);
            assert_relative_eq!(w.y, b.y + pivot.y, epsilon = 1e-3);
        }
    }

    proptest! {
        #[test]
        fn prop_base_polygon_on_circle_evenly_spaced(
            radius in 0.5f32..1000.0,
            n in 3usize..64,
        ) {
            let base = generate_base_polygon(radius, n).unwrap();
            prop_assert_eq!(base.len(), n);
            let step = TAU / n as f32;
            for (i, v) in base.iter().enumerate() {
                prop_assert!((v.length() - radius).abs() <= radius * 1e-4);
                let next = base[(i + 1) % n];
                // Angle between consecutive vertices, measured in increasing order
                let delta = v.angle_to(next);
                prop_assert!((delta - step).abs() < 1e-3, "delta {} step {}", delta, step);
            }
        }

        #[test]
        fn prop_rotation_is_rigid(
            angle in -50.0f32..50.0,
            px in -1000.0f32..1000.0,
            py in -1000.0f32..1000.0,
            n in 3usize..16,
        ) {
            let base = generate_base_polygon(300.0, n).unwrap();
            let world = rotate_and_translate(&base, angle, Vec2::new(px, py));
            prop_assert_eq!(world.len(), base.len());
            for i in 0..n {
                for j in 0..n {
                    let before = base[i].distance(base[j]);
                    let after = world[i].distance(world[j]);
                    prop_assert!((before - after).abs() < 1e-2, "{} vs {}", before, after);
                }
            }
            prop_assert_eq!(Winding::of(&world), Some(Winding::ScreenClockwise));
        }

        #[test]
        fn prop_normals_outward_for_any_angle(angle in -10.0f32..10.0, n in 3usize..24) {
            let polygon = RegularPolygon::new(250.0, n, Vec2::new(10.0, -20.0)).unwrap();
            let world = polygon.world_vertices(angle);
            for (i, p1, p2) in edges(&world) {
                let normal = edge_normal(&world, polygon.pivot(), i).unwrap();
                let midpoint = (p1 + p2) * 0.5 - polygon.pivot();
                prop_assert!(normal.dot(midpoint) > 0.0);
            }
        }
    }
}
