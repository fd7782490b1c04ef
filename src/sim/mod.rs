//! Simulation core
//!
//! Pure frame-by-frame physics with no rendering or platform dependencies:
//! - Time comes in as `dt`, nothing here reads a clock
//! - Edges are always visited in vertex order
//! - All state lives in `Simulation`

pub mod collision;
pub mod polygon;
pub mod state;
pub mod tick;

pub use collision::{
    Contact, Resolution, integrate, max_edge_distance, reflect_velocity, resolve_collisions,
    signed_distance,
};
pub use polygon::{
    RegularPolygon, Winding, edge_normal, edges, generate_base_polygon, outward_normal,
    rotate_and_translate,
};
pub use state::{Ball, FrameSnapshot, Simulation};
pub use tick::{FrameReport, tick};
