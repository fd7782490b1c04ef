//! Error types
//!
//! Everything here is raised while building a simulation or loading its
//! configuration. A validated simulation does not fail mid-frame.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid geometry or simulation parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("polygon radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("ball radius must be positive and finite, got {0}")]
    InvalidBallRadius(f32),

    #[error("ball radius {ball_radius} does not fit inside a polygon with apothem {apothem}")]
    BallDoesNotFit { ball_radius: f32, apothem: f32 },

    #[error("ball at ({x}, {y}) does not start fully inside the polygon (overlap {overlap})")]
    BallOutsideArena { x: f32, y: f32, overlap: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("edge has zero length, its normal is undefined")]
    ZeroLengthEdge,

    #[error("edge {index} has zero length or non-finite vertices, its normal is undefined")]
    DegenerateEdge { index: usize },

    #[error("frame rate must be at least 1, got {0}")]
    InvalidFrameRate(u32),
}

/// Failure to load a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] SimError),
}
