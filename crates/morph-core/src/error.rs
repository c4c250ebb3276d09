//! Error types for morph-core
//!
//! Provides error handling for:
//! - Configuration validation (fails fast, before any iteration runs)
//! - Point-set mutation outside the allowed bounds

use thiserror::Error;

use crate::types::{Bounds, Point};

/// Main error type for morph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphError {
    /// Invalid parameters or inputs
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A mutation would leave the allowed rectangle.
    ///
    /// Perturbation clamps its candidates, so this never reaches callers of
    /// [`morph`](crate::morph::morph); it exists for direct [`crate::PointSet::apply`] use.
    #[error("Point {index} at {point} is outside {bounds}")]
    OutOfBounds {
        index: usize,
        point: Point,
        bounds: Bounds,
    },

    /// Index past the end of the point set
    #[error("Point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while validating a run before it starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("iterations must be at least 1")]
    ZeroIterations,

    #[error("num_frames must be at least 2, got {num_frames}")]
    TooFewFrames { num_frames: usize },

    #[error("decimals must be at most {max}, got {decimals}")]
    DecimalsTooLarge { decimals: u32, max: u32 },

    #[error("starting dataset has no points")]
    EmptyDataset,

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("point {index} at {point} lies outside {bounds}")]
    PointOutsideBounds {
        index: usize,
        point: Point,
        bounds: Bounds,
    },

    #[error("invalid bounds: {message}")]
    InvalidBounds { message: String },

    #[error("invalid anneal schedule: {message}")]
    InvalidSchedule { message: String },

    #[error("unknown target shape '{name}'; valid options are {}", available.join(", "))]
    UnknownShape {
        name: String,
        available: Vec<String>,
    },
}

/// Result type alias for morph operations
pub type MorphResult<T> = Result<T, MorphError>;
