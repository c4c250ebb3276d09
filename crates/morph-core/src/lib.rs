//! morph-core - Statistics-preserving shape morphing
//!
//! This crate moves a 2D point cloud toward a target shape by simulated
//! annealing while keeping the mean and standard deviation of both axes
//! equal, to a chosen number of decimals, to those of the starting data.
//!
//! # Key Components
//!
//! - **PointSet**: The mutable dataset with its bounds and frozen baseline statistics
//! - **TargetShape**: Distance oracles for circles, lines, stars, parabolas, ...
//! - **ShapeFactory**: Named shapes sized to a starting dataset
//! - **Annealer**: The perturb / accept / capture loop
//! - **FrameSampler**: Evenly spaced snapshots and forward-then-back assembly
//! - **MorphConfig**: Serializable run configuration
//!
//! # Example
//!
//! ```
//! use morph_core::{morph, Bounds, Circle, Point, PointSet};
//!
//! let start = PointSet::new(
//!     vec![
//!         Point::new(10.0, 10.0),
//!         Point::new(10.0, 90.0),
//!         Point::new(90.0, 10.0),
//!         Point::new(90.0, 90.0),
//!     ],
//!     Bounds::square(0.0, 100.0),
//! )?;
//! let circle = Circle::new(Point::new(50.0, 50.0), 30.0);
//! let frames = morph(&start, &circle, 1_000, 2, 10, Some(42), true)?;
//! assert_eq!(frames.len(), 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod annealer;
pub mod config;
pub mod error;
pub mod frames;
pub mod morph;
pub mod perturb;
pub mod point_set;
pub mod schedule;
pub mod shape;
pub mod types;

pub use annealer::{Annealer, MorphOutcome, MorphReport, StagnationWarning};
pub use config::MorphConfig;
pub use error::*;
pub use frames::{assemble, checkpoint_indices, Frame, FrameSampler};
pub use morph::{morph, morph_each, morph_with_config, seeded_rng};
pub use perturb::{GaussianPerturbation, Proposal};
pub use point_set::PointSet;
pub use schedule::{AnnealSchedule, Easing};
pub use shape::{
    Bullseye, Circle, LineCollection, Parabola, PointCollection, Segment, ShapeFactory,
    TargetShape,
};
pub use types::*;

pub use morph_stats::{SummaryStats, XyStats, MAX_DECIMALS};
