//! morph-io - Data I/O for data morph
//!
//! This crate moves data in and out of a morph run:
//!
//! - **Datasets**: named presets or CSV files with `x`/`y` columns
//! - **Fitting**: aspect-preserving rescale into a common range
//! - **Frames**: one CSV per exported frame
//! - **Summary**: a JSON record of the configuration and run report
//!
//! # Design
//!
//! Loading and writing are free functions over `morph-core` types; nothing
//! here knows about annealing.

pub mod csv_reader;
pub mod presets;
pub mod reader;
pub mod writer;

pub use csv_reader::{read_points, read_points_from};
pub use presets::Preset;
pub use reader::*;
pub use writer::*;
