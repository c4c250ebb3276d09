//! morph-stats - Summary statistics for statistics-preserving morphs
//!
//! This crate provides the numerical primitives every morph run is judged by:
//!
//! - **SummaryStats**: count, mean, population variance/std, min, max
//! - **XyStats**: the four statistics a morph must preserve (mean and std of x and y)
//! - **Rounding**: the single half-to-even rounding rule used for every comparison
//!
//! # Design Philosophy
//!
//! Baseline capture and live comparison must agree to the last requested
//! decimal. Both sides therefore go through [`round_half_even`] and the
//! population (not sample) standard deviation, with no other code path.

pub mod rounding;
pub mod summary;
pub mod xy;

pub use rounding::*;
pub use summary::*;
pub use xy::*;
