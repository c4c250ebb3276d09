//! Target shapes a dataset can be morphed into.
//!
//! Every shape is a stateless distance oracle: [`TargetShape::distance`]
//! returns how far a point is from lying on the shape, zero when it already
//! does. The annealer only ever talks to shapes through this trait.
//!
//! # Key Components
//!
//! - [`TargetShape`]: The trait all shapes implement
//! - [`Circle`], [`Bullseye`]: Circular outlines
//! - [`LineCollection`]: Any figure made of straight segments (lines, X, star, ...)
//! - [`PointCollection`]: Attraction to a fixed set of reference points
//! - [`Parabola`]: A sampled implicit curve
//! - [`ShapeFactory`]: Builds named shapes sized to a starting dataset

pub mod collections;
pub mod factory;
pub mod primitives;

pub use collections::{LineCollection, Parabola, PointCollection};
pub use factory::ShapeFactory;
pub use primitives::{Bullseye, Circle};

use std::fmt;

use crate::types::Point;

/// The core trait all target shapes implement.
///
/// Implementations must be pure and deterministic, never return a negative
/// value, and change continuously as the point moves so local search can
/// make steady progress.
pub trait TargetShape: Send + Sync + fmt::Debug {
    /// Short identifier, e.g. `"circle"`
    fn name(&self) -> &str;

    /// Distance from `point` to the shape
    fn distance(&self, point: Point) -> f64;

    /// Average distance of `points` to the shape (0 for an empty slice)
    fn mean_distance(&self, points: &[Point]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        points.iter().map(|&p| self.distance(p)).sum::<f64>() / points.len() as f64
    }
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Shortest distance from `p` to any point of the segment
    pub fn distance_to(&self, p: Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return p.distance(self.start);
        }

        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        p.distance(Point::new(self.start.x + t * dx, self.start.y + t * dy))
    }
}
