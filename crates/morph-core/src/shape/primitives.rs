//! Circular target shapes

use super::TargetShape;
use crate::types::Point;

/// Circle outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }
}

impl TargetShape for Circle {
    fn name(&self) -> &str {
        "circle"
    }

    fn distance(&self, point: Point) -> f64 {
        (point.distance(self.center) - self.radius).abs()
    }
}

/// Two concentric circle outlines; a point is attracted to the nearer ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullseye {
    pub inner: Circle,
    pub outer: Circle,
}

impl Bullseye {
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner: Circle::new(center, inner_radius),
            outer: Circle::new(center, outer_radius),
        }
    }
}

impl TargetShape for Bullseye {
    fn name(&self) -> &str {
        "bullseye"
    }

    fn distance(&self, point: Point) -> f64 {
        self.inner.distance(point).min(self.outer.distance(point))
    }
}
