//! Geometric value types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// A 2D data point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from(arr: [f64; 2]) -> Self {
        Self { x: arr[0], y: arr[1] }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle every point of a morph must stay inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create bounds, rejecting non-finite or inverted limits
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ConfigError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::InvalidBounds {
                message: "limits must be finite".to_string(),
            });
        }
        if x_min > x_max || y_min > y_max {
            return Err(ConfigError::InvalidBounds {
                message: format!("inverted limits [{x_min}, {x_max}] x [{y_min}, {y_max}]"),
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Same range on both axes; the two limits may be given in either order
    pub fn square(a: f64, b: f64) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self {
            x_min: lo,
            x_max: hi,
            y_min: lo,
            y_max: hi,
        }
    }

    /// Tightest bounds containing every point, or `None` for an empty slice
    pub fn around(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(points.iter().fold(init, |b, p| Self {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        }))
    }

    /// Grow every side by `margin`
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x_min: self.x_min - margin,
            x_max: self.x_max + margin,
            y_min: self.y_min - margin,
            y_max: self.y_max + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Point at fractional position `(fx, fy)` of the rectangle
    pub fn lerp(&self, fx: f64, fy: f64) -> Point {
        Point::new(
            self.x_min + fx * self.width(),
            self.y_min + fy * self.height(),
        )
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Nearest point inside the rectangle
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_bounds_rejects_inverted() {
        assert!(Bounds::new(10.0, 0.0, 0.0, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::NAN, 0.0, 1.0).is_err());
        assert!(Bounds::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_bounds_clamp_and_contains() {
        let b = Bounds::square(0.0, 100.0);
        assert!(b.contains(Point::new(0.0, 100.0)));
        assert!(!b.contains(Point::new(-0.1, 50.0)));

        let clamped = b.clamp(Point::new(-5.0, 150.0));
        assert_eq!(clamped, Point::new(0.0, 100.0));
        assert!(b.contains(clamped));
    }

    #[test]
    fn test_bounds_around_and_expand() {
        let pts = vec![Point::new(10.0, 20.0), Point::new(30.0, 5.0)];
        let b = Bounds::around(&pts).unwrap();
        assert_eq!(b, Bounds::new(10.0, 30.0, 5.0, 20.0).unwrap());

        let wide = b.expanded(5.0);
        assert_eq!(wide.x_min, 5.0);
        assert_eq!(wide.y_max, 25.0);
        assert!(Bounds::around(&[]).is_none());
    }

    #[test]
    fn test_square_orders_limits() {
        assert_eq!(Bounds::square(90.0, 10.0), Bounds::square(10.0, 90.0));
        assert_eq!(Bounds::square(10.0, 90.0).center(), Point::new(50.0, 50.0));
    }
}
