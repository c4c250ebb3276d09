//! Shapes defined by collections of segments or reference points

use super::{Segment, TargetShape};
use crate::types::Point;

/// A figure drawn with straight segments: parallel lines, an X, outlines of
/// polygons such as rectangles, diamonds and stars.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCollection {
    name: String,
    segments: Vec<Segment>,
}

impl LineCollection {
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }

    /// Connect consecutive vertices; `closed` also joins the last back to the first
    pub fn polyline(name: impl Into<String>, vertices: &[Point], closed: bool) -> Self {
        let mut segments: Vec<Segment> = vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        if closed && vertices.len() > 2 {
            segments.push(Segment::new(vertices[vertices.len() - 1], vertices[0]));
        }
        Self::new(name, segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl TargetShape for LineCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn distance(&self, point: Point) -> f64 {
        self.segments
            .iter()
            .map(|s| s.distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Attraction to the nearest of a fixed set of reference points
#[derive(Debug, Clone, PartialEq)]
pub struct PointCollection {
    name: String,
    points: Vec<Point>,
}

impl PointCollection {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl TargetShape for PointCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn distance(&self, point: Point) -> f64 {
        self.points
            .iter()
            .map(|&p| p.distance_squared(point))
            .fold(f64::INFINITY, f64::min)
            .sqrt()
    }
}

/// The curve `y = a (x - h)^2 + k` over a finite x range.
///
/// Distance is measured to a dense polyline through the curve, which keeps it
/// continuous without solving the cubic for the exact foot point.
#[derive(Debug, Clone, PartialEq)]
pub struct Parabola {
    curve: LineCollection,
}

impl Parabola {
    /// Number of segments the curve is sampled with
    pub const SAMPLES: usize = 256;

    pub fn new(name: impl Into<String>, a: f64, vertex: Point, x_range: (f64, f64)) -> Self {
        let (x0, x1) = x_range;
        let vertices: Vec<Point> = (0..=Self::SAMPLES)
            .map(|i| {
                let x = x0 + (x1 - x0) * i as f64 / Self::SAMPLES as f64;
                Point::new(x, a * (x - vertex.x).powi(2) + vertex.y)
            })
            .collect();
        Self {
            curve: LineCollection::polyline(name, &vertices, false),
        }
    }
}

impl TargetShape for Parabola {
    fn name(&self) -> &str {
        self.curve.name()
    }

    fn distance(&self, point: Point) -> f64 {
        self.curve.distance(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_collection_nearest_segment() {
        let lines = LineCollection::new(
            "h_lines",
            vec![
                Segment::new(Point::new(0.0, 10.0), Point::new(100.0, 10.0)),
                Segment::new(Point::new(0.0, 30.0), Point::new(100.0, 30.0)),
            ],
        );
        assert_eq!(lines.distance(Point::new(50.0, 18.0)), 8.0);
        assert_eq!(lines.distance(Point::new(50.0, 25.0)), 5.0);
        assert_eq!(lines.name(), "h_lines");
    }

    #[test]
    fn test_closed_polyline() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let open = LineCollection::polyline("open", &square, false);
        let closed = LineCollection::polyline("closed", &square, true);
        assert_eq!(open.segments().len(), 3);
        assert_eq!(closed.segments().len(), 4);
        assert_eq!(closed.distance(Point::new(0.0, 0.5)), 0.0);
        assert!(open.distance(Point::new(0.0, 0.5)) > 0.0);
    }

    #[test]
    fn test_point_collection() {
        let dots = PointCollection::new("dots", vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(dots.distance(Point::new(10.0, 0.0)), 0.0);
        assert_eq!(dots.distance(Point::new(7.0, 4.0)), 5.0);
    }

    #[test]
    fn test_parabola_on_and_off_curve() {
        let p = Parabola::new("up_parab", 0.1, Point::new(50.0, 20.0), (10.0, 90.0));
        assert!(p.distance(Point::new(50.0, 20.0)) < 1e-9);
        // y = 0.1 * 20^2 + 20 = 60
        assert!(p.distance(Point::new(70.0, 60.0)) < 1e-2);
        assert!(p.distance(Point::new(50.0, 30.0)) > 5.0);
        assert_eq!(p.name(), "up_parab");
    }
}
