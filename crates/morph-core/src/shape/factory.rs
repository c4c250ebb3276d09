//! Factory for named target shapes.
//!
//! Shapes are sized to the starting dataset: lines and outlines span the
//! data's extent, circles are centred on its mean with a radius taken from
//! its spread. Building a shape never touches the dataset itself.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{Bullseye, Circle, LineCollection, Parabola, PointCollection, Segment, TargetShape};
use crate::error::{ConfigError, MorphResult};
use crate::point_set::PointSet;
use crate::types::{Bounds, Point};

type Builder = fn(&ShapeFactory) -> Box<dyn TargetShape>;

/// Builds target shapes by name.
///
/// The catalog is fixed at compile time; [`ShapeFactory::available`] lists it
/// in a stable order.
#[derive(Debug, Clone)]
pub struct ShapeFactory {
    extent: Bounds,
    center: Point,
    radius: f64,
}

impl ShapeFactory {
    const BUILDERS: &'static [(&'static str, Builder)] = &[
        ("bullseye", Self::bullseye),
        ("circle", Self::circle),
        ("diamond", Self::diamond),
        ("dots", Self::dots),
        ("down_parab", Self::down_parab),
        ("h_lines", Self::h_lines),
        ("high_lines", Self::high_lines),
        ("rectangle", Self::rectangle),
        ("slant_down", Self::slant_down),
        ("slant_up", Self::slant_up),
        ("star", Self::star),
        ("up_parab", Self::up_parab),
        ("v_lines", Self::v_lines),
        ("wide_lines", Self::wide_lines),
        ("x", Self::x),
    ];

    /// Create a factory sized to `start`
    pub fn new(start: &PointSet) -> Self {
        let stats = start.baseline();
        // PointSet is never empty, so there is always an extent
        let extent = Bounds::around(start.points()).unwrap_or_else(|| start.bounds());
        Self {
            extent,
            center: Point::new(stats.mean_x, stats.mean_y),
            radius: (stats.std_x + stats.std_y) / 2.0,
        }
    }

    /// Names of every shape this factory can build
    pub fn available() -> Vec<&'static str> {
        Self::BUILDERS.iter().map(|(name, _)| *name).collect()
    }

    /// Whether `name` is a known shape
    pub fn is_available(name: &str) -> bool {
        Self::BUILDERS.iter().any(|(n, _)| *n == name)
    }

    /// Build the shape called `name`
    pub fn generate(&self, name: &str) -> MorphResult<Box<dyn TargetShape>> {
        Self::BUILDERS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, build)| build(self))
            .ok_or_else(|| {
                ConfigError::UnknownShape {
                    name: name.to_string(),
                    available: Self::available().into_iter().map(String::from).collect(),
                }
                .into()
            })
    }

    /// Build every known shape
    pub fn generate_all(&self) -> Vec<Box<dyn TargetShape>> {
        Self::BUILDERS.iter().map(|(_, build)| build(self)).collect()
    }

    fn at(&self, fx: f64, fy: f64) -> Point {
        self.extent.lerp(fx, fy)
    }

    fn segment(&self, from: (f64, f64), to: (f64, f64)) -> Segment {
        Segment::new(self.at(from.0, from.1), self.at(to.0, to.1))
    }

    fn circle(&self) -> Box<dyn TargetShape> {
        Box::new(Circle::new(self.center, self.radius))
    }

    fn bullseye(&self) -> Box<dyn TargetShape> {
        Box::new(Bullseye::new(self.center, self.radius / 2.0, self.radius))
    }

    fn dots(&self) -> Box<dyn TargetShape> {
        let steps = [0.05, 0.5, 0.95];
        let points = steps
            .iter()
            .flat_map(|&fx| steps.iter().map(move |&fy| (fx, fy)))
            .map(|(fx, fy)| self.at(fx, fy))
            .collect();
        Box::new(PointCollection::new("dots", points))
    }

    fn h_lines(&self) -> Box<dyn TargetShape> {
        let segments = [0.1, 0.3, 0.5, 0.7, 0.9]
            .iter()
            .map(|&fy| self.segment((0.0, fy), (1.0, fy)))
            .collect();
        Box::new(LineCollection::new("h_lines", segments))
    }

    fn v_lines(&self) -> Box<dyn TargetShape> {
        let segments = [0.1, 0.3, 0.5, 0.7, 0.9]
            .iter()
            .map(|&fx| self.segment((fx, 0.0), (fx, 1.0)))
            .collect();
        Box::new(LineCollection::new("v_lines", segments))
    }

    fn wide_lines(&self) -> Box<dyn TargetShape> {
        let segments = vec![
            self.segment((0.25, 0.0), (0.25, 1.0)),
            self.segment((0.75, 0.0), (0.75, 1.0)),
        ];
        Box::new(LineCollection::new("wide_lines", segments))
    }

    fn high_lines(&self) -> Box<dyn TargetShape> {
        let segments = vec![
            self.segment((0.0, 0.25), (1.0, 0.25)),
            self.segment((0.0, 0.75), (1.0, 0.75)),
        ];
        Box::new(LineCollection::new("high_lines", segments))
    }

    fn slant_up(&self) -> Box<dyn TargetShape> {
        let segments = vec![
            self.segment((0.0, 0.25), (0.75, 1.0)),
            self.segment((0.0, 0.0), (1.0, 1.0)),
            self.segment((0.25, 0.0), (1.0, 0.75)),
        ];
        Box::new(LineCollection::new("slant_up", segments))
    }

    fn slant_down(&self) -> Box<dyn TargetShape> {
        let segments = vec![
            self.segment((0.0, 0.75), (0.75, 0.0)),
            self.segment((0.0, 1.0), (1.0, 0.0)),
            self.segment((0.25, 1.0), (1.0, 0.25)),
        ];
        Box::new(LineCollection::new("slant_down", segments))
    }

    fn x(&self) -> Box<dyn TargetShape> {
        let segments = vec![
            self.segment((0.0, 0.0), (1.0, 1.0)),
            self.segment((0.0, 1.0), (1.0, 0.0)),
        ];
        Box::new(LineCollection::new("x", segments))
    }

    fn rectangle(&self) -> Box<dyn TargetShape> {
        let corners = [
            self.at(0.2, 0.2),
            self.at(0.8, 0.2),
            self.at(0.8, 0.8),
            self.at(0.2, 0.8),
        ];
        Box::new(LineCollection::polyline("rectangle", &corners, true))
    }

    fn diamond(&self) -> Box<dyn TargetShape> {
        let corners = [
            self.at(0.5, 0.0),
            self.at(1.0, 0.5),
            self.at(0.5, 1.0),
            self.at(0.0, 0.5),
        ];
        Box::new(LineCollection::polyline("diamond", &corners, true))
    }

    fn star(&self) -> Box<dyn TargetShape> {
        let center = self.extent.center();
        let outer = 0.45 * self.extent.width().min(self.extent.height());
        // Ratio of inner to outer radius for a regular pentagram
        let inner = outer * 0.381_966;
        let vertices: Vec<Point> = (0..10)
            .map(|i| {
                let angle = FRAC_PI_2 + i as f64 * PI / 5.0;
                let r = if i % 2 == 0 { outer } else { inner };
                Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
            })
            .collect();
        Box::new(LineCollection::polyline("star", &vertices, true))
    }

    fn parabola(&self, name: &str, upward: bool) -> Box<dyn TargetShape> {
        let half_width = (self.extent.width() / 2.0).max(f64::EPSILON);
        let rise = 0.8 * self.extent.height();
        let a = rise / (half_width * half_width);
        let (a, vertex) = if upward {
            (a, self.at(0.5, 0.1))
        } else {
            (-a, self.at(0.5, 0.9))
        };
        Box::new(Parabola::new(
            name,
            a,
            vertex,
            (self.extent.x_min, self.extent.x_max),
        ))
    }

    fn up_parab(&self) -> Box<dyn TargetShape> {
        self.parabola("up_parab", true)
    }

    fn down_parab(&self) -> Box<dyn TargetShape> {
        self.parabola("down_parab", false)
    }
}
