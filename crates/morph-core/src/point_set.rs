//! The mutable dataset a morph perturbs
//!
//! A [`PointSet`] owns the ordered points, the rectangle they must stay
//! inside, the live statistics and the baseline statistics frozen at
//! construction. Point order never changes, so frame `k` row `i` is always
//! the same datum as frame `0` row `i`.

use std::sync::Arc;

use morph_stats::XyStats;

use crate::error::{ConfigError, MorphError, MorphResult};
use crate::types::{Bounds, Point};

/// Ordered 2D points with cached and baseline statistics
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
    bounds: Bounds,
    stats: XyStats,
    baseline: XyStats,
}

impl PointSet {
    /// Create a point set and freeze its current statistics as the baseline.
    ///
    /// Fails if there are no points, a coordinate is not finite, or a point
    /// lies outside `bounds`.
    pub fn new(points: Vec<Point>, bounds: Bounds) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::EmptyDataset);
        }
        for (index, &point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(ConfigError::NonFinitePoint { index });
            }
            if !bounds.contains(point) {
                return Err(ConfigError::PointOutsideBounds {
                    index,
                    point,
                    bounds,
                });
            }
        }

        let stats = compute_stats(&points);
        Ok(Self {
            points,
            bounds,
            stats,
            baseline: stats,
        })
    }

    /// Create a point set whose bounds are the data extent grown by `margin`
    pub fn with_margin(points: Vec<Point>, margin: f64) -> Result<Self, ConfigError> {
        let bounds = Bounds::around(&points)
            .ok_or(ConfigError::EmptyDataset)?
            .expanded(margin);
        Self::new(points, bounds)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current statistics
    pub fn statistics(&self) -> XyStats {
        self.stats
    }

    /// Statistics captured at construction; a morph rebases to the
    /// statistics current when it starts
    pub fn baseline(&self) -> XyStats {
        self.baseline
    }

    /// Statistics the set would have if point `index` were replaced by
    /// `candidate`. An index past the end replaces nothing.
    pub fn statistics_with(&self, index: usize, candidate: Point) -> XyStats {
        let pairs = self.points.iter().enumerate().map(move |(i, p)| {
            let p = if i == index { candidate } else { *p };
            (p.x, p.y)
        });
        XyStats::from_pairs(pairs)
    }

    /// Whether the current statistics round to the baseline at `decimals` places
    pub fn matches_baseline(&self, decimals: u32) -> bool {
        self.stats.matches(&self.baseline, decimals)
    }

    /// Replace the point at `index` and refresh the cached statistics
    pub fn apply(&mut self, index: usize, point: Point) -> MorphResult<()> {
        self.check(index, point)?;
        self.points[index] = point;
        self.stats = compute_stats(&self.points);
        Ok(())
    }

    /// Replace a point whose resulting statistics were already computed
    /// through [`statistics_with`](Self::statistics_with).
    pub(crate) fn commit(&mut self, index: usize, point: Point, stats: XyStats) -> MorphResult<()> {
        self.check(index, point)?;
        self.points[index] = point;
        self.stats = stats;
        Ok(())
    }

    /// Copy whose baseline is the current statistics
    pub(crate) fn rebased(&self) -> Self {
        let mut set = self.clone();
        set.baseline = set.stats;
        set
    }

    /// Immutable deep copy of the current points
    pub fn snapshot(&self) -> Arc<[Point]> {
        Arc::from(self.points.as_slice())
    }

    fn check(&self, index: usize, point: Point) -> MorphResult<()> {
        if index >= self.points.len() {
            return Err(MorphError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        if !self.bounds.contains(point) {
            return Err(MorphError::OutOfBounds {
                index,
                point,
                bounds: self.bounds,
            });
        }
        Ok(())
    }
}

fn compute_stats(points: &[Point]) -> XyStats {
    XyStats::from_pairs(points.iter().map(|p| (p.x, p.y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> PointSet {
        PointSet::new(
            vec![
                Point::new(10.0, 10.0),
                Point::new(10.0, 90.0),
                Point::new(90.0, 10.0),
                Point::new(90.0, 90.0),
            ],
            Bounds::square(0.0, 100.0),
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates() {
        let bounds = Bounds::square(0.0, 1.0);
        assert_eq!(
            PointSet::new(vec![], bounds).unwrap_err(),
            ConfigError::EmptyDataset
        );
        assert!(matches!(
            PointSet::new(vec![Point::new(f64::NAN, 0.5)], bounds),
            Err(ConfigError::NonFinitePoint { index: 0 })
        ));
        assert!(matches!(
            PointSet::new(vec![Point::new(0.5, 0.5), Point::new(2.0, 0.5)], bounds),
            Err(ConfigError::PointOutsideBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_baseline_is_frozen() {
        let mut set = corners();
        let before = set.baseline();
        set.apply(0, Point::new(50.0, 50.0)).unwrap();

        assert_eq!(set.baseline(), before);
        assert_ne!(set.statistics(), before);
        assert!(!set.matches_baseline(2));
    }

    #[test]
    fn test_rebased_adopts_current_statistics() {
        let mut set = corners();
        set.apply(0, Point::new(50.0, 50.0)).unwrap();
        let rebased = set.rebased();

        assert_eq!(rebased.baseline(), set.statistics());
        assert_eq!(rebased.points(), set.points());
        assert!(rebased.matches_baseline(15));
        assert_ne!(set.baseline(), set.statistics());
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let mut set = corners();
        let err = set.apply(1, Point::new(101.0, 50.0)).unwrap_err();
        assert!(matches!(err, MorphError::OutOfBounds { index: 1, .. }));
        // Unchanged after a failed apply
        assert_eq!(set.get(1), Some(Point::new(10.0, 90.0)));
        assert!(matches!(
            set.apply(9, Point::new(1.0, 1.0)),
            Err(MorphError::IndexOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn test_statistics_with_does_not_mutate() {
        let set = corners();
        let candidate = Point::new(10.001, 10.0);
        let projected = set.statistics_with(0, candidate);

        assert_eq!(set.get(0), Some(Point::new(10.0, 10.0)));
        assert!(projected.mean_x > set.statistics().mean_x);

        let mut applied = set.clone();
        applied.apply(0, candidate).unwrap();
        assert_eq!(applied.statistics(), projected);
    }

    #[test]
    fn test_small_move_keeps_baseline() {
        let mut set = corners();
        set.apply(0, Point::new(10.001, 10.001)).unwrap();
        assert!(set.matches_baseline(2));
        assert!(!set.matches_baseline(6));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut set = corners();
        let snap = set.snapshot();
        set.apply(2, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(snap[2], Point::new(90.0, 10.0));
    }

    #[test]
    fn test_zero_variance_axis() {
        let set = PointSet::new(
            vec![Point::new(1.0, 5.0), Point::new(2.0, 5.0)],
            Bounds::square(0.0, 10.0),
        )
        .unwrap();
        assert_eq!(set.statistics().std_y, 0.0);
        assert!(set.matches_baseline(8));
    }
}
