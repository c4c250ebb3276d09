//! Candidate moves for the annealer

use rand::Rng;
use rand_distr::StandardNormal;

use crate::point_set::PointSet;
use crate::types::Point;

/// One proposed move: replace point `index` with `candidate`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal {
    pub index: usize,
    pub candidate: Point,
}

/// Moves a uniformly chosen point by a Gaussian displacement.
///
/// Each coordinate is shifted by `N(0, drift)`, then the result is clamped
/// into the set's bounds, so a proposal is never rejected for leaving the
/// rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianPerturbation;

impl GaussianPerturbation {
    pub fn new() -> Self {
        Self
    }

    /// Propose a move. `points` must not be empty.
    pub fn propose<R: Rng>(&self, points: &PointSet, drift: f64, rng: &mut R) -> Proposal {
        let index = rng.random_range(0..points.len());
        let current = points.points()[index];

        let dx: f64 = rng.sample(StandardNormal);
        let dy: f64 = rng.sample(StandardNormal);
        let moved = Point::new(current.x + dx * drift, current.y + dy * drift);

        Proposal {
            index,
            candidate: points.bounds().clamp(moved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn set() -> PointSet {
        PointSet::new(
            vec![Point::new(0.5, 0.5), Point::new(9.5, 9.5), Point::new(5.0, 5.0)],
            Bounds::square(0.0, 10.0),
        )
        .unwrap()
    }

    #[test]
    fn test_proposals_stay_in_bounds() {
        let points = set();
        let policy = GaussianPerturbation::new();
        let mut rng = Pcg64::seed_from_u64(7);

        for _ in 0..2_000 {
            let p = policy.propose(&points, 5.0, &mut rng);
            assert!(p.index < points.len());
            assert!(points.bounds().contains(p.candidate));
        }
    }

    #[test]
    fn test_small_drift_moves_little() {
        let points = set();
        let policy = GaussianPerturbation::new();
        let mut rng = Pcg64::seed_from_u64(11);

        for _ in 0..500 {
            let p = policy.propose(&points, 1e-3, &mut rng);
            let original = points.points()[p.index];
            assert!(p.candidate.distance(original) < 0.05);
        }
    }

    #[test]
    fn test_every_index_is_reachable() {
        let points = set();
        let policy = GaussianPerturbation::new();
        let mut rng = Pcg64::seed_from_u64(3);
        let mut seen = [false; 3];

        for _ in 0..200 {
            seen[policy.propose(&points, 0.1, &mut rng).index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_proposals() {
        let points = set();
        let policy = GaussianPerturbation::new();
        let mut a = Pcg64::seed_from_u64(99);
        let mut b = Pcg64::seed_from_u64(99);

        for _ in 0..50 {
            assert_eq!(
                policy.propose(&points, 0.3, &mut a),
                policy.propose(&points, 0.3, &mut b)
            );
        }
    }
}
