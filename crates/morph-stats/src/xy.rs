//! The four statistics a morph must preserve

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rounding::{agrees_to, round_half_even};
use crate::summary::SummaryStats;

/// Mean and population standard deviation of both coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyStats {
    pub mean_x: f64,
    pub mean_y: f64,
    pub std_x: f64,
    pub std_y: f64,
}

impl XyStats {
    /// Compute statistics from a re-iterable sequence of `(x, y)` pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
        I::IntoIter: Clone,
    {
        let iter = pairs.into_iter();
        let x = SummaryStats::from_values(iter.clone().map(|(x, _)| x));
        let y = SummaryStats::from_values(iter.map(|(_, y)| y));
        Self::from_summaries(&x, &y)
    }

    /// Combine two per-axis summaries
    pub fn from_summaries(x: &SummaryStats, y: &SummaryStats) -> Self {
        Self {
            mean_x: x.mean,
            mean_y: y.mean,
            std_x: x.std_dev,
            std_y: y.std_dev,
        }
    }

    /// All four values rounded half to even at `decimals` places
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            mean_x: round_half_even(self.mean_x, decimals),
            mean_y: round_half_even(self.mean_y, decimals),
            std_x: round_half_even(self.std_x, decimals),
            std_y: round_half_even(self.std_y, decimals),
        }
    }

    /// Whether every statistic agrees with `other` at `decimals` places
    pub fn matches(&self, other: &Self, decimals: u32) -> bool {
        agrees_to(self.mean_x, other.mean_x, decimals)
            && agrees_to(self.mean_y, other.mean_y, decimals)
            && agrees_to(self.std_x, other.std_x, decimals)
            && agrees_to(self.std_y, other.std_y, decimals)
    }
}

impl fmt::Display for XyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean=({:.4}, {:.4}) std=({:.4}, {:.4})",
            self.mean_x, self.mean_y, self.std_x, self.std_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn corners() -> Vec<(f64, f64)> {
        vec![(10.0, 10.0), (10.0, 90.0), (90.0, 10.0), (90.0, 90.0)]
    }

    #[test]
    fn test_from_pairs_corners() {
        let stats = XyStats::from_pairs(corners());
        assert_eq!(stats.mean_x, 50.0);
        assert_eq!(stats.mean_y, 50.0);
        assert_eq!(stats.std_x, 40.0);
        assert_eq!(stats.std_y, 40.0);
    }

    #[test]
    fn test_matches_uses_every_statistic() {
        let base = XyStats::from_pairs(corners());
        let mut shifted = base;
        shifted.std_y += 0.01;

        assert!(base.matches(&base, 2));
        assert!(!base.matches(&shifted, 2));
        assert!(base.matches(&shifted, 1));
    }

    #[test]
    fn test_rounded() {
        let stats = XyStats {
            mean_x: 1.125,
            mean_y: 2.0,
            std_x: 0.5,
            std_y: 3.14159,
        };
        let r = stats.rounded(2);
        assert_eq!(r.mean_x, 1.12);
        assert_eq!(r.std_y, 3.14);
    }

    #[test]
    fn test_zero_variance_axis_matches() {
        let flat = vec![(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)];
        let stats = XyStats::from_pairs(flat);
        assert_eq!(stats.std_y, 0.0);
        assert!(stats.matches(&stats, 4));
    }

    proptest! {
        #[test]
        fn test_matches_is_reflexive(
            points in proptest::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 1..50),
            decimals in 0u32..6,
        ) {
            let stats = XyStats::from_pairs(points);
            prop_assert!(stats.matches(&stats, decimals));
        }
    }
}
