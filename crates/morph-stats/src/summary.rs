//! Summary statistics for a single coordinate column
//!
//! Provides the per-axis summaries a morph is checked against:
//! - Mean, population variance, population standard deviation
//! - Min, max, range

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population variance (divides by `count`, not `count - 1`)
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    ///
    /// Uses the two-pass formula so a column whose values are all equal has a
    /// variance of exactly zero.
    pub fn from_data(data: &[f64]) -> Self {
        Self::from_values(data.iter().copied())
    }

    /// Compute summary statistics from any re-iterable sequence of values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: Clone,
    {
        let iter = values.into_iter();

        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for x in iter.clone() {
            count += 1;
            sum += x;
            min = min.min(x);
            max = max.max(x);
        }

        if count == 0 {
            return Self::empty();
        }

        let mean = sum / count as f64;
        let variance = iter.map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        Self {
            count,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }

    /// Create empty statistics (all NaN)
    fn empty() -> Self {
        Self {
            count: 0,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether no values contributed
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stats_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert!((stats.mean - 5.5).abs() < 1e-10);
        assert_eq!(stats.range(), 9.0);
    }

    #[test]
    fn test_population_not_sample_variance() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStats::from_data(&data);

        // Population std of this classic set is exactly 2
        assert!((stats.variance - 4.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_has_zero_std() {
        let data = vec![42.5; 16];
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mean, 42.5);
    }

    #[test]
    fn test_empty_is_nan() {
        let stats = SummaryStats::from_data(&[]);
        assert!(stats.is_empty());
        assert!(stats.mean.is_nan());
        assert!(stats.std_dev.is_nan());
    }

    #[test]
    fn test_from_values_matches_from_data() {
        let data = vec![1.5, -3.0, 8.25, 0.0];
        let a = SummaryStats::from_data(&data);
        let b = SummaryStats::from_values(data.iter().copied());
        assert_eq!(a, b);
    }
}
