//! Decay curves for drift and tolerance.
//!
//! Both curves start at their maximum on the first iteration and fall to
//! their minimum on the last one; the easing only decides how the fall is
//! distributed over the run.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::ConfigError;

/// Easing applied to run progress `t ∈ [0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseInOutQuad,
    #[default]
    EaseInOutSine,
}

impl Easing {
    /// Map `t` (clamped to [0, 1]) to eased progress in [0, 1]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// How far points may move and how much worse a move may make the shape fit,
/// as functions of run progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealSchedule {
    /// Standard deviation of each displacement component at the start
    pub max_drift: f64,
    /// Standard deviation at the end; must be positive
    pub min_drift: f64,
    /// Uphill slack in shape distance at the start
    pub max_tolerance: f64,
    /// Uphill slack at the end
    pub min_tolerance: f64,
    pub easing: Easing,
}

impl Default for AnnealSchedule {
    fn default() -> Self {
        Self {
            max_drift: 0.3,
            min_drift: 0.05,
            max_tolerance: 0.1,
            min_tolerance: 0.0,
            easing: Easing::default(),
        }
    }
}

impl AnnealSchedule {
    /// Allowed drift at `progress`
    pub fn drift_at(&self, progress: f64) -> f64 {
        decay(self.max_drift, self.min_drift, self.easing.apply(progress))
    }

    /// Allowed uphill tolerance at `progress`
    pub fn tolerance_at(&self, progress: f64) -> f64 {
        decay(self.max_tolerance, self.min_tolerance, self.easing.apply(progress))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.max_drift,
            self.min_drift,
            self.max_tolerance,
            self.min_tolerance,
        ];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(invalid("all values must be finite"));
        }
        if self.min_drift <= 0.0 || self.min_drift > self.max_drift {
            return Err(invalid("drift needs 0 < min_drift <= max_drift"));
        }
        if self.min_tolerance < 0.0 || self.min_tolerance > self.max_tolerance {
            return Err(invalid("tolerance needs 0 <= min_tolerance <= max_tolerance"));
        }
        Ok(())
    }
}

fn decay(max: f64, min: f64, eased: f64) -> f64 {
    (max - (max - min) * eased).clamp(min, max)
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::InvalidSchedule {
        message: message.to_string(),
    }
}
