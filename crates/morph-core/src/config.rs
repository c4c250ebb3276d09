//! Run configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schedule::AnnealSchedule;
use morph_stats::MAX_DECIMALS;

/// Everything that controls a single morph run.
///
/// All fields have defaults, so a partial TOML or JSON document deserializes
/// into a complete configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Number of perturbation attempts; the loop always runs all of them
    pub iterations: usize,

    /// Decimal places to which mean and std must keep matching the start
    pub decimals: u32,

    /// Forward frames to sample, including the first and last state
    pub num_frames: usize,

    /// RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,

    /// Only play forward instead of forward-then-back
    pub forward_only: bool,

    /// Drift and tolerance decay
    pub schedule: AnnealSchedule,

    /// Consecutive rejections after which a stagnation warning is raised
    pub stagnation_threshold: usize,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            decimals: 2,
            num_frames: 100,
            seed: None,
            forward_only: false,
            schedule: AnnealSchedule::default(),
            stagnation_threshold: 10_000,
        }
    }
}

impl MorphConfig {
    pub fn new(iterations: usize, decimals: u32, num_frames: usize) -> Self {
        Self {
            iterations,
            decimals,
            num_frames,
            ..Default::default()
        }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Only export the forward half of the animation
    pub fn with_forward_only(mut self, forward_only: bool) -> Self {
        self.forward_only = forward_only;
        self
    }

    pub fn with_schedule(mut self, schedule: AnnealSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_stagnation_threshold(mut self, threshold: usize) -> Self {
        self.stagnation_threshold = threshold;
        self
    }

    /// Reject configurations a run cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations < 1 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.num_frames < 2 {
            return Err(ConfigError::TooFewFrames {
                num_frames: self.num_frames,
            });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::DecimalsTooLarge {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }
        self.schedule.validate()
    }

    /// Upper bound on the number of exported frames
    pub fn max_exported_frames(&self) -> usize {
        if self.forward_only {
            self.num_frames
        } else {
            (2 * self.num_frames).saturating_sub(1)
        }
    }
}
