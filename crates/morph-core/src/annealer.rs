//! The annealing loop.
//!
//! Each iteration proposes one move, keeps it only if the statistics still
//! round to the baseline *and* the shape fit does not get worse by more than
//! the current tolerance, and snapshots the state at sampled checkpoints.
//! The statistics test is never relaxed; only the shape criterion anneals.
//! The baseline is the statistics of the points the run starts from.

use rand::Rng;
use serde::{Deserialize, Serialize};

use morph_stats::XyStats;

use crate::config::MorphConfig;
use crate::error::MorphResult;
use crate::frames::{Frame, FrameSampler};
use crate::perturb::{GaussianPerturbation, Proposal};
use crate::point_set::PointSet;
use crate::shape::TargetShape;

/// Raised when too many candidates in a row would have broken the
/// statistics.
///
/// Not an error: the run carries on with its current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagnationWarning {
    /// Iteration at which the streak reached the threshold
    pub iteration: usize,
    pub consecutive_rejections: usize,
}

/// Counters and before/after measurements for one run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MorphReport {
    pub shape: String,
    pub iterations: usize,
    pub decimals: u32,
    pub accepted: usize,
    /// Candidates that kept the statistics but worsened the fit by more
    /// than the tolerance
    pub rejected_shape: usize,
    /// Candidates that would have broken the statistics
    pub rejected_statistics: usize,
    /// Candidates the point set refused; clamping keeps this at zero
    pub rejected_bounds: usize,
    pub stagnation: Vec<StagnationWarning>,
    pub initial_stats: XyStats,
    pub final_stats: XyStats,
    pub mean_distance_start: f64,
    pub mean_distance_end: f64,
}

impl MorphReport {
    fn start(shape: &dyn TargetShape, config: &MorphConfig, points: &PointSet) -> Self {
        let mean_distance = shape.mean_distance(points.points());
        Self {
            shape: shape.name().to_string(),
            iterations: config.iterations,
            decimals: config.decimals,
            accepted: 0,
            rejected_shape: 0,
            rejected_statistics: 0,
            rejected_bounds: 0,
            stagnation: Vec::new(),
            initial_stats: points.statistics(),
            final_stats: points.statistics(),
            mean_distance_start: mean_distance,
            mean_distance_end: mean_distance,
        }
    }

    fn finish(&mut self, shape: &dyn TargetShape, points: &PointSet) {
        self.final_stats = points.statistics();
        self.mean_distance_end = shape.mean_distance(points.points());
    }

    /// Fraction of iterations whose candidate was kept
    pub fn acceptance_rate(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.iterations as f64
    }

    /// Whether the final statistics still round to the initial ones
    pub fn statistics_preserved(&self) -> bool {
        self.final_stats.matches(&self.initial_stats, self.decimals)
    }
}

/// Frames and report of a finished run
#[derive(Clone, Debug)]
pub struct MorphOutcome {
    pub frames: Vec<Frame>,
    pub report: MorphReport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Accepted,
    RejectedShape,
    RejectedStatistics,
    RejectedBounds,
}

/// Drives one shape's morph over a private copy of the starting points
#[derive(Debug)]
pub struct Annealer<'a> {
    shape: &'a dyn TargetShape,
    config: &'a MorphConfig,
    policy: GaussianPerturbation,
}

impl<'a> Annealer<'a> {
    /// Validate `config` and prepare a run toward `shape`
    pub fn new(shape: &'a dyn TargetShape, config: &'a MorphConfig) -> MorphResult<Self> {
        config.validate()?;
        Ok(Self {
            shape,
            config,
            policy: GaussianPerturbation::new(),
        })
    }

    /// Run the full iteration budget starting from a copy of `start`
    pub fn run<R: Rng>(&self, start: &PointSet, rng: &mut R) -> MorphOutcome {
        self.run_with_observer(start, rng, |_| {})
    }

    /// Like [`run`](Self::run), handing each frame to `on_frame` as soon as
    /// it is captured.
    pub fn run_with_observer<R, F>(&self, start: &PointSet, rng: &mut R, mut on_frame: F) -> MorphOutcome
    where
        R: Rng,
        F: FnMut(&Frame),
    {
        let iterations = self.config.iterations;
        let threshold = self.config.stagnation_threshold;
        let schedule = &self.config.schedule;

        let mut points = start.rebased();
        let mut sampler = FrameSampler::new(iterations, self.config.num_frames);
        let mut report = MorphReport::start(self.shape, self.config, &points);

        tracing::info!(
            shape = self.shape.name(),
            points = points.len(),
            iterations,
            decimals = self.config.decimals,
            "starting morph"
        );

        if let Some(frame) = sampler.capture(0, &points) {
            on_frame(frame);
        }

        let mut streak = 0usize;
        for iteration in 1..=iterations {
            let progress = iteration as f64 / iterations as f64;
            let drift = schedule.drift_at(progress);
            let tolerance = schedule.tolerance_at(progress);

            let step = self.step(&mut points, drift, tolerance, rng);
            match step {
                Step::Accepted => report.accepted += 1,
                Step::RejectedShape => report.rejected_shape += 1,
                Step::RejectedStatistics => report.rejected_statistics += 1,
                Step::RejectedBounds => report.rejected_bounds += 1,
            }

            // Only statistics failures count toward stagnation
            if step == Step::RejectedStatistics {
                streak += 1;
                if threshold > 0 && streak == threshold {
                    tracing::warn!(
                        shape = self.shape.name(),
                        iteration,
                        consecutive_rejections = streak,
                        "no candidate keeps the statistics; morph is stagnating"
                    );
                    report.stagnation.push(StagnationWarning {
                        iteration,
                        consecutive_rejections: streak,
                    });
                }
            } else {
                streak = 0;
            }

            if let Some(frame) = sampler.capture(iteration, &points) {
                tracing::debug!(iteration, drift, tolerance, "captured frame");
                on_frame(frame);
            }
        }

        report.finish(self.shape, &points);
        tracing::info!(
            shape = %report.shape,
            accepted = report.accepted,
            mean_distance_start = report.mean_distance_start,
            mean_distance_end = report.mean_distance_end,
            "morph finished"
        );

        MorphOutcome {
            frames: sampler.finish(self.config.forward_only),
            report,
        }
    }

    fn step<R: Rng>(&self, points: &mut PointSet, drift: f64, tolerance: f64, rng: &mut R) -> Step {
        let Proposal { index, candidate } = self.policy.propose(points, drift, rng);

        let projected = points.statistics_with(index, candidate);
        if !projected.matches(&points.baseline(), self.config.decimals) {
            return Step::RejectedStatistics;
        }

        let old_distance = self.shape.distance(points.points()[index]);
        let new_distance = self.shape.distance(candidate);
        if !(new_distance <= old_distance || new_distance - old_distance <= tolerance) {
            return Step::RejectedShape;
        }

        match points.commit(index, candidate, projected) {
            Ok(()) => Step::Accepted,
            Err(err) => {
                tracing::error!(%err, "accepted candidate refused by point set");
                Step::RejectedBounds
            }
        }
    }
}
