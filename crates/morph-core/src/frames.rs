//! Frame sampling for animation.
//!
//! A run of any length is reduced to at most `num_frames` snapshots taken at
//! evenly spaced iterations. The backward half of a looping animation is
//! derived from the captured forward frames by [`assemble`]; it never
//! captures anything itself.

use std::sync::Arc;

use crate::point_set::PointSet;
use crate::types::Point;

/// Immutable snapshot of a dataset after `iteration` iterations
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub iteration: usize,
    points: Arc<[Point]>,
}

impl Frame {
    pub fn new(iteration: usize, points: Arc<[Point]>) -> Self {
        Self { iteration, points }
    }

    /// Snapshot the current state of `set`
    pub fn capture(iteration: usize, set: &PointSet) -> Self {
        Self::new(iteration, set.snapshot())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ascending, deduplicated iterations at which frames are captured.
///
/// Checkpoint `k` is `round(k * iterations / (num_frames - 1))`, so the list
/// always starts at 0 and ends at `iterations`. It holds `num_frames` entries
/// unless the run is too short to give each its own iteration. A
/// `num_frames` below 2 is treated as 2.
pub fn checkpoint_indices(iterations: usize, num_frames: usize) -> Vec<usize> {
    let intervals = num_frames.max(2) as u128 - 1;
    let total = iterations as u128;

    let mut indices: Vec<usize> = (0..=intervals)
        .map(|k| ((2 * k * total + intervals) / (2 * intervals)) as usize)
        .collect();
    indices.dedup();
    indices
}

/// Order captured forward frames for export.
///
/// With `forward_only` the frames are returned as-is. Otherwise the reversed
/// forward list is appended without repeating the final frame, producing
/// `2m - 1` frames that play forward and then unwind to the start.
pub fn assemble(forward: Vec<Frame>, forward_only: bool) -> Vec<Frame> {
    if forward_only || forward.len() < 2 {
        return forward;
    }

    let backward: Vec<Frame> = forward[..forward.len() - 1].iter().rev().cloned().collect();
    let mut frames = forward;
    frames.extend(backward);
    frames
}

/// Captures frames at precomputed checkpoints while a run progresses
#[derive(Debug, Clone)]
pub struct FrameSampler {
    checkpoints: Vec<usize>,
    next: usize,
    captured: Vec<Frame>,
}

impl FrameSampler {
    pub fn new(iterations: usize, num_frames: usize) -> Self {
        let checkpoints = checkpoint_indices(iterations, num_frames);
        Self {
            captured: Vec::with_capacity(checkpoints.len()),
            checkpoints,
            next: 0,
        }
    }

    pub fn checkpoints(&self) -> &[usize] {
        &self.checkpoints
    }

    /// Whether the next pending checkpoint is `iteration`
    pub fn is_due(&self, iteration: usize) -> bool {
        self.checkpoints.get(self.next) == Some(&iteration)
    }

    /// Snapshot `set` if `iteration` is the next pending checkpoint.
    ///
    /// Returns the newly captured frame. Iterations must be offered in
    /// ascending order; anything else is ignored.
    pub fn capture(&mut self, iteration: usize, set: &PointSet) -> Option<&Frame> {
        if !self.is_due(iteration) {
            return None;
        }
        self.next += 1;
        self.captured.push(Frame::capture(iteration, set));
        self.captured.last()
    }

    /// Frames captured so far, in capture order
    pub fn forward(&self) -> &[Frame] {
        &self.captured
    }

    /// Finish sampling and order the frames for export
    pub fn finish(self, forward_only: bool) -> Vec<Frame> {
        assemble(self.captured, forward_only)
    }
}
