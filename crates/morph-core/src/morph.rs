//! Entry points that wire a configuration, an RNG and an annealer together

use rand::SeedableRng;
use rand_pcg::Pcg64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::annealer::{Annealer, MorphOutcome};
use crate::config::MorphConfig;
use crate::error::MorphResult;
use crate::frames::Frame;
use crate::point_set::PointSet;
use crate::shape::TargetShape;

/// Generator for a run: deterministic from `seed`, OS-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_rng(&mut rand::rng()),
    }
}

/// Morph `start` toward `target` and return the frames to export.
///
/// `start` is never modified; the run works on its own copy. Configuration
/// errors are reported before any iteration happens.
pub fn morph(
    start: &PointSet,
    target: &dyn TargetShape,
    iterations: usize,
    decimals: u32,
    num_frames: usize,
    seed: Option<u64>,
    forward_only: bool,
) -> MorphResult<Vec<Frame>> {
    let config = MorphConfig::new(iterations, decimals, num_frames)
        .with_seed(seed)
        .with_forward_only(forward_only);
    Ok(morph_with_config(start, target, &config)?.frames)
}

/// Morph with a full configuration, returning frames and the run report
pub fn morph_with_config(
    start: &PointSet,
    target: &dyn TargetShape,
    config: &MorphConfig,
) -> MorphResult<MorphOutcome> {
    let annealer = Annealer::new(target, config)?;
    let mut rng = seeded_rng(config.seed);
    Ok(annealer.run(start, &mut rng))
}

/// Run one morph per target, each from its own copy of `start` and its own
/// generator seeded from `config.seed`.
///
/// Outcomes are returned in the order of `targets`. With the `parallel`
/// feature the runs execute on the rayon pool.
pub fn morph_each(
    start: &PointSet,
    targets: &[Box<dyn TargetShape>],
    config: &MorphConfig,
) -> MorphResult<Vec<MorphOutcome>> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    let outcomes = targets
        .par_iter()
        .map(|target| morph_with_config(start, target.as_ref(), config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = targets
        .iter()
        .map(|target| morph_with_config(start, target.as_ref(), config))
        .collect();

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, MorphError};
    use crate::shape::{Circle, ShapeFactory};
    use crate::types::{Bounds, Point};

    fn start() -> PointSet {
        let points = (0..25)
            .map(|i| Point::new(30.0 + (i % 5) as f64 * 10.0, 30.0 + (i / 5) as f64 * 10.0))
            .collect();
        PointSet::new(points, Bounds::square(0.0, 100.0)).unwrap()
    }

    #[test]
    fn test_morph_rejects_bad_input_up_front() {
        let shape = Circle::new(Point::new(50.0, 50.0), 20.0);
        assert_eq!(
            morph(&start(), &shape, 0, 0, 10, Some(1), false).unwrap_err(),
            MorphError::Config(ConfigError::ZeroIterations)
        );
        assert!(matches!(
            morph(&start(), &shape, 10, 2, 1, Some(1), false),
            Err(MorphError::Config(ConfigError::TooFewFrames { num_frames: 1 }))
        ));
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let shape = Circle::new(Point::new(50.0, 50.0), 20.0);
        let a = morph(&start(), &shape, 1_000, 2, 5, Some(42), false).unwrap();
        let b = morph(&start(), &shape, 1_000, 2, 5, Some(42), false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_morph_each_keeps_target_order() {
        let set = start();
        let factory = ShapeFactory::new(&set);
        let targets = vec![
            factory.generate("x").unwrap(),
            factory.generate("circle").unwrap(),
            factory.generate("h_lines").unwrap(),
        ];
        let config = MorphConfig::new(300, 2, 3).with_seed(Some(7));

        let outcomes = morph_each(&set, &targets, &config).unwrap();
        let names: Vec<&str> = outcomes.iter().map(|o| o.report.shape.as_str()).collect();
        assert_eq!(names, vec!["x", "circle", "h_lines"]);

        let single = morph_with_config(&set, targets[1].as_ref(), &config).unwrap();
        assert_eq!(single.frames, outcomes[1].frames);
    }

    #[test]
    fn test_morph_each_validates_once() {
        let set = start();
        let config = MorphConfig::new(0, 2, 3);
        assert!(morph_each(&set, &[], &config).is_err());
    }
}
