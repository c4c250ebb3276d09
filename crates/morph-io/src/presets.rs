//! Built-in starting datasets.
//!
//! Presets are generated from a fixed seed, so the same name always yields
//! the same points. Coordinates are in arbitrary units; [`load_dataset`]
//! rescales them like any other input.
//!
//! [`load_dataset`]: crate::reader::load_dataset

use std::f64::consts::TAU;

use morph_core::Point;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64;

const PRESET_SEED: u64 = 42;
const PRESET_POINTS: usize = 150;
const GRID_SIDE: usize = 12;

/// A named, reproducible starting dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Uniform scatter over a square
    Square,
    /// Regular lattice
    Grid,
    /// Noisy annulus
    Ring,
    /// Isotropic Gaussian cloud
    Blob,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Square, Preset::Grid, Preset::Ring, Preset::Blob];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Square => "square",
            Preset::Grid => "grid",
            Preset::Ring => "ring",
            Preset::Blob => "blob",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn generate(&self) -> Vec<Point> {
        let mut rng = Pcg64::seed_from_u64(PRESET_SEED);
        match self {
            Preset::Square => (0..PRESET_POINTS)
                .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
                .collect(),
            Preset::Grid => (0..GRID_SIDE * GRID_SIDE)
                .map(|i| Point::new((i % GRID_SIDE) as f64, (i / GRID_SIDE) as f64))
                .collect(),
            Preset::Ring => (0..PRESET_POINTS)
                .map(|_| {
                    let angle = rng.random_range(0.0..TAU);
                    let noise: f64 = rng.sample(StandardNormal);
                    let radius = 1.0 + 0.08 * noise;
                    Point::new(radius * angle.cos(), radius * angle.sin())
                })
                .collect(),
            Preset::Blob => (0..PRESET_POINTS)
                .map(|_| Point::new(rng.sample(StandardNormal), rng.sample(StandardNormal)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("square", Preset::Square)]
    #[case("grid", Preset::Grid)]
    #[case("ring", Preset::Ring)]
    #[case("blob", Preset::Blob)]
    fn test_from_name(#[case] name: &str, #[case] expected: Preset) {
        assert_eq!(Preset::from_name(name), Some(expected));
        assert_eq!(expected.name(), name);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Preset::from_name("dino"), None);
        assert_eq!(Preset::from_name("Square"), None);
    }

    #[test]
    fn test_presets_are_reproducible() {
        for preset in Preset::ALL {
            let points = preset.generate();
            assert!(!points.is_empty());
            assert!(points.iter().all(|p| p.is_finite()));
            assert_eq!(points, preset.generate());
        }
    }

    #[test]
    fn test_grid_is_a_lattice() {
        let points = Preset::Grid.generate();
        assert_eq!(points.len(), 144);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[143], Point::new(11.0, 11.0));
    }

    #[test]
    fn test_ring_is_hollow() {
        let inside = Preset::Ring
            .generate()
            .iter()
            .filter(|p| p.distance(Point::new(0.0, 0.0)) < 0.5)
            .count();
        assert_eq!(inside, 0);
    }
}
