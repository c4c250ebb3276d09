//! Command-line arguments and how they become a run configuration

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use morph_core::{MorphConfig, ShapeFactory};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("Invalid config {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("No valid target shapes; choose from: {}", available.join(", "))]
    NoValidShapes { available: Vec<String> },
}

/// Morph a dataset into other shapes without changing its summary statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "data-morph", author, version, about)]
pub struct Args {
    /// Starting dataset: a preset (square, grid, ring, blob) or a CSV file with x and y columns
    #[arg(value_name = "START")]
    pub start: String,

    /// Shapes to morph into; all shapes when omitted
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub target_shape: Vec<String>,

    /// Number of perturbation attempts per shape
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Decimal places to which the statistics must stay equal
    #[arg(long)]
    pub decimals: Option<u32>,

    /// Frames to sample from each run
    #[arg(long)]
    pub num_frames: Option<usize>,

    /// Directory for frame data and run summaries
    #[arg(long, default_value = "morphed_data")]
    pub output_dir: PathBuf,

    /// Only export the forward half of the animation
    #[arg(long, default_value_t = false)]
    pub forward_only: bool,

    /// Write one CSV per frame
    #[arg(long, default_value_t = false)]
    pub write_data: bool,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML run configuration; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the run configuration from the optional file plus flags
    pub fn morph_config(&self) -> Result<MorphConfig, CliError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => MorphConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    fn apply_overrides(&self, mut config: MorphConfig) -> MorphConfig {
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        if let Some(num_frames) = self.num_frames {
            config.num_frames = num_frames;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.forward_only {
            config.forward_only = true;
        }
        config
    }

    /// Shape names to run, in request order with duplicates removed.
    ///
    /// Unknown names are skipped with a warning; if nothing valid remains
    /// the run cannot start.
    pub fn target_shapes(&self) -> Result<Vec<String>, CliError> {
        if self.target_shape.is_empty() {
            return Ok(ShapeFactory::available()
                .into_iter()
                .map(str::to_string)
                .collect());
        }

        let mut shapes: Vec<String> = Vec::new();
        for name in &self.target_shape {
            if !ShapeFactory::is_available(name) {
                tracing::warn!(shape = %name, "ignoring unknown target shape");
            } else if !shapes.contains(name) {
                shapes.push(name.clone());
            }
        }

        if shapes.is_empty() {
            return Err(CliError::NoValidShapes {
                available: ShapeFactory::available()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        }
        Ok(shapes)
    }
}

/// Read a [`MorphConfig`] from a TOML file
pub fn load_config(path: &Path) -> Result<MorphConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    toml::from_str(&text).map_err(|e| CliError::ConfigParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
