//! Dataset loading
//!
//! A starting dataset comes either from a named preset or from a CSV file
//! with `x` and `y` columns. Either way the points are rescaled into a
//! common range so every shape sees data of the same size.

use std::path::Path;

use morph_core::{Bounds, ConfigError, Point, PointSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::csv_reader;
use crate::presets::Preset;

/// Errors that can occur during I/O operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid value {value:?} in column {column} at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Dataset {0} has no points")]
    EmptyDataset(String),

    #[error("Unknown dataset {name:?}; expected a CSV path or one of: {}", available.join(", "))]
    UnknownDataset { name: String, available: Vec<String> },

    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] ConfigError),

    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Io(err.to_string())
    }
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Target range points are rescaled into, the same on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitRange {
    pub min: f64,
    pub max: f64,
}

impl Default for FitRange {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 90.0,
        }
    }
}

impl FitRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Rectangle a morph may use: the fit range padded by an eighth of its
    /// span on every side (0..100 for the default range).
    pub fn canvas(&self) -> Bounds {
        let pad = self.span() / 8.0;
        Bounds::square(self.min - pad, self.max + pad)
    }

    /// Rescale `points` into the range, keeping their aspect ratio.
    ///
    /// The longer side of the data's bounding box spans the full range; the
    /// shorter side is centred. Degenerate data collapses to the centre.
    pub fn fit(&self, points: &[Point]) -> Vec<Point> {
        let Some(extent) = Bounds::around(points) else {
            return Vec::new();
        };

        let longest = extent.width().max(extent.height());
        let scale = if longest > 0.0 { self.span() / longest } else { 0.0 };
        let offset_x = self.min + (self.span() - extent.width() * scale) / 2.0;
        let offset_y = self.min + (self.span() - extent.height() * scale) / 2.0;

        points
            .iter()
            .map(|p| {
                Point::new(
                    offset_x + (p.x - extent.x_min) * scale,
                    offset_y + (p.y - extent.y_min) * scale,
                )
            })
            .collect()
    }
}

/// A named starting dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub points: Vec<Point>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Freeze the dataset into a point set confined to `bounds`
    pub fn to_point_set(&self, bounds: Bounds) -> IoResult<PointSet> {
        Ok(PointSet::new(self.points.clone(), bounds)?)
    }
}

/// Load a dataset from a preset name or a CSV path and rescale it into `fit`
pub fn load_dataset(source: &str, fit: FitRange) -> IoResult<Dataset> {
    let (name, raw) = if let Some(preset) = Preset::from_name(source) {
        (preset.name().to_string(), preset.generate())
    } else {
        let path = Path::new(source);
        if !path.exists() {
            return Err(missing_source(source));
        }
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(source)
            .to_string();
        (name, csv_reader::read_points(path)?)
    };

    if raw.is_empty() {
        return Err(IoError::EmptyDataset(name));
    }
    if let Some(index) = raw.iter().position(|p| !p.is_finite()) {
        return Err(ConfigError::NonFinitePoint { index }.into());
    }

    tracing::info!(dataset = %name, points = raw.len(), "loaded dataset");
    Ok(Dataset::new(name, fit.fit(&raw)))
}

fn missing_source(source: &str) -> IoError {
    let looks_like_path = source.contains(|c: char| matches!(c, '/' | '\\' | '.'));
    if looks_like_path {
        IoError::FileNotFound(source.to_string())
    } else {
        IoError::UnknownDataset {
            name: source.to_string(),
            available: Preset::ALL.iter().map(|p| p.name().to_string()).collect(),
        }
    }
}
