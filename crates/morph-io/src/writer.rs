//! Frame and run summary writers
//!
//! Frames are written one CSV per frame so external tools can render or diff
//! them. The run summary is a single pretty-printed JSON document.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use morph_core::{Frame, MorphConfig, MorphOutcome, MorphReport, Point};
use serde::{Deserialize, Serialize};

use crate::reader::{IoError, IoResult};

/// Write `points` as CSV with an `x,y` header
pub fn write_points<W: Write>(sink: W, points: &[Point]) -> IoResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for point in points {
        writer
            .serialize(point)
            .map_err(|e| IoError::Serialize(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the frames of one `start -> target` morph into a directory
#[derive(Debug, Clone)]
pub struct FrameWriter {
    dir: PathBuf,
    start: String,
    target: String,
}

impl FrameWriter {
    /// Create the writer, creating `dir` if needed
    pub fn new(
        dir: impl Into<PathBuf>,
        start: impl Into<String>,
        target: impl Into<String>,
    ) -> IoResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            start: start.into(),
            target: target.into(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for the frame at `position` in the exported sequence
    pub fn file_name(&self, position: usize) -> String {
        format!("{}-to-{}-data-{:03}.csv", self.start, self.target, position)
    }

    pub fn write_frame(&self, position: usize, frame: &Frame) -> IoResult<PathBuf> {
        let path = self.dir.join(self.file_name(position));
        let file = File::create(&path)
            .map_err(|e| IoError::OpenFailed(format!("{}: {}", path.display(), e)))?;
        write_points(BufWriter::new(file), frame.points())?;
        Ok(path)
    }

    /// Write every frame, numbered by position in the sequence
    pub fn write_all(&self, frames: &[Frame]) -> IoResult<Vec<PathBuf>> {
        let paths = frames
            .iter()
            .enumerate()
            .map(|(position, frame)| self.write_frame(position, frame))
            .collect::<IoResult<Vec<_>>>()?;
        tracing::debug!(
            start = %self.start,
            target = %self.target,
            files = paths.len(),
            "wrote frame data"
        );
        Ok(paths)
    }
}

/// Everything recorded about one finished morph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub start: String,
    pub target: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub frames: usize,
    pub config: MorphConfig,
    pub report: MorphReport,
}

impl RunSummary {
    pub fn new(start: impl Into<String>, config: &MorphConfig, outcome: &MorphOutcome) -> Self {
        Self {
            start: start.into(),
            target: outcome.report.shape.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            frames: outcome.frames.len(),
            config: config.clone(),
            report: outcome.report.clone(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}-to-{}-summary.json", self.start, self.target)
    }
}

/// Write `{start}-to-{target}-summary.json` into `dir`
pub fn write_summary(
    dir: &Path,
    start: &str,
    config: &MorphConfig,
    outcome: &MorphOutcome,
) -> IoResult<PathBuf> {
    let summary = RunSummary::new(start, config, outcome);
    fs::create_dir_all(dir)?;
    let path = dir.join(summary.file_name());
    let file = File::create(&path)
        .map_err(|e| IoError::OpenFailed(format!("{}: {}", path.display(), e)))?;

    let mut sink = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut sink, &summary)
        .map_err(|e| IoError::Serialize(e.to_string()))?;
    sink.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_core::{morph_with_config, Bounds, Circle, PointSet};
    use std::sync::Arc;

    fn frame(iteration: usize) -> Frame {
        Frame::new(
            iteration,
            Arc::from(vec![Point::new(1.5, 2.0), Point::new(3.0, 4.25)]),
        )
    }

    #[test]
    fn test_write_points_csv() {
        let mut buf = Vec::new();
        write_points(&mut buf, &[Point::new(1.5, 2.0), Point::new(-3.0, 0.125)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n1.5,2.0\n-3.0,0.125\n");
    }

    #[test]
    fn test_file_names_are_zero_padded() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FrameWriter::new(dir.path(), "grid", "circle").unwrap();
        assert_eq!(writer.file_name(7), "grid-to-circle-data-007.csv");
        assert_eq!(writer.file_name(123), "grid-to-circle-data-123.csv");
    }

    #[test]
    fn test_write_all_creates_directory_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let writer = FrameWriter::new(&out, "grid", "x").unwrap();

        let paths = writer.write_all(&[frame(0), frame(10), frame(0)]).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths[2].ends_with("grid-to-x-data-002.csv"));

        let content = fs::read_to_string(&paths[1]).unwrap();
        assert_eq!(content, "x,y\n1.5,2.0\n3.0,4.25\n");
    }

    #[test]
    fn test_write_summary_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let start = PointSet::new(
            vec![Point::new(20.0, 20.0), Point::new(80.0, 30.0), Point::new(50.0, 70.0)],
            Bounds::square(0.0, 100.0),
        )
        .unwrap();
        let config = MorphConfig::new(100, 2, 3).with_seed(Some(1));
        let outcome =
            morph_with_config(&start, &Circle::new(Point::new(50.0, 50.0), 20.0), &config)
                .unwrap();

        let path = write_summary(dir.path(), "tri", &config, &outcome).unwrap();
        assert!(path.ends_with("tri-to-circle-summary.json"));

        let summary: RunSummary = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(summary.target, "circle");
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.config, config);
        assert_eq!(summary.report, outcome.report);
        assert!(chrono::DateTime::parse_from_rfc3339(&summary.created_at).is_ok());
    }
}
