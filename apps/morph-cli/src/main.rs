//! data-morph - morph a dataset into target shapes
//!
//! Loads a starting dataset, runs one statistics-preserving morph per target
//! shape and writes a JSON summary (and optionally per-frame CSV data) for
//! each run.

mod cli;

use clap::Parser;
use morph_core::{morph_each, MorphResult, ShapeFactory, TargetShape};
use morph_io::{load_dataset, write_summary, FitRange, FrameWriter};
use tracing_subscriber::EnvFilter;

use cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.morph_config()?;
    config.validate()?;
    let shapes = args.target_shapes()?;

    let fit = FitRange::default();
    let dataset = load_dataset(&args.start, fit)?;
    let start = dataset.to_point_set(fit.canvas())?;
    tracing::info!(
        dataset = %dataset.name,
        baseline = %start.baseline(),
        shapes = shapes.len(),
        "morphing"
    );

    let factory = ShapeFactory::new(&start);
    let targets = shapes
        .iter()
        .map(|name| factory.generate(name))
        .collect::<MorphResult<Vec<Box<dyn TargetShape>>>>()?;

    let outcomes = morph_each(&start, &targets, &config)?;

    for outcome in &outcomes {
        let report = &outcome.report;
        if args.write_data {
            let writer = FrameWriter::new(&args.output_dir, &dataset.name, &report.shape)?;
            writer.write_all(&outcome.frames)?;
        }
        let summary = write_summary(&args.output_dir, &dataset.name, &config, outcome)?;

        println!(
            "{} -> {}: accepted {:.1}% of moves, mean distance {:.3} -> {:.3} ({})",
            dataset.name,
            report.shape,
            report.acceptance_rate() * 100.0,
            report.mean_distance_start,
            report.mean_distance_end,
            summary.display()
        );
        if !report.stagnation.is_empty() {
            println!(
                "  warning: stagnated {} time(s); consider more drift or fewer decimals",
                report.stagnation.len()
            );
        }
    }

    Ok(())
}
