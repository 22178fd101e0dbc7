//! Command-line front end for pairing analysis.
//!
//! The analysis core defines no command surface; this binary is the
//! external one. It loads a JSON position trajectory, runs the chunked
//! pairing pipeline, prints per-frame cluster statistics, and can dump
//! the full frame series as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pairing_analysis::TrajectoryDriver;
use pairing_core::{AnalysisConfig, TrajectoryProvider};
use pairing_io::PositionTrajectory;

#[derive(Parser)]
#[command(name = "pairing")]
#[command(about = "Cluster analysis of paired sites across a trajectory", long_about = None)]
struct Cli {
    /// Input trajectory: JSON array of frames of [x, y, z] site positions
    #[arg(short, long)]
    input: PathBuf,

    /// Config TOML file (cutoff, chunk_size)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Distance cutoff override
    #[arg(long)]
    cutoff: Option<f64>,

    /// Chunk size override (frames between full rebuilds)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Write the full frame series as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(cutoff) = cli.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }
    config.validate().context("invalid analysis parameters")?;

    let trajectory = PositionTrajectory::from_json_file(&cli.input)
        .with_context(|| format!("loading trajectory {}", cli.input.display()))?;
    log::info!(
        "cutoff {}, chunk size {}, {} frames",
        config.cutoff,
        config.chunk_size,
        trajectory.frame_count()
    );

    let driver = TrajectoryDriver::new(&config)?;
    let series = driver.run(&trajectory).context("pairing analysis failed")?;

    println!("frame  clusters  mean_size  stdev");
    for record in &series {
        println!(
            "{:>5}  {:>8}  {:>9.3}  {:>5.3}",
            record.frame,
            record.clusters.len(),
            record.clusters.statistics.mean,
            record.clusters.statistics.stdev
        );
    }

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&series)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("frame series written to {}", path.display());
    }

    Ok(())
}
