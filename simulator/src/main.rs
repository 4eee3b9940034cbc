use anyhow::Context;
use clap::Parser;
use generator::profile::build_frames;
use hubtarget::geometry::configure_frame_center;
use hubtarget::TargetGeometry;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use workflow::config::VisionConfig;
use workflow::frames::read_frames;
use workflow::runner::Runner;

mod generator;
mod telemetry;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Hub targeting replay and synthetic frame driver")]
struct Args {
    /// Load a vision config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Replay recorded payloads, one JSON frame per line
    #[arg(long)]
    frames: Option<PathBuf>,
    /// Number of synthetic frames to generate when not replaying
    #[arg(long)]
    synthetic: Option<usize>,
    /// Horizontal sensor resolution in pixels
    #[arg(long)]
    resolution: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Write per-frame metrics as JSON lines here instead of stdout
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = args.workflow.as_ref() {
        VisionConfig::load(path)?
    } else {
        VisionConfig::default()
    };
    if let Some(resolution) = args.resolution {
        config.resolution_width = resolution;
    }
    if let Some(frames) = args.synthetic {
        config.generator.frames = frames;
    }
    if let Some(seed) = args.seed {
        config.generator.seed = seed;
    }

    let center = config.frame_center()?;
    configure_frame_center(center).context("establishing frame center")?;
    let geometry = TargetGeometry::from_global(config.geometry)?;
    info!(
        "camera {} at {} px wide, frame center {} px",
        config.camera,
        config.resolution_width,
        center.pixels()
    );

    let frames = match args.frames.as_ref() {
        Some(path) => read_frames(path)?,
        None => build_frames(&config.generator, &config.camera, center.pixels())?,
    };

    let mut runner = Runner::new(&config, geometry);
    let result = runner.execute(&frames);

    let mut out: Box<dyn Write> = match args.report.as_ref() {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating report {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    for frame in &result.metrics {
        serde_json::to_writer(&mut out, frame).context("writing frame metrics")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    // stdout carries only JSON lines when no report file is given
    eprintln!("{}", result.summary());

    Ok(())
}
