//! Octo Bounce headless runner
//!
//! Stands in for a windowed host: it owns the frame loop, feeds `dt` into the
//! simulation and writes each frame's drawable state to stdout as JSON lines.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use octo_bounce::SimConfig;
use octo_bounce::clock::FrameClock;
use octo_bounce::sim::{Simulation, tick};

#[derive(Parser)]
#[command(name = "octo-bounce")]
#[command(about = "Bounce a ball inside a rotating regular polygon")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to run before stopping
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Pace frames against the wall clock instead of using a fixed step
    #[arg(long)]
    realtime: bool,

    /// Emit every k-th frame
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Override the polygon vertex count
    #[arg(long)]
    vertices: Option<usize>,

    /// Override the polygon spin (degrees per second)
    #[arg(long)]
    angular_speed: Option<f32>,

    /// Override the ball launch speed
    #[arg(long)]
    ball_speed: Option<f32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(n) = args.vertices {
        config.vertex_count = n;
    }
    if let Some(speed) = args.angular_speed {
        config.angular_speed_deg = speed;
    }
    if let Some(speed) = args.ball_speed {
        config.ball_speed = speed;
    }

    let mut sim = Simulation::new(&config).context("invalid simulation settings")?;
    let mut clock = if args.realtime {
        FrameClock::realtime()
    } else {
        FrameClock::fixed(config.frame_dt())
    };
    let every = args.every.max(1);

    log::info!("Octo Bounce running {} frames at {} fps", args.frames, config.fps);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut escapes = 0u64;

    for _ in 0..args.frames {
        let dt = clock.tick(config.fps);
        let report = tick(&mut sim, dt)?;
        if report.escaped(sim.ball().radius) {
            escapes += 1;
        }

        if report.frame % every == 0 {
            serde_json::to_writer(&mut out, &sim.snapshot())?;
            writeln!(out)?;
            if args.realtime {
                out.flush()?;
            }
        }
    }
    out.flush()?;

    log::info!(
        "Done: {} frames, {} bounces, {} escapes, final speed {:.2}",
        sim.frame(),
        sim.bounces(),
        escapes,
        sim.ball().speed()
    );
    Ok(())
}
