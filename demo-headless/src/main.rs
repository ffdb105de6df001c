//! Headless frontend for the cyclone model.
//!
//! Plays the role of the dashboard's UI/animation driver: turns CLI flags
//! into model parameters, requests a snapshot per time step, and prints a
//! per-frame report. The model itself never sleeps or loops; the cadence
//! lives entirely here.

use clap::Parser;
use cyclone_sim_core::{constants, CycloneModel, CycloneParams, CycloneSnapshot, OcclusionPolicy};
use std::process::ExitCode;

/// Cyclone dashboard demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "cyclone-demo")]
#[command(about = "Extratropical cyclone model demo", long_about = None)]
struct Args {
    /// Pressure deficit at the center in hPa (slider range 10-60)
    #[arg(short, long, default_value_t = 30.0)]
    intensity: f32,

    /// Radial scale of the pressure pit (slider range 1.0-5.0)
    #[arg(short, long, default_value_t = 2.5)]
    radius_scale: f32,

    /// Half-width of the square domain in grid units
    #[arg(long, default_value_t = constants::DEFAULT_GRID_EXTENT)]
    grid_extent: f32,

    /// Grid points per axis
    #[arg(long, default_value_t = constants::DEFAULT_GRID_RESOLUTION)]
    resolution: usize,

    /// Front length in grid units
    #[arg(long, default_value_t = constants::DEFAULT_FRONT_LENGTH)]
    front_length: f32,

    /// Occlusion policy (converging, catch-up)
    #[arg(long, default_value = "converging")]
    policy: String,

    /// Time step for a single snapshot (ignored with --animate)
    #[arg(short, long, default_value_t = 0.0)]
    time: f32,

    /// Animate from 0 to 100 instead of rendering one snapshot
    #[arg(short, long)]
    animate: bool,

    /// Time-step increment per animation frame
    #[arg(long, default_value_t = 2.0)]
    step: f32,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 50)]
    interval_ms: u64,

    /// Arrow subsampling stride for the wind summary
    #[arg(long, default_value_t = constants::DEFAULT_VECTOR_STRIDE)]
    stride: usize,

    /// Write the final snapshot as JSON to this path
    #[arg(long)]
    json: Option<std::path::PathBuf>,
}

fn parse_policy(name: &str) -> Option<OcclusionPolicy> {
    match name {
        "converging" => Some(OcclusionPolicy::Converging),
        "catch-up" => Some(OcclusionPolicy::CatchUp),
        _ => None,
    }
}

fn print_frame(snap: &CycloneSnapshot, stride: usize) {
    let arrows = snap.wind.sampled(stride);
    println!(
        "t = {:>5.1} | central {} | grid min {:.1} hPa | max wind {:.2} | warm {} cold {} | {} arrows | {}",
        snap.time_step,
        snap.central_pressure,
        snap.pressure.min_pressure(),
        snap.wind.max_speed(),
        snap.fronts.warm_angle,
        snap.fronts.cold_angle,
        arrows.len(),
        snap.status,
    );
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(occlusion_policy) = parse_policy(&args.policy) else {
        return Err(format!(
            "unknown policy '{}', expected converging or catch-up",
            args.policy
        )
        .into());
    };

    let params = CycloneParams {
        intensity: args.intensity,
        radius_scale: args.radius_scale,
        grid_extent: args.grid_extent,
        grid_resolution: args.resolution,
        front_length: args.front_length,
        occlusion_policy,
        ..CycloneParams::default()
    };
    let model = CycloneModel::new(params)?;

    println!("=== Cyclone Model Demo ===");
    println!(
        "intensity {:.0} hPa, radius scale {:.1}, {}x{} grid, policy {}\n",
        args.intensity, args.radius_scale, args.resolution, args.resolution, args.policy
    );

    let last = if args.animate {
        let mut t = 0.0;
        let step = args.step.max(0.1);
        let mut snap = model.snapshot(t)?;
        loop {
            print_frame(&snap, args.stride);
            if t >= constants::TIME_STEP_MAX {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(args.interval_ms));
            t = (t + step).min(constants::TIME_STEP_MAX);
            snap = model.snapshot(t)?;
        }
        snap
    } else {
        let snap = model.snapshot(args.time)?;
        print_frame(&snap, args.stride);
        snap
    };

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&last)?;
        std::fs::write(path, json)?;
        println!("\nwrote snapshot to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
