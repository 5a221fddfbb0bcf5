//! Voxelmath rotation inspector
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p voxelmath-inspect -- euler 30 45 60
//! cargo run -p voxelmath-inspect -- --precision 6 between 1,0,0 0,1,1
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod config;

use anyhow::Context;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use voxelmath_core::{constants::GIMBAL_LOCK_THRESHOLD, math, Vector3};

use crate::config::{Command, InspectConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = InspectConfig::from_args(std::env::args().skip(1))?;
    debug!(?config, "parsed arguments");

    match config.command {
        Command::Help => print_help(),
        Command::Euler { pitch, yaw, roll } => euler(pitch, yaw, roll, config.precision),
        Command::Between { from, to } => between(from, to, config.precision)?,
    }

    Ok(())
}

fn euler(pitch: f32, yaw: f32, roll: f32, p: usize) {
    let q = math::rotation(pitch, yaw, roll);
    let angles = math::axis_angles(q);

    if math::gimbal_test(q).abs() >= GIMBAL_LOCK_THRESHOLD {
        warn!(pitch, "pitch is at the gimbal-lock pole, roll folds into yaw");
    }

    println!("quaternion    {q:.p$}");
    println!("length        {:.p$}", q.length());
    println!("angles (pyr)  {angles:.p$}");
    println!(
        "forward       {:.p$}",
        q.rotate_vector(Vector3::new(0.0, 0.0, -1.0))
    );
}

fn between(from: Vector3, to: Vector3, p: usize) -> anyhow::Result<()> {
    let q = math::try_rotation_to(from, to)
        .with_context(|| format!("no rotation from {from} to {to}"))?;
    let angles = q.axis_angles();
    let check = q.rotate_vector(from.normalize());

    println!("quaternion    {q:.p$}");
    println!("angles (pyr)  {angles:.p$}");
    println!("from rotated  {check:.p$}");
    println!("to (unit)     {:.p$}", to.normalize());
    Ok(())
}

fn print_help() {
    eprintln!(
        "Voxelmath rotation inspector

USAGE:
    cargo run -p voxelmath-inspect -- [OPTIONS] <COMMAND>

COMMANDS:
    euler <PITCH> <YAW> <ROLL>   Build a quaternion from Tait-Bryan angles (degrees)
                                 and extract the angles back
    between <X,Y,Z> <X,Y,Z>      Shortest rotation taking the first direction
                                 onto the second

OPTIONS:
    -p, --precision <N>     Decimal places in output (default: 4)
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
