//! # Pendulum
//!
//! Entry point for the cart-pole demonstration binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use physics::Integrator;
use tracing_subscriber::EnvFilter;

use pendulum::app::{self, RunOptions};
use pendulum::config;

#[derive(Parser)]
#[command(name = "pendulum", about = "Balance a pole on a cart with a linear controller")]
struct Cli {
    /// Random seed for the initial state; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Initial pole angle in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    initial_angle: f64,

    /// Episode length in steps
    #[arg(long)]
    episode_length: Option<u32>,

    /// Integration scheme: euler or semi-implicit-euler
    #[arg(long)]
    integrator: Option<Integrator>,

    /// JSON file with physical constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log progress every N steps (0 disables)
    #[arg(long, default_value_t = 50)]
    log_every: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let options = RunOptions {
        constants: config::load_constants(cli.config.as_deref(), cli.integrator)?,
        seed: cli.seed,
        initial_angle: cli.initial_angle,
        episode_length: cli.episode_length,
        log_every: cli.log_every,
    };

    let report = app::run(&options)?;
    println!("Testing steps: {} rewards {}", report.steps, report.total_reward);
    Ok(())
}
