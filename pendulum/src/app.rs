//! # Pendulum Application Logic
//!
//! Runs one cart-pole episode under the demonstration controller and reports
//! what happened. Progress is logged through `tracing`, including where a
//! renderer would draw the cart and the pole tip.

use anyhow::Result;
use physics::{CartPole, PhysicalConstants, ResetOptions};
use render::SceneLayout;
use rl::{CartPoleEnv, Env, LinearPolicy};

/// Settings for a single demonstration run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub constants: PhysicalConstants,
    pub seed: Option<u64>,
    /// Initial pole angle in degrees.
    pub initial_angle: f64,
    pub episode_length: Option<u32>,
    /// Log every N steps; 0 disables progress logging.
    pub log_every: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::default(),
            seed: None,
            initial_angle: 0.0,
            episode_length: None,
            log_every: 50,
        }
    }
}

/// Outcome of a demonstration run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub seed: u64,
    pub steps: usize,
    pub total_reward: f64,
    pub final_state: [f64; 4],
}

/// Run one episode with the linear balancing controller.
///
/// # Errors
///
/// Returns any error raised while stepping the environment.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let engine = CartPole::new(options.constants);
    let layout = SceneLayout::new(engine.thresholds(), engine.constants());
    let mut env = CartPoleEnv::with_engine(engine, options.seed);
    let policy = LinearPolicy::default();

    tracing::info!(
        seed = env.current_seed(),
        integrator = ?options.constants.integrator(),
        "starting cart-pole episode"
    );

    let mut reset = ResetOptions::default().with_initial_angle(options.initial_angle);
    reset.episode_length = options.episode_length;
    let mut observation = env.reset_with(reset);

    let mut steps = 0;
    let mut total_reward = 0.0;
    loop {
        let transition = env.step(&[policy.act(&observation)])?;
        steps += 1;
        total_reward += transition.reward;
        observation = transition.observation;

        if options.log_every > 0 && steps % options.log_every == 0 {
            if let Some(state) = env.state() {
                let frame = layout.project(state);
                tracing::info!(
                    step = steps,
                    reward = total_reward,
                    cart_px = frame.cart_translation.x,
                    tip_px = ?frame.pole_tip(),
                    "simulation step complete"
                );
            }
        }
        if transition.done {
            break;
        }
    }

    let final_state = env.state().map(|s| s.to_array()).unwrap_or_default();
    tracing::info!(steps, total_reward, ?final_state, "episode finished");

    Ok(RunReport { seed: env.current_seed(), steps, total_reward, final_state })
}
