//! Fixed linear state-feedback policy and single-episode rollouts.

use crate::env::{Env, EnvError};

/// Gains of the hand-tuned balancing controller used by the demo.
pub const DEMO_GAINS: [f64; 4] = [-1.0, -1.6567, 18.6854, 3.4594];

/// `force = gains · observation`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearPolicy {
    pub gains: [f64; 4],
}

impl Default for LinearPolicy {
    fn default() -> Self {
        Self { gains: DEMO_GAINS }
    }
}

impl LinearPolicy {
    #[must_use]
    pub const fn new(gains: [f64; 4]) -> Self {
        Self { gains }
    }

    #[must_use]
    pub fn act(&self, observation: &[f64]) -> f64 {
        self.gains.iter().zip(observation).map(|(k, o)| k * o).sum()
    }
}

/// Totals for one finished episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeSummary {
    pub steps: usize,
    pub total_reward: f64,
    pub final_observation: Vec<f64>,
}

/// Reset `env` and run `policy` until the episode ends or `max_steps` is hit.
///
/// # Errors
///
/// Propagates any [`EnvError`] raised by the environment.
pub fn rollout<E: Env + ?Sized>(
    env: &mut E,
    policy: &LinearPolicy,
    max_steps: usize,
) -> Result<EpisodeSummary, EnvError> {
    let mut observation = env.reset();
    let mut summary = EpisodeSummary::default();

    while summary.steps < max_steps {
        let transition = env.step(&[policy.act(&observation)])?;
        summary.steps += 1;
        summary.total_reward += transition.reward;
        observation = transition.observation;
        if transition.done {
            break;
        }
    }

    tracing::debug!(steps = summary.steps, reward = summary.total_reward, "rollout finished");
    summary.final_observation = observation;
    Ok(summary)
}
