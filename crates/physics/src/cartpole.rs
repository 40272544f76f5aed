//! CartPole engine for reinforcement learning environments
//!
//! [`CartPole`] owns the immutable physics and reward configuration plus the
//! per-episode counters. The [`SimulationState`] itself is a plain value: it
//! is produced by [`CartPole::reset`] and threaded through
//! [`CartPole::step`] by the caller, so several independent episodes can be
//! run side by side with one engine each.

use std::f64::consts::PI;

use crate::constants::PhysicalConstants;
use crate::error::PhysicsError;
use crate::integrator;
use crate::reward::RewardConfig;
use crate::types::{action_bounds, Bounds, SimulationState, Thresholds};

/// Episode length used when `reset` is not given one.
pub const DEFAULT_EPISODE_LENGTH: u32 = 200;

/// Half-width of the uniform distribution every state component is drawn from.
pub const INITIAL_STATE_RANGE: f64 = 0.05;

/// Per-episode step bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EpisodeCounters {
    /// Steps taken since the last reset.
    pub steps_taken: u32,
    /// Step count at which the episode ends.
    pub steps_taken_limit: u32,
    /// `None` until the episode terminates, then counts the extra steps.
    pub post_termination_step_count: Option<u32>,
}

impl Default for EpisodeCounters {
    fn default() -> Self {
        Self {
            steps_taken: 0,
            steps_taken_limit: DEFAULT_EPISODE_LENGTH,
            post_termination_step_count: None,
        }
    }
}

/// Where the episode is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EpisodePhase {
    /// Within bounds and under the step limit.
    #[default]
    Active,
    /// Termination was detected on the latest step.
    JustTerminated,
    /// The caller kept stepping after termination.
    OverTerminated,
}

/// Out-of-band signal attached to a step result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// `step` was called after the episode had already returned `done`.
    /// Only reported on the first such call; `reset` should be called instead.
    SteppedAfterTermination,
}

/// Result of one [`CartPole::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub state: SimulationState,
    pub reward: f64,
    pub done: bool,
    pub phase: EpisodePhase,
    pub diagnostic: Option<Diagnostic>,
}

/// Optional overrides for [`CartPole::reset`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResetOptions {
    /// Initial pole angle in degrees, replacing the random draw.
    pub initial_angle: Option<f64>,
    /// Episode length in steps, replacing [`DEFAULT_EPISODE_LENGTH`].
    pub episode_length: Option<u32>,
}

impl ResetOptions {
    #[must_use]
    pub fn with_initial_angle(mut self, degrees: f64) -> Self {
        self.initial_angle = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_episode_length(mut self, steps: u32) -> Self {
        self.episode_length = Some(steps);
        self
    }
}

/// Continuous-force cart-pole dynamics engine.
#[derive(Clone, Debug)]
pub struct CartPole {
    constants: PhysicalConstants,
    thresholds: Thresholds,
    reward: RewardConfig,
    counters: EpisodeCounters,
    phase: EpisodePhase,
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new(PhysicalConstants::default())
    }
}

impl CartPole {
    /// Engine with the default thresholds and reward weights.
    #[must_use]
    pub fn new(constants: PhysicalConstants) -> Self {
        let thresholds = Thresholds::default();
        Self::with_reward(constants, thresholds, RewardConfig::default())
    }

    #[must_use]
    pub fn with_reward(
        constants: PhysicalConstants,
        thresholds: Thresholds,
        reward: RewardConfig,
    ) -> Self {
        Self {
            constants,
            thresholds,
            reward,
            counters: EpisodeCounters::default(),
            phase: EpisodePhase::Active,
        }
    }

    #[must_use]
    pub const fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    #[must_use]
    pub const fn reward_config(&self) -> &RewardConfig {
        &self.reward
    }

    #[must_use]
    pub const fn counters(&self) -> &EpisodeCounters {
        &self.counters
    }

    #[must_use]
    pub const fn phase(&self) -> EpisodePhase {
        self.phase
    }

    #[must_use]
    pub fn observation_bounds(&self) -> Bounds<4> {
        self.thresholds.observation_bounds()
    }

    #[must_use]
    pub fn action_bounds(&self) -> Bounds<1> {
        action_bounds()
    }

    /// Start a new episode and return its initial state.
    ///
    /// All four components are drawn uniformly from
    /// `[-INITIAL_STATE_RANGE, INITIAL_STATE_RANGE)` using `rng`, then the
    /// overrides in `options` are applied.
    pub fn reset(&mut self, rng: &mut fastrand::Rng, options: ResetOptions) -> SimulationState {
        let mut state = SimulationState::new(
            uniform_initial(rng),
            uniform_initial(rng),
            uniform_initial(rng),
            uniform_initial(rng),
        );
        if let Some(degrees) = options.initial_angle {
            state.pole_angle = degrees * PI / 180.0;
        }

        self.counters = EpisodeCounters {
            steps_taken: 0,
            steps_taken_limit: options.episode_length.unwrap_or(DEFAULT_EPISODE_LENGTH),
            post_termination_step_count: None,
        };
        self.phase = EpisodePhase::Active;

        tracing::debug!(
            ?state,
            limit = self.counters.steps_taken_limit,
            "cart-pole episode reset"
        );
        state
    }

    /// Advance `state` by one timestep under `control_force`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidAction`] if the force is not finite. The
    /// engine is left untouched in that case.
    pub fn step(
        &mut self,
        state: &SimulationState,
        control_force: f64,
    ) -> Result<StepOutcome, PhysicsError> {
        if !action_bounds().contains(&[control_force]) {
            return Err(PhysicsError::InvalidAction { value: control_force });
        }

        self.counters.steps_taken = self.counters.steps_taken.saturating_add(1);
        let next = integrator::advance(&self.constants, state, control_force);

        let done = self.thresholds.violated_by(&next)
            || self.counters.steps_taken >= self.counters.steps_taken_limit;

        let mut diagnostic = None;
        let reward = if !done {
            if self.counters.post_termination_step_count.is_some() {
                self.phase = EpisodePhase::OverTerminated;
            }
            self.reward.shaped(&next)
        } else if let Some(extra) = self.counters.post_termination_step_count.as_mut() {
            if *extra == 0 {
                tracing::warn!(
                    "step() called after the episode already returned done = true; \
                     call reset() once done is received, further steps are undefined"
                );
                diagnostic = Some(Diagnostic::SteppedAfterTermination);
            }
            *extra = extra.saturating_add(1);
            self.phase = EpisodePhase::OverTerminated;
            0.0
        } else {
            self.counters.post_termination_step_count = Some(0);
            self.phase = EpisodePhase::JustTerminated;
            tracing::debug!(
                steps = self.counters.steps_taken,
                state = ?next,
                "cart-pole episode terminated"
            );
            self.reward.shaped(&next) - f64::from(self.counters.steps_taken_limit)
        };

        Ok(StepOutcome { state: next, reward, done, phase: self.phase, diagnostic })
    }
}

fn uniform_initial(rng: &mut fastrand::Rng) -> f64 {
    INITIAL_STATE_RANGE * (2.0 * rng.f64() - 1.0)
}
