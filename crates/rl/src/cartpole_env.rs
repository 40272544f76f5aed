use physics::{
    Bounds, CartPole, EpisodeCounters, PhysicalConstants, ResetOptions, SimulationState,
};

use crate::env::{Env, EnvError, Transition};
use crate::seeding;

/// Continuous-force cart-pole environment.
///
/// Wraps a [`CartPole`] engine together with the current state and a seeded
/// random source. The pole starts upright-ish and the agent keeps it up by
/// pushing the cart with an unbounded horizontal force.
pub struct CartPoleEnv {
    engine: CartPole,
    state: Option<SimulationState>,
    rng: fastrand::Rng,
    seed: u64,
}

impl CartPoleEnv {
    /// Creates an environment seeded from entropy.
    #[must_use]
    pub fn new(constants: PhysicalConstants) -> Self {
        Self::with_engine(CartPole::new(constants), None)
    }

    /// Creates an environment around `engine`, seeded with `seed` if given.
    #[must_use]
    pub fn with_engine(engine: CartPole, seed: Option<u64>) -> Self {
        let (rng, seed) = seeding::np_random(seed);
        Self { engine, state: None, rng, seed }
    }

    /// Reseeds the random source used by subsequent resets and returns the seed.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let (rng, seed) = seeding::np_random(seed);
        self.rng = rng;
        self.seed = seed;
        seed
    }

    /// Seed the current random source was built from.
    #[must_use]
    pub const fn current_seed(&self) -> u64 {
        self.seed
    }

    /// Resets with an explicit initial angle (degrees) and/or episode length.
    pub fn reset_with(&mut self, options: ResetOptions) -> Vec<f64> {
        let state = self.engine.reset(&mut self.rng, options);
        self.state = Some(state);
        state.to_array().to_vec()
    }

    /// Current state, `None` before the first reset.
    #[must_use]
    pub const fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    #[must_use]
    pub const fn engine(&self) -> &CartPole {
        &self.engine
    }

    #[must_use]
    pub const fn counters(&self) -> &EpisodeCounters {
        self.engine.counters()
    }

    #[must_use]
    pub fn observation_bounds(&self) -> Bounds<4> {
        self.engine.observation_bounds()
    }

    #[must_use]
    pub fn action_bounds(&self) -> Bounds<1> {
        self.engine.action_bounds()
    }
}

impl Default for CartPoleEnv {
    fn default() -> Self {
        Self::new(PhysicalConstants::default())
    }
}

impl Env for CartPoleEnv {
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError> {
        let &[force] = action else {
            return Err(EnvError::ActionShape { expected: self.action_size(), got: action.len() });
        };
        let state = self.state.ok_or(EnvError::NotReset)?;

        let outcome = self.engine.step(&state, force)?;
        self.state = Some(outcome.state);

        Ok(Transition {
            observation: outcome.state.to_array().to_vec(),
            reward: outcome.reward,
            done: outcome.done,
            diagnostic: outcome.diagnostic,
        })
    }

    fn reset(&mut self) -> Vec<f64> {
        self.reset_with(ResetOptions::default())
    }

    fn obs_size(&self) -> usize {
        4
    }

    fn action_size(&self) -> usize {
        1
    }
}
