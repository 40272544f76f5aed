use physics::{Diagnostic, PhysicsError};
use thiserror::Error;

/// Errors surfaced by an [`Env`] implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("action has {got} components, expected {expected}")]
    ActionShape { expected: usize, got: usize },
    #[error("step() called before the first reset()")]
    NotReset,
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}

/// One environment transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub observation: Vec<f64>,
    pub reward: f64,
    pub done: bool,
    /// Set when the step was taken after the episode had already ended.
    pub diagnostic: Option<Diagnostic>,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation vector, a reward
/// signal, and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action vector of length
    /// [`action_size`](Env::action_size).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError`] when the action has the wrong shape or is rejected
    /// by the simulation, or when the environment has not been reset.
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError>;

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f64>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}
