#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-Pole Physics
//!
//! Discrete-time simulator of an inverted pendulum on a cart driven by a
//! continuous control force.
//!
//! ## Key Components
//!
//! -   **State:** [`SimulationState`] is a plain `Copy` value holding cart
//!     position, cart velocity, pole angle and pole angular velocity.
//! -   **Constants:** [`PhysicalConstants`] is validated once at construction
//!     and selects the [`Integrator`] (explicit or semi-implicit Euler).
//! -   **Engine:** [`CartPole`] resets and steps episodes, shapes the reward
//!     with a [`RewardConfig`] and tracks termination through
//!     [`EpisodePhase`].
//!
//! ## Usage
//!
//! ```rust
//! use physics::{CartPole, ResetOptions};
//!
//! let mut engine = CartPole::default();
//! let mut rng = fastrand::Rng::with_seed(7);
//! let mut state = engine.reset(&mut rng, ResetOptions::default().with_initial_angle(0.0));
//!
//! let outcome = engine.step(&state, 0.0)?;
//! state = outcome.state;
//! assert!(!outcome.done);
//! # let _ = state;
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod cartpole;
pub mod constants;
pub mod error;
pub mod integrator;
pub mod reward;
pub mod types;

pub use cartpole::{
    CartPole, Diagnostic, EpisodeCounters, EpisodePhase, ResetOptions, StepOutcome,
    DEFAULT_EPISODE_LENGTH, INITIAL_STATE_RANGE,
};
pub use constants::{ConstantsConfig, Integrator, PhysicalConstants};
pub use error::PhysicsError;
pub use reward::RewardConfig;
pub use types::{action_bounds, Bounds, SimulationState, Thresholds};
