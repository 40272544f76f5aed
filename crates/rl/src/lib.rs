#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Reinforcement learning plumbing around the cart-pole engine: the [`Env`]
//! trait, seeding, the [`CartPoleEnv`] facade and simple policy rollouts.

pub mod cartpole_env;
pub mod env;
pub mod policy;
pub mod seeding;

pub use cartpole_env::CartPoleEnv;
pub use env::{Env, EnvError, Transition};
pub use policy::{rollout, EpisodeSummary, LinearPolicy, DEMO_GAINS};
