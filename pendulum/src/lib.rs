//! # Pendulum: continuous-force cart-pole
//!
//! Documentation entry point and demonstration driver for the workspace.
//!
//! ## The Crates
//!
//! -   **[`physics`]:** the dynamics engine. Closed-form cart-pole equations
//!     of motion, explicit and semi-implicit Euler integration, angle folding,
//!     quadratic reward shaping and the termination state machine.
//! -   **[`rl`]:** the Gym-style [`rl::Env`] trait, seeding, the
//!     [`rl::CartPoleEnv`] facade and linear-policy rollouts.
//! -   **[`render`]:** projection of the state onto 2D pixel space and block
//!     downscaling of captured frames.
//!
//! The `pendulum` binary runs one episode with a hand-tuned linear
//! controller and prints the number of steps and the accumulated reward.

pub mod app;
pub mod config;
