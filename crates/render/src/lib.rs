#![deny(clippy::all, clippy::pedantic)]
//! # Cart-Pole Scene
//!
//! Rendering collaborators for the cart-pole engine. Nothing here draws:
//! [`scene`] turns a [`physics::SimulationState`] into pixel-space geometry
//! for whatever front-end draws it, and [`downscale`] shrinks captured frames
//! for pixel-based agents.

pub mod downscale;
pub mod scene;

pub use downscale::{downscale, DownscaleError, Frame};
pub use scene::{SceneFrame, SceneLayout};
