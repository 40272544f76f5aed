//! # Cart-Pole Integration
//!
//! Closed-form accelerations of the cart-pole system, one-step integration
//! with the configured scheme, and folding of the pole angle back into
//! (-π, π].

use std::f64::consts::PI;

use crate::constants::{Integrator, PhysicalConstants};
use crate::types::SimulationState;

/// Linear and angular acceleration for a given state and applied force.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Accelerations {
    pub x_acc: f64,
    pub theta_acc: f64,
}

/// Equations of motion for a frictionless cart with a uniform pole.
#[must_use]
pub fn accelerations(c: &PhysicalConstants, state: &SimulationState, force: f64) -> Accelerations {
    let theta = state.pole_angle;
    let theta_dot = state.pole_angular_velocity;
    let costheta = theta.cos();
    let sintheta = theta.sin();

    let temp = (force + c.pole_mass_length() * theta_dot * theta_dot * sintheta) / c.total_mass();
    let theta_acc = (c.gravity() * sintheta - costheta * temp)
        / (c.pole_half_length()
            * (4.0 / 3.0 - c.pole_mass() * costheta * costheta / c.total_mass()));
    let x_acc = temp - c.pole_mass_length() * theta_acc * costheta / c.total_mass();

    Accelerations { x_acc, theta_acc }
}

/// Advance `state` by `tau` seconds. The returned angle is not folded.
#[must_use]
pub fn integrate(
    integrator: Integrator,
    state: &SimulationState,
    acc: Accelerations,
    tau: f64,
) -> SimulationState {
    let SimulationState {
        cart_position: mut x,
        cart_velocity: mut x_dot,
        pole_angle: mut theta,
        pole_angular_velocity: mut theta_dot,
    } = *state;

    match integrator {
        Integrator::Euler => {
            x += tau * x_dot;
            x_dot += tau * acc.x_acc;
            theta += tau * theta_dot;
            theta_dot += tau * acc.theta_acc;
        }
        Integrator::SemiImplicitEuler => {
            x_dot += tau * acc.x_acc;
            x += tau * x_dot;
            theta_dot += tau * acc.theta_acc;
            theta += tau * theta_dot;
        }
    }

    SimulationState::new(x, x_dot, theta, theta_dot)
}

/// Fold an angle into (-π, π] using its sine and cosine.
///
/// Angles with a non-negative cosine are returned untouched; angles in the
/// lower half-plane are reflected through `asin(sin(theta))`. This is only
/// correct for angles at most one half turn outside the principal range,
/// which is all a single step can produce at realistic timesteps. Several
/// full turns within one step fold to a wrong value.
#[must_use]
pub fn fold_angle(theta: f64) -> f64 {
    if theta.cos() < 0.0 {
        let theta_fixed = theta.sin().asin();
        if theta_fixed < 0.0 {
            let folded = -PI - theta_fixed;
            // -π itself rounds onto the excluded endpoint.
            if folded <= -PI {
                PI
            } else {
                folded
            }
        } else {
            PI - theta_fixed
        }
    } else {
        theta
    }
}

/// One complete physics update: accelerations, integration, angle folding.
#[must_use]
pub fn advance(c: &PhysicalConstants, state: &SimulationState, force: f64) -> SimulationState {
    let acc = accelerations(c, state, force);
    let mut next = integrate(c.integrator(), state, acc, c.tau());
    next.pole_angle = fold_angle(next.pole_angle);
    next
}
