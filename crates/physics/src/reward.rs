//! Quadratic reward shaping around a reference state.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::types::{SimulationState, Thresholds};

const DIMENSIONS: [&str; 4] = [
    "cart_position",
    "cart_velocity",
    "pole_angle",
    "pole_angular_velocity",
];

/// Weights and normalization of the shaped reward.
///
/// The reward for a live state is `max_reward - dᵀQd` with
/// `d = (state - reference) / max_deviation` and `Q` diagonal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    reference: [f64; 4],
    max_deviation: [f64; 4],
    weights: [f64; 4],
    max_reward: f64,
}

impl RewardConfig {
    /// Weight only cart position and pole angle, normalized by the thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Configuration`] if a weighted dimension's
    /// normalizer (threshold minus reference) is not a positive finite number.
    pub fn new(
        thresholds: &Thresholds,
        reference: SimulationState,
        x_coefficient: f64,
        theta_coefficient: f64,
    ) -> Result<Self, PhysicsError> {
        let config = Self::unchecked(thresholds, reference, x_coefficient, theta_coefficient);
        for ((name, weight), deviation) in
            DIMENSIONS.iter().zip(config.weights).zip(config.max_deviation)
        {
            if weight != 0.0 && !(deviation.is_finite() && deviation > 0.0) {
                return Err(PhysicsError::Configuration(format!(
                    "reward normalizer for {name} must be a positive finite number, got {deviation}"
                )));
            }
        }
        Ok(config)
    }

    fn unchecked(
        thresholds: &Thresholds,
        reference: SimulationState,
        x_coefficient: f64,
        theta_coefficient: f64,
    ) -> Self {
        let reference = reference.to_array();
        let limits = [thresholds.x_threshold, 1.0, thresholds.angle_threshold, 1.0];
        let max_deviation = std::array::from_fn(|i| limits[i] - reference[i]);
        Self {
            reference,
            max_deviation,
            weights: [x_coefficient, 0.0, theta_coefficient, 0.0],
            max_reward: x_coefficient + theta_coefficient,
        }
    }

    #[must_use]
    pub fn reference(&self) -> SimulationState {
        SimulationState::from(self.reference)
    }

    #[must_use]
    pub const fn max_deviation(&self) -> [f64; 4] {
        self.max_deviation
    }

    /// Diagonal of `Q`.
    #[must_use]
    pub const fn weights(&self) -> [f64; 4] {
        self.weights
    }

    /// Best achievable per-step reward.
    #[must_use]
    pub const fn max_reward(&self) -> f64 {
        self.max_reward
    }

    /// `dᵀQd` for `state`.
    #[must_use]
    pub fn quadratic_deviation(&self, state: &SimulationState) -> f64 {
        state
            .to_array()
            .iter()
            .zip(self.reference)
            .zip(self.max_deviation)
            .zip(self.weights)
            .filter(|(_, q)| *q != 0.0)
            .map(|(((s, r), m), q)| {
                let d = (s - r) / m;
                q * d * d
            })
            .sum()
    }

    /// `max_reward - dᵀQd`.
    #[must_use]
    pub fn shaped(&self, state: &SimulationState) -> f64 {
        self.max_reward - self.quadratic_deviation(state)
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self::unchecked(&Thresholds::default(), SimulationState::default(), 1.0, 1.0)
    }
}
