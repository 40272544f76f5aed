use serde::{Deserialize, Serialize};

/// Cart-pole state `(x, x_dot, theta, theta_dot)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Cart position along the track (m).
    pub cart_position: f64,
    /// Cart velocity (m/s).
    pub cart_velocity: f64,
    /// Pole angle from upright (rad), kept in (-π, π].
    pub pole_angle: f64,
    /// Pole angular velocity (rad/s).
    pub pole_angular_velocity: f64,
}

impl SimulationState {
    #[must_use]
    pub const fn new(
        cart_position: f64,
        cart_velocity: f64,
        pole_angle: f64,
        pole_angular_velocity: f64,
    ) -> Self {
        Self { cart_position, cart_velocity, pole_angle, pole_angular_velocity }
    }

    /// Observation vector in `[x, x_dot, theta, theta_dot]` order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.cart_position, self.cart_velocity, self.pole_angle, self.pole_angular_velocity]
    }
}

impl From<[f64; 4]> for SimulationState {
    fn from([x, x_dot, theta, theta_dot]: [f64; 4]) -> Self {
        Self::new(x, x_dot, theta, theta_dot)
    }
}

impl From<SimulationState> for [f64; 4] {
    fn from(state: SimulationState) -> Self {
        state.to_array()
    }
}

/// Failure thresholds for the episode.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Cart position magnitude beyond which the episode ends (m).
    pub x_threshold: f64,
    /// Pole angle magnitude beyond which the episode ends (rad).
    pub angle_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            x_threshold: 2.4,
            angle_threshold: 45.0 * 2.0 * std::f64::consts::PI / 360.0,
        }
    }
}

impl Thresholds {
    /// Whether `state` lies outside the failure region.
    #[must_use]
    pub fn violated_by(&self, state: &SimulationState) -> bool {
        state.cart_position < -self.x_threshold
            || state.cart_position > self.x_threshold
            || state.pole_angle < -self.angle_threshold
            || state.pole_angle > self.angle_threshold
    }
}

/// Symmetric box bounds `[-high, high]` per dimension.
///
/// Used for documentation and validation only, never to clamp the state.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds<const N: usize> {
    pub low: [f64; N],
    pub high: [f64; N],
}

impl<const N: usize> Bounds<N> {
    #[must_use]
    pub fn symmetric(high: [f64; N]) -> Self {
        Self { low: high.map(|h| -h), high }
    }

    /// True when every component is finite and inside the box.
    #[must_use]
    pub fn contains(&self, value: &[f64; N]) -> bool {
        value
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| v.is_finite() && *v >= *lo && *v <= *hi)
    }
}

impl Thresholds {
    /// Declared observation bounds: twice the failure thresholds, velocities unbounded.
    #[must_use]
    pub fn observation_bounds(&self) -> Bounds<4> {
        Bounds::symmetric([
            self.x_threshold * 2.0,
            f64::MAX,
            self.angle_threshold * 2.0,
            f64::MAX,
        ])
    }
}

/// Declared action bounds: a single unconstrained force.
#[must_use]
pub fn action_bounds() -> Bounds<1> {
    Bounds::symmetric([f64::MAX])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_bounds_double_thresholds() {
        let b = Thresholds::default().observation_bounds();
        assert_eq!(b.high[0], 4.8);
        assert!((b.high[2] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(b.low[1], -f64::MAX);
    }

    #[test]
    fn action_bounds_reject_only_non_finite() {
        let b = action_bounds();
        assert!(b.contains(&[1.0e300]));
        assert!(b.contains(&[-f64::MAX]));
        assert!(!b.contains(&[f64::NAN]));
        assert!(!b.contains(&[f64::INFINITY]));
    }
}
