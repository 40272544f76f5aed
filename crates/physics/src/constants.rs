//! Physical constants for the cart-pole system.
//!
//! [`PhysicalConstants`] is validated once at construction and is immutable
//! afterwards; the derived quantities (`total_mass`, `pole_mass_length`) are
//! computed there and never change. [`ConstantsConfig`] is the raw,
//! deserializable form loaded from configuration files.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Numerical integration scheme used to advance the state by one timestep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Integrator {
    /// Explicit Euler: positions advance with the velocities from before the step.
    #[default]
    Euler,
    /// Semi-implicit Euler: velocities first, then positions with the new velocities.
    SemiImplicitEuler,
}

impl std::str::FromStr for Integrator {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(Self::Euler),
            "semi-implicit-euler" | "semi_implicit_euler" => Ok(Self::SemiImplicitEuler),
            other => Err(PhysicsError::Configuration(format!("unknown integrator '{other}'"))),
        }
    }
}

/// Immutable physical constants of one engine instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    gravity: f64,
    cart_mass: f64,
    pole_mass: f64,
    total_mass: f64,
    pole_half_length: f64,
    pole_mass_length: f64,
    tau: f64,
    integrator: Integrator,
}

impl PhysicalConstants {
    /// Validates the constants and derives the combined quantities.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Configuration`] if a mass, the pole half length
    /// or the timestep is not a positive finite number, or gravity is not finite.
    pub fn new(
        gravity: f64,
        cart_mass: f64,
        pole_mass: f64,
        pole_half_length: f64,
        tau: f64,
        integrator: Integrator,
    ) -> Result<Self, PhysicsError> {
        require_positive("cart_mass", cart_mass)?;
        require_positive("pole_mass", pole_mass)?;
        require_positive("pole_half_length", pole_half_length)?;
        require_positive("tau", tau)?;
        if !gravity.is_finite() {
            return Err(PhysicsError::Configuration(format!(
                "gravity must be finite, got {gravity}"
            )));
        }

        Ok(Self {
            gravity,
            cart_mass,
            pole_mass,
            total_mass: cart_mass + pole_mass,
            pole_half_length,
            pole_mass_length: pole_mass * pole_half_length,
            tau,
            integrator,
        })
    }

    #[must_use]
    pub const fn gravity(&self) -> f64 {
        self.gravity
    }

    #[must_use]
    pub const fn cart_mass(&self) -> f64 {
        self.cart_mass
    }

    #[must_use]
    pub const fn pole_mass(&self) -> f64 {
        self.pole_mass
    }

    /// `cart_mass + pole_mass`.
    #[must_use]
    pub const fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Half of the pole length (m).
    #[must_use]
    pub const fn pole_half_length(&self) -> f64 {
        self.pole_half_length
    }

    /// `pole_mass * pole_half_length`.
    #[must_use]
    pub const fn pole_mass_length(&self) -> f64 {
        self.pole_mass_length
    }

    /// Seconds between state updates.
    #[must_use]
    pub const fn tau(&self) -> f64 {
        self.tau
    }

    #[must_use]
    pub const fn integrator(&self) -> Integrator {
        self.integrator
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        let cart_mass = 1.0;
        let pole_mass = 0.1;
        let pole_half_length = 0.5;
        Self {
            gravity: 9.8,
            cart_mass,
            pole_mass,
            total_mass: cart_mass + pole_mass,
            pole_half_length,
            pole_mass_length: pole_mass * pole_half_length,
            tau: 0.02,
            integrator: Integrator::Euler,
        }
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), PhysicsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::Configuration(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Raw constants as read from a configuration file. Missing fields take
/// the classic cart-pole defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantsConfig {
    pub gravity: f64,
    pub cart_mass: f64,
    pub pole_mass: f64,
    pub pole_half_length: f64,
    pub tau: f64,
    pub integrator: Integrator,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            pole_half_length: 0.5,
            tau: 0.02,
            integrator: Integrator::Euler,
        }
    }
}

impl TryFrom<ConstantsConfig> for PhysicalConstants {
    type Error = PhysicsError;

    fn try_from(config: ConstantsConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.gravity,
            config.cart_mass,
            config.pole_mass,
            config.pole_half_length,
            config.tau,
            config.integrator,
        )
    }
}
