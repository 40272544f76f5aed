use thiserror::Error;

/// Errors raised by the cart-pole engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The control force was non-finite or outside the declared action bound.
    #[error("invalid action: control force {value} is not a finite value within the action bound")]
    InvalidAction { value: f64 },
    /// The engine was constructed with unusable physical constants.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
