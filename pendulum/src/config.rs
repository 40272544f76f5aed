//! Loading physical constants from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use physics::{ConstantsConfig, Integrator, PhysicalConstants};

/// Read constants from `path` (defaults when `None`), apply the integrator
/// override and validate the result.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or the constants are invalid.
pub fn load_constants(
    path: Option<&Path>,
    integrator: Option<Integrator>,
) -> Result<PhysicalConstants> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading constants from {}", path.display()))?;
            serde_json::from_str::<ConstantsConfig>(&text)
                .with_context(|| format!("parsing constants in {}", path.display()))?
        }
        None => ConstantsConfig::default(),
    };
    if let Some(integrator) = integrator {
        config.integrator = integrator;
    }
    tracing::debug!(?config, "physical constants loaded");
    PhysicalConstants::try_from(config).context("invalid physical constants")
}
