// src/config/validate.rs

use std::collections::HashSet;

use anyhow::{Result, anyhow};
use tracing::warn;

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `render-exe` is not empty
/// - take names, where present, are unique
/// - any explicit `step` is >= 1
///
/// It does **not** check that every take has `name`/`file`/`start`/`end`:
/// those may be supplied by `defaults`, and their absence is an attempt-level
/// error raised during resolution.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_render_exe(cfg)?;
    validate_take_names(cfg)?;
    validate_steps(cfg)?;

    if cfg.takes.is_empty() {
        warn!("config contains no takes; nothing will be rendered");
    }

    Ok(())
}

fn validate_render_exe(cfg: &ConfigFile) -> Result<()> {
    if cfg.render_exe.trim().is_empty() {
        return Err(anyhow!("config field 'render-exe' must not be empty"));
    }
    Ok(())
}

fn validate_take_names(cfg: &ConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for take in cfg.takes.iter() {
        if let Some(name) = take.name.as_deref() {
            if !seen.insert(name) {
                return Err(anyhow!("duplicate take name '{}'", name));
            }
        }
    }
    Ok(())
}

fn validate_steps(cfg: &ConfigFile) -> Result<()> {
    if let Some(step) = cfg.defaults.step {
        if step < 1 {
            return Err(anyhow!("defaults has step {}; step must be >= 1", step));
        }
    }
    for (idx, take) in cfg.takes.iter().enumerate() {
        if let Some(step) = take.step {
            if step < 1 {
                let label = take.name.as_deref().unwrap_or("?");
                return Err(anyhow!(
                    "take '{}' (#{}) has step {}; step must be >= 1",
                    label,
                    idx + 1,
                    step
                ));
            }
        }
    }
    Ok(())
}
