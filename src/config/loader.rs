// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs JSON deserialization; it does **not** perform semantic
/// validation (unique names, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing JSON config from {:?}", path))?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads JSON.
/// - Applies field defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - an empty `render-exe`,
///   - duplicate take names,
///   - nonsensical frame steps.
///
/// Whether a take has all its required fields is only known after overlaying
/// it onto `defaults`, so that check lives in `take::resolve`, not here.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}
