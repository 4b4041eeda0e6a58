// src/errors.rs

//! Crate-wide error types.
//!
//! Failures that abort a single render attempt are typed so the retry loop
//! can contain them without guessing; everything above attempt granularity
//! (config loading, startup) rides on `anyhow`.

use std::io;

use thiserror::Error;

pub use anyhow::{Error, Result};

/// A failure that ends one render attempt before the process produced an
/// exit status.
///
/// These are caught by the retry loop in `engine`; each one consumes an
/// attempt and never propagates past the per-take loop.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// A required take field was absent from both the take and `defaults`.
    #[error("missing required take field '{0}'")]
    MissingField(&'static str),

    /// The renderer executable could not be spawned.
    #[error("failed to launch '{program}'")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}
