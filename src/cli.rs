// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The surface is deliberately small: a positional config path and a single
//! `--root` override. Logging verbosity comes from the `RENDERBOT_LOG`
//! environment variable instead of a flag (see `logging.rs`).

use clap::Parser;

/// Command-line arguments for `renderbot`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "renderbot",
    version,
    about = "Batch-drive a renderer executable over configured takes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (JSON).
    ///
    /// Default: `renderbot.json` in the current working directory.
    #[arg(value_name = "CONFIG", default_value = "renderbot.json")]
    pub config: String,

    /// Root directory scene paths are resolved against.
    ///
    /// Overrides any `root-dir` from the config file.
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
