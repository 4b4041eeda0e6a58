// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod take;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::engine::{Orchestrator, OrchestratorOptions, TakeOutcome};
use crate::report::ConsoleReporter;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the retry orchestrator
/// - console reporting
/// - Ctrl-C handling
///
/// Per-take failures are reported and logged but never turn into an error
/// here: once the run has started, it finishes the whole take list and the
/// process exits 0.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;

    let orchestrator = Orchestrator::new(OrchestratorOptions::default());
    let reporter = ConsoleReporter;

    // Ctrl-C abandons the in-flight attempt; renderers are spawned with
    // kill_on_drop, so nothing is left running.
    let reports = tokio::select! {
        reports = orchestrator.run_all(&cfg, args.root.as_deref(), &reporter) => reports,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted; abandoning current render");
            return Ok(());
        }
    };

    for report in &reports {
        match report.outcome {
            TakeOutcome::Succeeded => {
                info!(take = %report.name, attempts = report.attempts, "take succeeded");
            }
            TakeOutcome::Abandoned => {
                warn!(
                    take = %report.name,
                    attempts = report.attempts,
                    "take abandoned after exhausting attempts"
                );
            }
        }
    }

    Ok(())
}
