// src/report.rs

//! Operator-facing console reporting.
//!
//! Everything here writes plain lines to stdout; `tracing` diagnostics go to
//! stderr so the two streams never mix. The banner format is part of the
//! CLI contract and matches what wrapper scripts expect.

use crate::engine::AttemptOutcome;
use crate::errors::Error;
use crate::take::Invocation;

/// Sink for user-visible status updates.
///
/// The orchestrator and supervisor report through this trait, so tests can
/// observe exactly what an operator would see.
pub trait Reporter: Send + Sync {
    /// A new attempt is starting; `invocation` is the exact command line.
    fn attempt_started(&self, name: &str, invocation: &Invocation);

    /// One line of renderer output, forwarded as it streams in.
    fn output_line(&self, line: &str);

    /// The renderer went quiet and a keepalive is about to be sent.
    fn keepalive(&self);

    /// The keepalive write failed or timed out.
    fn keepalive_failed(&self);

    /// The attempt reached a terminal state.
    fn attempt_finished(&self, name: &str, outcome: AttemptOutcome);

    /// An attempt died before the renderer produced an exit status.
    fn internal_error(&self, err: &Error);
}

/// Prints reports to stdout in the renderbot banner format.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn attempt_started(&self, name: &str, invocation: &Invocation) {
        println!();
        println!("=== Starting render '{name}' ===");
        println!();
        println!("$ {}", invocation.command_line());
        println!();
    }

    fn output_line(&self, line: &str) {
        println!("{line}");
    }

    fn keepalive(&self) {
        println!("No response.. trying to send CRLF");
    }

    fn keepalive_failed(&self) {
        println!("Failed to send CRLF...");
    }

    fn attempt_finished(&self, name: &str, outcome: AttemptOutcome) {
        println!();
        println!("=== Finished render '{name}' ===");
        println!();
        match outcome {
            AttemptOutcome::HungTimeout => println!("Timeout... Renderer probably hanged"),
            AttemptOutcome::Exited(0) => println!("Success!"),
            AttemptOutcome::Exited(code) => println!("Error code: {code}"),
        }
    }

    fn internal_error(&self, err: &Error) {
        println!();
        println!("=== renderbot internal error ===");
        println!();
        println!("{err:?}");
    }
}
