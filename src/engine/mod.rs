// src/engine/mod.rs

//! Retry orchestration for renderbot.
//!
//! The orchestrator walks the configured takes in order and, for each one,
//! repeats resolve -> build -> spawn -> supervise until the renderer exits
//! cleanly or the attempt ceiling is reached. Failures of any kind are
//! contained at attempt granularity; a broken take never stops the run.

pub mod orchestrator;

pub use orchestrator::{
    AttemptOutcome, Orchestrator, OrchestratorOptions, TakeOutcome, TakeReport,
};
