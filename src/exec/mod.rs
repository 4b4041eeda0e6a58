// src/exec/mod.rs

//! Renderer process execution.
//!
//! This module owns everything that touches a live subprocess:
//!
//! - [`launch`] spawns the renderer with all three standard streams piped
//!   and merges stdout/stderr into a single stream of output lines.
//! - [`supervisor`] drives the liveness loop that decides whether a running
//!   attempt has exited, gone quiet, or hung.
//!
//! Nothing outside this module holds a process handle; the orchestrator only
//! ever sees the terminal [`crate::engine::AttemptOutcome`].

pub mod launch;
pub mod supervisor;

pub use launch::{RenderChild, spawn_renderer};
pub use supervisor::{Supervisor, SupervisorTiming};
