// src/take/mod.rs

//! Take resolution and renderer command construction.
//!
//! - [`resolve`] overlays one take onto the configured defaults and produces
//!   a fully-resolved [`JobSpec`].
//! - [`invocation`] turns a `JobSpec` into the exact renderer command line.
//!
//! Both halves are pure: no I/O, no shared state, same inputs in, same
//! outputs out. That is what makes retries reproducible.

pub mod invocation;
pub mod resolve;

pub use invocation::Invocation;
pub use resolve::{JobSpec, resolve};
