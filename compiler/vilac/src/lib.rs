//! Vila toolchain CLI support.
//!
//! The binary in `main.rs` only parses arguments; everything it runs lives
//! here so it can be tested without spawning a process.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
