//! cli/mod.rs
//!
//! The command line front end. Everything here is plumbing around `core`:
//! - `args`: the clap command surface
//! - `commands`: per-file batch operations over a target
//! - `app`: logging setup and dispatch

pub mod app;
pub mod args;
pub mod commands;

pub use app::run;
pub use args::{Args, Commands};
pub use commands::{CommandError, RunOptions, Runner};
