// src/cli/mod.rs
//! Command-line surface.

pub mod args;
pub mod dispatch;

pub use args::Cli;
pub use dispatch::execute;
