// src/lib.rs
//! Layered-architecture checker for Go modules.
//!
//! Packages of a module are given depth levels from their import graph and
//! directory structure; imports that break the layering are reported.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod module;
pub mod pipeline;
pub mod reporting;
