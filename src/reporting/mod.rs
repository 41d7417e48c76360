// src/reporting/mod.rs
//! Report rendering: colored console text, GraphViz DOT and JSON.

pub mod console;
pub mod dot;
pub mod json;

use clap::ValueEnum;

use crate::pipeline::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Dot,
}

/// Renders `analysis` in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(analysis: &Analysis, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(console::render(analysis)),
        OutputFormat::Json => json::render(analysis),
        OutputFormat::Dot => Ok(dot::render(analysis)),
    }
}
