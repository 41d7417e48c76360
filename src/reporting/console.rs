// src/reporting/console.rs
//! Colored text report.

use std::fmt::Write as _;

use colored::Colorize;

use crate::graph::layering::{PackageInfo, Violation};
use crate::pipeline::Analysis;

/// Renders the full text report.
#[must_use]
pub fn render(analysis: &Analysis) -> String {
    let mut out = String::new();
    write_header(&mut out, analysis);
    write_levels(&mut out, analysis);
    write_diagnostics(&mut out, analysis);
    write_cycles(&mut out, analysis);
    write_violations(&mut out, &analysis.report.violations);
    write_summary(&mut out, analysis);
    out
}

fn write_header(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(
        out,
        "{} {} ({} mode)",
        "STRATUM".cyan().bold(),
        analysis.module.path,
        analysis.report.mode
    );
}

fn write_levels(out: &mut String, analysis: &Analysis) {
    for (index, members) in analysis.report.partition.iter() {
        let names: Vec<String> = members
            .iter()
            .map(|p| label_package(analysis, p))
            .collect();
        let _ = writeln!(
            out,
            "{} {}",
            format!("[INFO]     Level {index}:").cyan(),
            names.join(", ")
        );
    }
}

fn label_package(analysis: &Analysis, path: &str) -> String {
    let short = match analysis.classifier.relative(path) {
        "" => path,
        rel => rel,
    };
    if analysis.classifier.is_entry_point(path) {
        format!("{short} {}", "(entry)".dimmed())
    } else {
        short.to_string()
    }
}

fn write_diagnostics(out: &mut String, analysis: &Analysis) {
    for d in &analysis.diagnostics {
        let _ = writeln!(out, "{} {d}", "[ERROR]   ".red());
    }
}

fn write_cycles(out: &mut String, analysis: &Analysis) {
    for cycle in &analysis.report.cycles {
        let _ = writeln!(
            out,
            "{} import cycle: {}",
            "[WARNING] ".yellow(),
            cycle.join(" → ")
        );
    }
}

fn write_violations(out: &mut String, violations: &[Violation]) {
    let mut current_level = None;
    for v in violations {
        if current_level != Some(v.from_level) {
            current_level = Some(v.from_level);
            let _ = writeln!(out, "\n{} {}", "▸".yellow(), format!("Level {}", v.from_level).bold());
        }
        let _ = writeln!(out, "{} {v}", "[WARNING] ".yellow());
        let _ = writeln!(out, "          {}", v.suggestion.dimmed());
    }
}

fn write_summary(out: &mut String, analysis: &Analysis) {
    let report = &analysis.report;
    let count = report.violations.len();
    let _ = writeln!(
        out,
        "\n{} packages | {} levels | {} violations",
        analysis.graph.len(),
        report.partition.len(),
        if count == 0 {
            count.to_string().green()
        } else {
            count.to_string().red()
        }
    );
    if report.passed() {
        let _ = writeln!(out, "{}", "✓ All imports respect the layering.".green());
    } else {
        let _ = writeln!(out, "{}", "✗ Layering violations found.".red().bold());
    }
}

/// Renders the detail view for one package.
#[must_use]
pub fn render_package(info: &PackageInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "[INFO]     Package:".cyan(), info.path);
    let level = info
        .level
        .map_or_else(|| "-".to_string(), |l| l.to_string());
    let _ = writeln!(out, "           level: {level}");
    if info.entry_point {
        let _ = writeln!(out, "           entry point");
    }
    if info.utility {
        let _ = writeln!(out, "           utility");
    }
    let _ = writeln!(out, "           files: {}", info.files.join(", "));
    for import in &info.imports {
        let level = import
            .level
            .map_or_else(|| "outside graph".to_string(), |l| format!("level {l}"));
        let _ = writeln!(out, "           imports {} ({level})", import.path);
    }
    for importer in &info.imported_by {
        let _ = writeln!(out, "           imported by {importer}");
    }
    out
}
