// src/reporting/dot.rs
//! GraphViz DOT output.
//!
//! Clusters run bottom to top, the deepest level first, and take the clean
//! architecture layer names counted from the deepest level.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::pipeline::Analysis;

const LAYER_NAMES: [&str; 4] = [
    "Enterprise Business Rules",
    "Application Business Rules",
    "Interface Adapters",
    "Frameworks & Drivers",
];

const LAYER_COLORS: [&str; 4] = ["#f7e6ff", "#fff2e6", "#e6ffe6", "#e6f7ff"];
const FALLBACK_COLOR: &str = "#f2f2f2";

const ENTRY_FILL: &str = "#ffcccc";
const UTILITY_FILL: &str = "#ffffcc";

/// Renders the leveled graph as a DOT document.
#[must_use]
pub fn render(analysis: &Analysis) -> String {
    let mut out = String::with_capacity(4096);
    let _ = writeln!(out, "digraph DependencyGraph {{");
    let _ = writeln!(
        out,
        "  graph [rankdir=BT, fontname=\"Arial\", splines=ortho, ranksep=1.5];"
    );
    let _ = writeln!(
        out,
        "  node [shape=box, style=filled, fontname=\"Arial\", fontsize=11];"
    );
    let _ = writeln!(out, "  edge [fontname=\"Arial\", fontsize=9];");
    let _ = writeln!(out);

    write_clusters(&mut out, analysis);
    write_edges(&mut out, analysis);

    let _ = writeln!(out, "}}");
    out
}

/// Layer label for the cluster at `display`, counted from the deepest level.
#[must_use]
pub fn layer_name(display: usize) -> Option<&'static str> {
    LAYER_NAMES.get(display).copied()
}

fn write_clusters(out: &mut String, analysis: &Analysis) {
    let partition = &analysis.report.partition;
    let deepest = partition.len().saturating_sub(1);

    for (index, members) in partition.iter().rev() {
        let display = deepest - index;
        let label = match layer_name(display) {
            Some(name) => format!("Level {display}: {name}"),
            None => format!("Level {display}"),
        };
        let color = LAYER_COLORS.get(display).copied().unwrap_or(FALLBACK_COLOR);

        let _ = writeln!(out, "  subgraph cluster_level_{display} {{");
        let _ = writeln!(out, "    label={};", quote(&label));
        let _ = writeln!(out, "    style=filled;");
        let _ = writeln!(out, "    color=\"{color}\";");
        for path in members {
            write_node(out, analysis, path);
        }
        let _ = writeln!(out, "  }}");
        let _ = writeln!(out);
    }
}

fn write_node(out: &mut String, analysis: &Analysis, path: &str) {
    let classifier = &analysis.classifier;
    let (fill, tooltip) = if classifier.is_entry_point(path) {
        (ENTRY_FILL, Some("Entry Point"))
    } else if classifier.is_utility(path) {
        (UTILITY_FILL, Some("Utility"))
    } else {
        ("white", None)
    };

    let _ = write!(
        out,
        "    {} [label={}, fillcolor=\"{fill}\"",
        quote(path),
        quote(short_name(path))
    );
    if let Some(tip) = tooltip {
        let _ = write!(out, ", tooltip=\"{tip}\"");
    }
    let _ = writeln!(out, "];");
}

fn write_edges(out: &mut String, analysis: &Analysis) {
    let flagged: HashSet<(&str, &str)> = analysis
        .report
        .violations
        .iter()
        .map(|v| (v.from_path.as_str(), v.to_path.as_str()))
        .collect();

    for node in analysis.graph.nodes() {
        for target in analysis.graph.resolved_imports(&node.path) {
            if flagged.contains(&(node.path.as_str(), target.as_str())) {
                let _ = writeln!(
                    out,
                    "  {} -> {} [color=\"red\", penwidth=2.0, tooltip=\"Violation\"];",
                    quote(&node.path),
                    quote(target)
                );
            } else {
                let _ = writeln!(
                    out,
                    "  {} -> {} [color=\"blue\"];",
                    quote(&node.path),
                    quote(target)
                );
            }
        }
    }
}

fn short_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::layering::{self, Classifier, Mode};
    use crate::graph::{PackageGraph, PackageNode};
    use crate::module::ModuleInfo;
    use std::path::PathBuf;

    fn analysis(nodes: Vec<PackageNode>, mode: Mode) -> Analysis {
        let graph: PackageGraph = nodes.into_iter().collect();
        let classifier = Classifier::for_module("m");
        let report = layering::analyze(&graph, &classifier, mode);
        Analysis {
            module: ModuleInfo {
                root: PathBuf::from("."),
                path: "m".to_string(),
            },
            graph,
            classifier,
            report,
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn test_layers_named_from_deepest() {
        let a = analysis(
            vec![
                PackageNode::new("m").with_imports(["m/app"]),
                PackageNode::new("m/app").with_imports(["m/domain"]),
                PackageNode::new("m/domain"),
            ],
            Mode::Lenient,
        );
        let dot = render(&a);
        assert!(dot.starts_with("digraph DependencyGraph {"));
        assert!(dot.contains("rankdir=BT"));
        assert!(dot.contains("\"Level 0: Enterprise Business Rules\""));
        assert!(dot.contains("\"Level 2: Interface Adapters\""));
        assert!(dot.ends_with("}\n"));

        let deepest = dot.find("cluster_level_0").unwrap_or(usize::MAX);
        let shallowest = dot.find("cluster_level_2").unwrap_or(0);
        assert!(deepest < shallowest);
    }

    #[test]
    fn test_node_fills() {
        let a = analysis(
            vec![
                PackageNode::new("m/cmd/tool").with_imports(["m/pkg/log"]),
                PackageNode::new("m/pkg/log"),
            ],
            Mode::Lenient,
        );
        let dot = render(&a);
        assert!(dot.contains("\"m/cmd/tool\" [label=\"tool\", fillcolor=\"#ffcccc\""));
        assert!(dot.contains("\"m/pkg/log\" [label=\"log\", fillcolor=\"#ffffcc\""));
    }

    #[test]
    fn test_violation_edge_is_red() {
        let a = analysis(
            vec![
                PackageNode::new("m").with_imports(["m/api/v1/handlers", "m/store"]),
                PackageNode::new("m/api/v1/handlers").with_imports(["m/store"]),
                PackageNode::new("m/store"),
            ],
            Mode::Lenient,
        );
        assert_eq!(a.report.violations.len(), 1);
        let dot = render(&a);
        assert!(dot.contains("\"m/api/v1/handlers\" -> \"m/store\" [color=\"red\""));
    }

    #[test]
    fn test_clean_edge_is_blue() {
        let a = analysis(
            vec![
                PackageNode::new("m/a").with_imports(["m/b"]),
                PackageNode::new("m/b"),
            ],
            Mode::Strict,
        );
        let dot = render(&a);
        assert!(dot.contains("\"m/a\" -> \"m/b\" [color=\"blue\"];"));
        assert!(!dot.contains("color=\"red\""));
    }

    #[test]
    fn test_names_beyond_four_layers() {
        assert_eq!(layer_name(3), Some("Frameworks & Drivers"));
        assert_eq!(layer_name(4), None);
    }
}
