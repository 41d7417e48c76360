// src/graph/layering/cycles.rs
//! Import cycle diagnostics.
//!
//! Go refuses to compile import cycles, so a cycle here usually means the
//! package map was built from a broken tree. Reported as a warning only.

use std::collections::HashSet;

use crate::graph::package::{PackageGraph, PackagePath};

/// Detects cycles among in-graph imports.
/// Each cycle lists its packages in import order and repeats the first one at the end.
#[must_use]
pub fn detect_cycles(graph: &PackageGraph) -> Vec<Vec<PackagePath>> {
    let mut state = DfsState::default();

    for node in graph.paths() {
        if !state.visited.contains(node.as_str()) {
            dfs(node, graph, &mut state);
        }
    }

    state.cycles
}

#[derive(Default)]
struct DfsState {
    visited: HashSet<PackagePath>,
    recursion_stack: HashSet<PackagePath>,
    path_stack: Vec<PackagePath>,
    cycles: Vec<Vec<PackagePath>>,
}

fn dfs(node: &str, graph: &PackageGraph, state: &mut DfsState) {
    state.visited.insert(node.to_string());
    state.recursion_stack.insert(node.to_string());
    state.path_stack.push(node.to_string());

    for neighbor in graph.resolved_imports(node) {
        visit_neighbor(neighbor, graph, state);
    }

    state.recursion_stack.remove(node);
    state.path_stack.pop();
}

fn visit_neighbor(neighbor: &str, graph: &PackageGraph, state: &mut DfsState) {
    if !state.visited.contains(neighbor) {
        dfs(neighbor, graph, state);
    } else if state.recursion_stack.contains(neighbor) {
        record_cycle(neighbor, state);
    }
}

fn record_cycle(neighbor: &str, state: &mut DfsState) {
    if let Some(pos) = state.path_stack.iter().position(|x| x == neighbor) {
        let mut cycle: Vec<PackagePath> = state.path_stack.iter().skip(pos).cloned().collect();
        cycle.push(neighbor.to_string());
        state.cycles.push(cycle);
    }
}
