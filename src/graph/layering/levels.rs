// src/graph/layering/levels.rs
//! Level assignment.
//!
//! Levels come from two signals: how far a package is from the root packages
//! along import edges (taking the deepest caller), and how deeply its directory
//! is nested. The larger of the two wins.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use super::classifier::Classifier;
use super::types::LevelPartition;
use crate::graph::package::{PackageGraph, PackagePath};

/// Output of the level assigner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelAssignment {
    pub partition: LevelPartition,
    /// Set when an import cycle hit the level ceiling during propagation.
    pub capped: bool,
}

/// Assigns every package in `graph` to exactly one level.
#[must_use]
pub fn assign_levels(graph: &PackageGraph, classifier: &Classifier) -> LevelAssignment {
    if graph.is_empty() {
        return LevelAssignment::default();
    }

    let roots = find_roots(graph);
    debug!(packages = graph.len(), roots = roots.len(), "assigning levels");

    let mut propagation = Propagation::new(graph);
    propagation.run(roots);

    while let Some(seed) = first_unassigned(graph, &propagation.levels) {
        debug!(package = %seed, "seeding package unreachable from any root");
        propagation.run(vec![seed]);
    }

    if propagation.capped {
        warn!("import cycle detected; levels were capped at {}", propagation.ceiling);
    }

    let mut levels = propagation.levels;
    apply_structural_override(&mut levels, classifier);

    LevelAssignment {
        partition: build_partition(levels),
        capped: propagation.capped,
    }
}

/// Convenience wrapper returning only the partition.
#[must_use]
pub fn assign(graph: &PackageGraph, classifier: &Classifier) -> LevelPartition {
    assign_levels(graph, classifier).partition
}

/// Packages that no other package imports.
fn find_roots(graph: &PackageGraph) -> Vec<PackagePath> {
    let imported: HashSet<&str> = graph
        .nodes()
        .flat_map(|node| {
            node.imports
                .iter()
                .filter(move |target| **target != node.path)
                .map(String::as_str)
        })
        .collect();

    graph
        .paths()
        .filter(|path| !imported.contains(path.as_str()))
        .cloned()
        .collect()
}

fn first_unassigned(
    graph: &PackageGraph,
    levels: &HashMap<PackagePath, usize>,
) -> Option<PackagePath> {
    graph.paths().find(|p| !levels.contains_key(*p)).cloned()
}

/// Breadth-first max-depth propagation.
///
/// A package is only re-queued when its level strictly increases, and levels
/// never exceed `ceiling`, so cycles terminate.
struct Propagation<'g> {
    graph: &'g PackageGraph,
    levels: HashMap<PackagePath, usize>,
    ceiling: usize,
    capped: bool,
}

impl<'g> Propagation<'g> {
    fn new(graph: &'g PackageGraph) -> Self {
        Self {
            graph,
            levels: HashMap::with_capacity(graph.len()),
            ceiling: graph.len().saturating_sub(1),
            capped: false,
        }
    }

    fn run(&mut self, seeds: Vec<PackagePath>) {
        let graph = self.graph;
        let mut queue = VecDeque::with_capacity(seeds.len());
        for seed in seeds {
            self.levels.entry(seed.clone()).or_insert(0);
            queue.push_back(seed);
        }

        while let Some(path) = queue.pop_front() {
            let Some(&level) = self.levels.get(&path) else {
                continue;
            };
            for target in graph.resolved_imports(&path) {
                if *target == path {
                    continue;
                }
                if self.raise(target, level + 1) {
                    queue.push_back(target.clone());
                }
            }
        }
    }

    /// Raises `target` to `candidate` if that deepens it. Returns true on change.
    fn raise(&mut self, target: &str, candidate: usize) -> bool {
        if candidate > self.ceiling {
            self.capped = true;
            return false;
        }
        match self.levels.get_mut(target) {
            Some(current) if *current >= candidate => false,
            Some(current) => {
                *current = candidate;
                true
            }
            None => {
                self.levels.insert(target.to_string(), candidate);
                true
            }
        }
    }
}

fn apply_structural_override(levels: &mut HashMap<PackagePath, usize>, classifier: &Classifier) {
    for (path, level) in levels.iter_mut() {
        let structural = classifier.structural_depth(path);
        if structural > *level {
            *level = structural;
        }
    }
}

fn build_partition(levels: HashMap<PackagePath, usize>) -> LevelPartition {
    let mut grouped: BTreeMap<usize, BTreeSet<PackagePath>> = BTreeMap::new();
    for (path, level) in levels {
        grouped.entry(level).or_default().insert(path);
    }
    LevelPartition::new(grouped.into_values().collect())
}
