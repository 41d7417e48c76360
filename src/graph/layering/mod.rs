// src/graph/layering/mod.rs
//! Layering enforcement for package graphs.
//!
//! Every package is given a depth level, then every import is checked
//! against the enforcement mode's rule.

pub mod classifier;
pub mod cycles;
pub mod inspect;
pub mod levels;
pub mod types;
pub mod violations;

pub use classifier::{Classifier, ClassifierConfig};
pub use cycles::detect_cycles;
pub use inspect::{inspect, ImportInfo, PackageInfo};
pub use levels::{assign, assign_levels, LevelAssignment};
pub use types::{has_violations, LevelPartition, Mode, Violation};
pub use violations::detect;

use crate::graph::package::{PackageGraph, PackagePath};

/// Full result of one layering run.
#[derive(Debug, Clone, Default)]
pub struct LayerReport {
    pub mode: Mode,
    pub partition: LevelPartition,
    pub violations: Vec<Violation>,
    pub cycles: Vec<Vec<PackagePath>>,
}

impl LayerReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        !has_violations(&self.violations)
    }
}

/// Levels the graph, then checks it under `mode`.
#[must_use]
pub fn analyze(graph: &PackageGraph, classifier: &Classifier, mode: Mode) -> LayerReport {
    let assignment = assign_levels(graph, classifier);
    let cycles = detect_cycles(graph);
    let violations = detect(graph, &assignment.partition, classifier, mode);

    LayerReport {
        mode,
        partition: assignment.partition,
        violations,
        cycles,
    }
}
