// src/graph/layering/violations.rs
//! Violation detection: checks every import against the active mode's rule.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use super::classifier::Classifier;
use super::types::{LevelPartition, Mode, Violation};
use crate::graph::package::PackageGraph;

/// Scans every non-entry package for imports that break `mode`'s rule.
///
/// Levels are scanned deepest first. The result holds at most one violation
/// per distinct violation text, in first-seen order.
#[must_use]
pub fn detect(
    graph: &PackageGraph,
    partition: &LevelPartition,
    classifier: &Classifier,
    mode: Mode,
) -> Vec<Violation> {
    let order: Vec<usize> = (0..partition.len()).rev().collect();

    let per_level: Vec<Vec<Violation>> = order
        .par_iter()
        .map(|&level| scan_level(graph, partition, classifier, mode, level))
        .collect();

    let violations = dedup(per_level.into_iter().flatten());
    debug!(mode = %mode, count = violations.len(), "violation scan finished");
    violations
}

fn scan_level(
    graph: &PackageGraph,
    partition: &LevelPartition,
    classifier: &Classifier,
    mode: Mode,
    level: usize,
) -> Vec<Violation> {
    let Some(members) = partition.level(level) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for pkg in members {
        if classifier.is_entry_point(pkg) {
            continue;
        }
        let Some(node) = graph.get(pkg) else {
            continue;
        };
        for target in &node.imports {
            if let Some(v) = check_import(partition, classifier, mode, pkg, level, target) {
                found.push(v);
            }
        }
    }
    found
}

/// Looks for `target` at `level` and every shallower level. Deeper levels are
/// never examined.
fn check_import(
    partition: &LevelPartition,
    classifier: &Classifier,
    mode: Mode,
    pkg: &str,
    level: usize,
    target: &str,
) -> Option<Violation> {
    let target_level = (0..=level)
        .rev()
        .find(|&a| partition.level(a).is_some_and(|l| l.contains(target)))?;

    if !breaks_rule(mode, level, target_level) {
        return None;
    }

    Some(Violation {
        from_path: pkg.to_string(),
        from_level: level,
        to_path: target.to_string(),
        to_level: target_level,
        mode,
        message: mode.message().to_string(),
        suggestion: suggest(classifier, pkg, level, target),
    })
}

/// Only ever called with `target_level <= level`.
fn breaks_rule(mode: Mode, level: usize, target_level: usize) -> bool {
    match mode {
        Mode::Lenient => target_level == level,
        Mode::Strict => level.checked_sub(1) != Some(target_level),
    }
}

fn suggest(classifier: &Classifier, from: &str, from_level: usize, to: &str) -> String {
    if classifier.is_utility(to) {
        format!(
            "Move shared package '{to}' below level {from_level} or split the part '{from}' needs into a deeper utility package."
        )
    } else {
        format!("Move '{to}' to a deeper level than '{from}' or invert the dependency.")
    }
}

/// Keeps the first violation for each distinct text.
fn dedup(candidates: impl Iterator<Item = Violation>) -> Vec<Violation> {
    let mut seen = HashSet::new();
    candidates
        .filter(|v| seen.insert(v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn partition(levels: &[&[&str]]) -> LevelPartition {
        LevelPartition::new(
            levels
                .iter()
                .map(|l| l.iter().map(ToString::to_string).collect::<BTreeSet<_>>())
                .collect(),
        )
    }

    fn violation(from: &str, to: &str, level: usize) -> Violation {
        Violation {
            from_path: from.into(),
            from_level: level,
            to_path: to.into(),
            to_level: level,
            mode: Mode::Lenient,
            message: Mode::Lenient.message().into(),
            suggestion: String::new(),
        }
    }

    #[test]
    fn test_lenient_rule() {
        assert!(breaks_rule(Mode::Lenient, 2, 2));
        assert!(!breaks_rule(Mode::Lenient, 2, 1));
        assert!(!breaks_rule(Mode::Lenient, 2, 0));
    }

    #[test]
    fn test_strict_rule() {
        assert!(breaks_rule(Mode::Strict, 2, 2));
        assert!(!breaks_rule(Mode::Strict, 2, 1));
        assert!(breaks_rule(Mode::Strict, 2, 0));
        assert!(breaks_rule(Mode::Strict, 0, 0));
    }

    #[test]
    fn test_deeper_targets_never_examined() {
        let p = partition(&[&["m/a"], &["m/b"]]);
        let c = Classifier::for_module("m");
        assert!(check_import(&p, &c, Mode::Strict, "m/a", 0, "m/b").is_none());
        assert!(check_import(&p, &c, Mode::Lenient, "m/a", 0, "m/b").is_none());
    }

    #[test]
    fn test_shallower_target_strict_only() {
        let p = partition(&[&["m/a"], &["m/b"], &["m/c"]]);
        let c = Classifier::for_module("m");
        assert!(check_import(&p, &c, Mode::Lenient, "m/c", 2, "m/a").is_none());
        let v = check_import(&p, &c, Mode::Strict, "m/c", 2, "m/a");
        assert!(v.is_some_and(|v| v.to_level == 0 && v.from_level == 2));
        assert!(check_import(&p, &c, Mode::Strict, "m/c", 2, "m/b").is_none());
    }

    #[test]
    fn test_utility_suggestion() {
        let c = Classifier::for_module("m");
        assert!(suggest(&c, "m/a", 1, "m/shared/x").starts_with("Move shared package"));
        assert!(suggest(&c, "m/a", 1, "m/x").starts_with("Move 'm/x'"));
    }

    #[test]
    fn test_dedup_keeps_first() {
        let a = violation("m/a", "m/b", 1);
        let mut b = violation("m/a", "m/b", 1);
        b.suggestion = "different".into();
        let c = violation("m/c", "m/b", 1);
        let out = dedup(vec![a, b, c].into_iter());
        assert_eq!(out.len(), 2);
        assert!(out[0].suggestion.is_empty());
        assert_eq!(out[1].from_path, "m/c");
    }
}
