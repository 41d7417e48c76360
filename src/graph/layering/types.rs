// src/graph/layering/types.rs
//! Result types handed from the layering engine to the reporters.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::package::PackagePath;

/// Enforcement mode for the violation scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Only same-level imports are disallowed.
    #[default]
    Lenient,
    /// Only imports of the level directly adjacent are allowed.
    Strict,
}

impl Mode {
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Lenient => "Importing a package of the same level is not allowed.",
            Self::Strict => "Only one level inward importing is allowed.",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered grouping of packages by depth. Index 0 is the outermost level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelPartition {
    levels: Vec<BTreeSet<PackagePath>>,
}

impl LevelPartition {
    /// Builds a partition, dropping empty levels.
    #[must_use]
    pub fn new(levels: Vec<BTreeSet<PackagePath>>) -> Self {
        Self {
            levels: levels.into_iter().filter(|l| !l.is_empty()).collect(),
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[BTreeSet<PackagePath>] {
        &self.levels
    }

    #[must_use]
    pub fn level(&self, index: usize) -> Option<&BTreeSet<PackagePath>> {
        self.levels.get(index)
    }

    /// Index of the level holding `path`.
    #[must_use]
    pub fn level_of(&self, path: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.contains(path))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn package_count(&self) -> usize {
        self.levels.iter().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &BTreeSet<PackagePath>)> {
        self.levels.iter().enumerate()
    }
}

/// An import edge that breaks the active mode's rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub from_path: PackagePath,
    pub from_level: usize,
    pub to_path: PackagePath,
    pub to_level: usize,
    pub mode: Mode,
    pub message: String,
    pub suggestion: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is imported by a lower or similar level package {}: {}",
            self.to_path, self.from_path, self.message
        )
    }
}

/// True when the run must be reported as failed.
#[must_use]
pub fn has_violations(violations: &[Violation]) -> bool {
    !violations.is_empty()
}
