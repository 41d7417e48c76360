// src/graph/layering/classifier.rs
//! Package classification based on path conventions.

use serde::{Deserialize, Serialize};

/// Naming conventions used to classify packages.
///
/// Nothing here is baked into the leveling or rule checks; they only see
/// the answers the classifier gives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Root import path of the module. Its own package is always an entry point.
    pub module_prefix: Option<String>,
    /// Paths ending with one of these are entry points.
    pub entry_suffixes: Vec<String>,
    /// Paths containing one of these as a full segment are entry points.
    pub entry_segments: Vec<String>,
    /// Paths containing one of these as a full segment are shared utilities.
    pub utility_markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            module_prefix: None,
            entry_suffixes: vec!["/main".to_string(), "/cmd".to_string()],
            entry_segments: vec!["cmd".to_string()],
            utility_markers: ["utilities", "utils", "common", "pkg", "shared", "lib"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Answers the three path questions the layering engine asks.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Default conventions scoped to the given module.
    #[must_use]
    pub fn for_module(prefix: impl Into<String>) -> Self {
        Self::new(ClassifierConfig {
            module_prefix: Some(prefix.into()),
            ..ClassifierConfig::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// True for packages that assemble the application and may import any layer.
    #[must_use]
    pub fn is_entry_point(&self, path: &str) -> bool {
        if self.config.module_prefix.as_deref() == Some(path) {
            return true;
        }
        if self.config.entry_suffixes.iter().any(|s| path.ends_with(s.as_str())) {
            return true;
        }
        has_segment(self.relative(path), &self.config.entry_segments)
    }

    /// True for packages living under a shared-library directory.
    ///
    /// Only the module-relative part is matched, so a module named
    /// `example.com/shared` does not make all of its packages utilities.
    #[must_use]
    pub fn is_utility(&self, path: &str) -> bool {
        has_segment(self.relative(path), &self.config.utility_markers)
    }

    /// Separator count of the module-relative path, plus one for utilities.
    #[must_use]
    pub fn structural_depth(&self, path: &str) -> usize {
        let separators = self.relative(path).matches('/').count();
        separators + usize::from(self.is_utility(path))
    }

    /// Strips the module prefix when present; the root package becomes "".
    #[must_use]
    pub fn relative<'a>(&self, path: &'a str) -> &'a str {
        let Some(prefix) = self.config.module_prefix.as_deref() else {
            return path;
        };
        match path.strip_prefix(prefix) {
            Some("") => "",
            Some(rest) => rest.strip_prefix('/').unwrap_or(path),
            None => path,
        }
    }
}

fn has_segment(path: &str, markers: &[String]) -> bool {
    path.split('/')
        .any(|segment| markers.iter().any(|m| m == segment))
}
