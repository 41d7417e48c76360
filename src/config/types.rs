// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::graph::layering::ClassifierConfig;

/// Contents of `stratum.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StratumToml {
    pub rules: RuleConfig,
    pub classifier: ClassifierConfig,
    pub walk: WalkConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Only allow imports of the directly adjacent level.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Skip `_test.go` files.
    pub ignore_tests: bool,
    /// Regexes over module-relative file paths to leave out of the graph.
    pub exclude: Vec<String>,
}
