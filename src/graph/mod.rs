// src/graph/mod.rs
//! Package graph construction and layering analysis.

pub mod builder;
pub mod imports;
pub mod layering;
pub mod package;

pub use builder::build_graph;
pub use package::{Diagnostic, PackageGraph, PackageNode, PackagePath};
