// tests/graph_build.rs
//! Walker and graph construction over real Go module trees.

use std::fs;
use std::path::Path;

use regex::Regex;
use stratum_core::discovery::WalkOptions;
use stratum_core::graph::build_graph;
use stratum_core::module;
use tempfile::TempDir;

const MODULE: &str = "example.com/app";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn go_module() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    let root = d.path();
    write(root, "go.mod", "module example.com/app\n\ngo 1.22\n");
    write(
        root,
        "main.go",
        "package main\n\nimport (\n\t\"fmt\"\n\t\"example.com/app/internal/handler\"\n)\n\nfunc main() { fmt.Println(handler.Name) }\n",
    );
    write(
        root,
        "internal/handler/handler.go",
        "package handler\n\nimport \"example.com/app/internal/service\"\n\nvar Name = service.Name\n",
    );
    write(
        root,
        "internal/service/service.go",
        "package service\n\nimport (\n\tdom \"example.com/app/internal/domain\"\n\t\"strings\"\n)\n\nvar Name = strings.ToUpper(dom.Name)\n",
    );
    write(
        root,
        "internal/domain/domain.go",
        "package domain\n\nconst Name = \"app\"\n",
    );
    write(
        root,
        "internal/domain/domain_test.go",
        "package domain\n\nimport (\n\t\"testing\"\n\t\"example.com/app/internal/handler\"\n)\n\nfunc TestName(t *testing.T) { _ = handler.Name }\n",
    );
    d
}

#[test]
fn test_locate_module() {
    let d = go_module();
    let info = module::locate(d.path()).unwrap();
    assert_eq!(info.path, MODULE);
}

#[test]
fn test_packages_and_internal_imports() {
    let d = go_module();
    let (graph, diagnostics) = build_graph(d.path(), MODULE, &WalkOptions::default());

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    let paths: Vec<&str> = graph.paths().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "example.com/app",
            "example.com/app/internal/domain",
            "example.com/app/internal/handler",
            "example.com/app/internal/service",
        ]
    );

    let root = graph.get(MODULE).unwrap();
    assert_eq!(root.files, vec!["main.go"]);
    assert!(root.imports.contains("example.com/app/internal/handler"));
    assert!(!root.imports.contains("fmt"));

    let service = graph.get("example.com/app/internal/service").unwrap();
    assert_eq!(
        service.imports.iter().collect::<Vec<_>>(),
        vec!["example.com/app/internal/domain"]
    );
}

#[test]
fn test_test_files_included_by_default() {
    let d = go_module();
    let (graph, _) = build_graph(d.path(), MODULE, &WalkOptions::default());
    let domain = graph.get("example.com/app/internal/domain").unwrap();
    assert_eq!(domain.files, vec!["domain.go", "domain_test.go"]);
    assert!(domain.imports.contains("example.com/app/internal/handler"));
}

#[test]
fn test_ignore_tests() {
    let d = go_module();
    let options = WalkOptions {
        ignore_tests: true,
        exclude: Vec::new(),
    };
    let (graph, _) = build_graph(d.path(), MODULE, &options);
    let domain = graph.get("example.com/app/internal/domain").unwrap();
    assert_eq!(domain.files, vec!["domain.go"]);
    assert!(domain.imports.is_empty());
}

#[test]
fn test_vendor_and_hidden_dirs_pruned() {
    let d = go_module();
    write(
        d.path(),
        "vendor/github.com/x/y/y.go",
        "package y\n\nimport \"example.com/app/internal/domain\"\n",
    );
    write(d.path(), ".cache/z.go", "package z\n");
    write(d.path(), "internal/domain/testdata/fixture.go", "package fixture\n");

    let (graph, _) = build_graph(d.path(), MODULE, &WalkOptions::default());
    assert_eq!(graph.len(), 4);
    assert!(graph
        .paths()
        .all(|p| !p.contains("vendor") && !p.contains("testdata")));
}

#[test]
fn test_nested_module_left_out() {
    let d = go_module();
    write(d.path(), "tools/go.mod", "module example.com/app/tools\n");
    write(
        d.path(),
        "tools/lint/lint.go",
        "package lint\n\nimport \"example.com/app/internal/domain\"\n",
    );

    let (graph, _) = build_graph(d.path(), MODULE, &WalkOptions::default());
    assert_eq!(graph.len(), 4);
    assert!(!graph.contains("example.com/app/tools/lint"));
}

#[test]
fn test_exclude_patterns() {
    let d = go_module();
    let options = WalkOptions {
        ignore_tests: false,
        exclude: vec![Regex::new("^internal/handler/").unwrap()],
    };
    let (graph, _) = build_graph(d.path(), MODULE, &options);
    assert!(!graph.contains("example.com/app/internal/handler"));
    // The importer keeps the now-dangling edge.
    let root = graph.get(MODULE).unwrap();
    assert!(root.imports.contains("example.com/app/internal/handler"));
}

#[test]
fn test_syntax_error_is_diagnostic() {
    let d = go_module();
    write(
        d.path(),
        "internal/broken/broken.go",
        "package broken\n\nimport \"example.com/app/internal/domain\"\n\nfunc {{\n",
    );
    let (graph, diagnostics) = build_graph(d.path(), MODULE, &WalkOptions::default());

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].path.ends_with("broken.go"));
    let broken = graph.get("example.com/app/internal/broken").unwrap();
    assert!(broken.imports.contains("example.com/app/internal/domain"));
}

#[test]
fn test_similar_prefix_is_external() {
    let d = go_module();
    write(
        d.path(),
        "internal/ext/ext.go",
        "package ext\n\nimport \"example.com/application/other\"\n",
    );
    let (graph, _) = build_graph(d.path(), MODULE, &WalkOptions::default());
    let ext = graph.get("example.com/app/internal/ext").unwrap();
    assert!(ext.imports.is_empty());
}
