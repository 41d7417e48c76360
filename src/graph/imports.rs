// src/graph/imports.rs
use std::sync::LazyLock;

use tree_sitter::{Language, Parser, Query, QueryCursor};

use crate::error::{Result, StratumError};

const GO_IMPORTS: &str = r"
(import_spec path: (interpreted_string_literal) @path)
(import_spec path: (raw_string_literal) @path)
";

static IMPORT_QUERY: LazyLock<std::result::Result<Query, String>> =
    LazyLock::new(|| Query::new(grammar(), GO_IMPORTS).map_err(|e| e.to_string()));

fn grammar() -> Language {
    tree_sitter_go::language()
}

/// Imports found in one Go file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Import paths in declaration order with quotes removed (e.g. "fmt", "example.com/app/store").
    pub imports: Vec<String>,
    /// The parser had to recover from syntax errors somewhere in the file.
    pub syntax_error: bool,
}

/// Extracts import paths from Go source.
///
/// # Errors
/// Returns error if the Go grammar cannot be loaded or the source cannot be parsed.
pub fn extract(source: &str) -> Result<Extraction> {
    let query = IMPORT_QUERY
        .as_ref()
        .map_err(|e| StratumError::Grammar(e.clone()))?;

    let mut parser = Parser::new();
    parser
        .set_language(grammar())
        .map_err(|_| StratumError::Grammar("incompatible Go grammar version".to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| StratumError::Grammar("parser returned no tree".to_string()))?;

    let mut cursor = QueryCursor::new();
    let matches = cursor.matches(query, tree.root_node(), source.as_bytes());
    let mut imports = Vec::new();

    for m in matches {
        for capture in m.captures {
            if let Ok(text) = capture.node.utf8_text(source.as_bytes()) {
                imports.push(clean_text(text));
            }
        }
    }

    Ok(Extraction {
        imports,
        syntax_error: tree.root_node().has_error(),
    })
}

fn clean_text(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '`').to_string()
}
