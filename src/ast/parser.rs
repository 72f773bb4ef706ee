//! Tree-sitter based parse adapter.
//!
//! Converts source text into the owned `Node` tree. Parsing itself is
//! delegated entirely to tree-sitter; this module only selects the grammar,
//! rejects trees with syntax errors, and lowers the concrete syntax tree
//! into our node model.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tree_sitter::{Language, Parser};

use crate::ast::kinds::NodeKind;
use crate::ast::node::{Node, NodeId, Span};
use crate::error::{Error, Result};

/// Source grammar to parse with. Sources are always treated as modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    #[default]
    Javascript,
    Typescript,
    Tsx,
}

impl SourceLanguage {
    /// Get the tree-sitter language for this grammar.
    fn grammar(self) -> Language {
        match self {
            SourceLanguage::Javascript => tree_sitter_javascript::language(),
            SourceLanguage::Typescript => tree_sitter_typescript::language_typescript(),
            SourceLanguage::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }

    /// Parse a language name (e.g. from configuration).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "javascript" | "js" => Some(SourceLanguage::Javascript),
            "typescript" | "ts" => Some(SourceLanguage::Typescript),
            "tsx" => Some(SourceLanguage::Tsx),
            _ => None,
        }
    }
}

/// Parse source text into a program node.
///
/// Returns `Error::Parse` when the grammar reports syntax errors; the engine
/// cannot be constructed from unparseable text.
pub fn parse(source: &str, language: SourceLanguage) -> Result<Node> {
    let mut parser = Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|e| Error::Parse(format!("failed to load grammar: {e}")))?;

    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or_else(|| Error::Parse("parser produced no tree".to_string()))?;

    let errors = collect_syntax_errors(tree.root_node());
    if let Some(first) = errors.first() {
        return Err(Error::Parse(first.clone()));
    }

    let mut next_id: NodeId = 0;
    let root = lower(tree.root_node(), source, &mut next_id);
    debug!(
        language = ?language,
        statements = root.children.len(),
        nodes = next_id,
        "parsed program"
    );
    Ok(root)
}

/// Lower a tree-sitter node into our owned model, assigning preorder ids.
/// Only named grammar nodes become child slots; punctuation and keywords are
/// dropped, which keeps slot order equal to source order of the meaningful
/// children (callee before arguments, identifier before body).
fn lower(ts_node: tree_sitter::Node, source: &str, next_id: &mut NodeId) -> Node {
    let id = *next_id;
    *next_id += 1;

    let kind = NodeKind::from_grammar(ts_node.kind());
    let span = span_of(&ts_node);

    let name = if ts_node.named_child_count() == 0 {
        source
            .get(ts_node.start_byte()..ts_node.end_byte())
            .map(str::to_string)
    } else {
        None
    };

    let mut cursor = ts_node.walk();
    let children = ts_node
        .named_children(&mut cursor)
        .map(|child| lower(child, source, next_id))
        .collect();

    Node {
        id,
        kind,
        span,
        name,
        children,
    }
}

fn span_of(ts_node: &tree_sitter::Node) -> Span {
    Span {
        start_byte: ts_node.start_byte(),
        end_byte: ts_node.end_byte(),
        start_line: ts_node.start_position().row + 1,
        end_line: ts_node.end_position().row + 1,
        start_col: ts_node.start_position().column,
        end_col: ts_node.end_position().column,
    }
}

/// Collect syntax errors from the tree.
fn collect_syntax_errors(root: tree_sitter::Node) -> Vec<String> {
    let mut errors = Vec::new();

    fn visit(node: tree_sitter::Node, errors: &mut Vec<String>) {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            errors.push(format!(
                "syntax error at line {}, column {}",
                pos.row + 1,
                pos.column
            ));
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            visit(child, errors);
        }
    }

    if root.has_error() {
        visit(root, &mut errors);
    }
    errors
}
