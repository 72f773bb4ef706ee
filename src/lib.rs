//! Scope-aware AST query engine.
//!
//! Parses JavaScript or TypeScript source into a lightweight AST and answers
//! queries over it: find every node of a syntactic kind, constrained to a
//! lexical scope path, and re-emit any node back to source text. Scope is
//! approximated heuristically (the nearest named identifier found while
//! descending), not resolved through real binding semantics.
//!
//! Parsing is delegated to tree-sitter and code generation is span-based
//! re-emission; the engine itself only reads the tree.

pub mod ast;
pub mod config;
pub mod engine;
pub mod error;
pub mod scope;
pub mod traversal;

pub use ast::{Node, NodeId, NodeKind, SourceLanguage, Span};
pub use config::EngineConfig;
pub use engine::TreeQueryEngine;
pub use error::{Error, Result};
pub use scope::{is_in_scope, ScopePath, GLOBAL_SCOPE};
pub use traversal::TaggedNode;

/// Default cap on scope path length.
pub const DEFAULT_MAX_SCOPE_DEPTH: usize = 4;

/// Hard ceiling on structural recursion depth during traversal, independent
/// of scope depth. Purely structural nesting (nested literals, parenthesized
/// expressions) never grows the scope path, so it needs its own bound.
pub const MAX_TRAVERSAL_DEPTH: usize = 128;
