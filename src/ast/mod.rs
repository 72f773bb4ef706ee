//! AST data model and parse adapter.
//!
//! This module provides:
//! - A closed node-kind enumeration with ESTree-style tags
//! - A lightweight owned tree of nodes with ordered child slots
//! - Tree-sitter based parsing of JavaScript/TypeScript into that tree

pub mod kinds;
pub mod node;
pub mod parser;

pub use kinds::NodeKind;
pub use node::{Node, NodeId, Span};
pub use parser::{parse, SourceLanguage};
