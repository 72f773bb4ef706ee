//! Owned AST node representation.

use serde::{Deserialize, Serialize};

use crate::ast::kinds::NodeKind;

/// Stable identity of a node within one parsed tree, assigned in preorder.
pub type NodeId = usize;

/// Source location of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset.
    pub start_byte: usize,
    /// End byte offset (exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// Start column.
    pub start_col: usize,
    /// End column.
    pub end_col: usize,
}

impl Span {
    /// Get the byte length of this span.
    pub fn byte_length(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }
}

/// A node in the parsed tree.
///
/// Children are ordered child slots in source order; the traversal enumerates
/// them instead of probing kind-specific fields. Leaf tokens (identifiers,
/// literals) carry their source text in `name`.
#[derive(Debug, Clone)]
pub struct Node {
    /// Identity within the owning tree.
    pub id: NodeId,
    /// Syntactic category.
    pub kind: NodeKind,
    /// Source location.
    pub span: Span,
    /// Source text for leaf tokens (e.g. an identifier's name).
    pub name: Option<String>,
    /// Ordered child slots.
    pub children: Vec<Node>,
}

impl Node {
    /// The ordered child slots of this node.
    pub fn child_slots(&self) -> &[Node] {
        &self.children
    }

    /// Check the node's kind.
    pub fn is_kind(&self, kind: &NodeKind) -> bool {
        self.kind == *kind
    }

    /// The identifier name, if this node is an identifier.
    pub fn identifier_name(&self) -> Option<&str> {
        if self.kind == NodeKind::Identifier {
            self.name.as_deref()
        } else {
            None
        }
    }

    /// The first child slot holding an identifier, in slot order.
    pub fn first_identifier(&self) -> Option<&Node> {
        self.children
            .iter()
            .find(|child| child.kind == NodeKind::Identifier)
    }

    /// Total node count of this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}
