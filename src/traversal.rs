//! Scope-tagging tree traversal.
//!
//! A single depth-first walk that tags every visited node with the scope
//! path it was discovered under, collects nodes matching a predicate, and
//! bounds recursion. Scope tags go into a side map keyed by node id; the
//! tree itself is never written to.

use std::collections::HashMap;

use crate::ast::{Node, NodeId, NodeKind};
use crate::scope::ScopePath;
use crate::MAX_TRAVERSAL_DEPTH;

/// A matched node paired with the scope path it was discovered under.
#[derive(Debug, Clone)]
pub struct TaggedNode<'a> {
    pub node: &'a Node,
    pub scope: ScopePath,
}

/// Walk `root`, tagging every node and collecting predicate matches in
/// discovery (depth-first, source) order.
///
/// The scope path grows by one token whenever a node's first identifier
/// child slot names the subtree, up to `max_scope_depth` tokens; past the
/// cap the path stops growing but the walk continues. Structural recursion
/// is cut off at `MAX_TRAVERSAL_DEPTH` levels regardless of scope depth,
/// since nesting without identifiers never grows the path.
pub(crate) fn collect_matches<'a>(
    root: &'a Node,
    predicate: &dyn Fn(&Node) -> bool,
    scope: ScopePath,
    max_scope_depth: usize,
    tags: &mut HashMap<NodeId, ScopePath>,
) -> Vec<TaggedNode<'a>> {
    let mut matches = Vec::new();
    walk(root, predicate, &scope, 0, max_scope_depth, tags, &mut matches);
    matches
}

fn walk<'a>(
    node: &'a Node,
    predicate: &dyn Fn(&Node) -> bool,
    scope: &ScopePath,
    depth: usize,
    max_scope_depth: usize,
    tags: &mut HashMap<NodeId, ScopePath>,
    matches: &mut Vec<TaggedNode<'a>>,
) {
    if depth >= MAX_TRAVERSAL_DEPTH {
        return;
    }

    tags.insert(node.id, scope.clone());

    if predicate(node) {
        matches.push(TaggedNode {
            node,
            scope: scope.clone(),
        });
    }

    // The first identifier slot names this subtree for its children only;
    // the path never grows past the configured cap.
    let child_scope = if scope.len() < max_scope_depth {
        match node.first_identifier().and_then(Node::identifier_name) {
            Some(name) => scope.extended(name),
            None => scope.clone(),
        }
    } else {
        scope.clone()
    };

    for child in node.child_slots() {
        walk(
            child,
            predicate,
            &child_scope,
            depth + 1,
            max_scope_depth,
            tags,
            matches,
        );
    }
}

/// Convenience predicate for kind equality.
pub(crate) fn kind_is(kind: NodeKind) -> impl Fn(&Node) -> bool {
    move |node: &Node| node.kind == kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::DEFAULT_MAX_SCOPE_DEPTH;

    fn node(id: NodeId, kind: NodeKind, name: Option<&str>, children: Vec<Node>) -> Node {
        Node {
            id,
            kind,
            span: Span {
                start_byte: 0,
                end_byte: 0,
                start_line: 1,
                end_line: 1,
                start_col: 0,
                end_col: 0,
            },
            name: name.map(str::to_string),
            children,
        }
    }

    /// function f() { const g = () => {}; }
    fn named_function_tree() -> Node {
        let arrow = node(4, NodeKind::ArrowFunctionExpression, None, vec![]);
        let declarator = node(
            2,
            NodeKind::VariableDeclarator,
            None,
            vec![node(3, NodeKind::Identifier, Some("g"), vec![]), arrow],
        );
        let body = node(
            5,
            NodeKind::BlockStatement,
            None,
            vec![node(6, NodeKind::VariableDeclaration, None, vec![declarator])],
        );
        node(
            0,
            NodeKind::FunctionDeclaration,
            None,
            vec![node(1, NodeKind::Identifier, Some("f"), vec![]), body],
        )
    }

    #[test]
    fn test_scope_extends_through_named_subtrees() {
        let tree = named_function_tree();
        let mut tags = HashMap::new();

        let matches = collect_matches(
            &tree,
            &kind_is(NodeKind::ArrowFunctionExpression),
            ScopePath::global(),
            DEFAULT_MAX_SCOPE_DEPTH,
            &mut tags,
        );

        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].scope,
            ScopePath::from_tokens(["global", "f", "g"])
        );
    }

    #[test]
    fn test_every_visited_node_is_tagged() {
        let tree = named_function_tree();
        let mut tags = HashMap::new();

        collect_matches(
            &tree,
            &|_| false,
            ScopePath::global(),
            DEFAULT_MAX_SCOPE_DEPTH,
            &mut tags,
        );

        assert_eq!(tags.len(), tree.subtree_size());
        assert_eq!(tags[&0], ScopePath::global());
        // The identifier that contributes the scope token is itself tagged
        // with the extended path.
        assert_eq!(tags[&1], ScopePath::from_tokens(["global", "f"]));
        assert_eq!(tags[&5], ScopePath::from_tokens(["global", "f"]));
    }

    #[test]
    fn test_scope_depth_cap_stops_growth_not_descent() {
        let tree = named_function_tree();
        let mut tags = HashMap::new();

        let matches = collect_matches(
            &tree,
            &kind_is(NodeKind::ArrowFunctionExpression),
            ScopePath::global(),
            1,
            &mut tags,
        );

        // Still discovered, but the path never grew past the cap.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].scope, ScopePath::global());
        assert!(tags.values().all(|scope| scope.len() <= 1));
    }

    #[test]
    fn test_structural_recursion_ceiling() {
        // A chain of nested arrays deeper than the ceiling; no identifiers,
        // so scope depth never grows.
        let mut tree = node(0, NodeKind::NumericLiteral, None, vec![]);
        for id in 1..=(MAX_TRAVERSAL_DEPTH + 16) {
            tree = node(id, NodeKind::ArrayExpression, None, vec![tree]);
        }
        let mut tags = HashMap::new();

        let matches = collect_matches(
            &tree,
            &kind_is(NodeKind::NumericLiteral),
            ScopePath::global(),
            DEFAULT_MAX_SCOPE_DEPTH,
            &mut tags,
        );

        // The literal sits below the ceiling and is not reached.
        assert!(matches.is_empty());
        assert_eq!(tags.len(), MAX_TRAVERSAL_DEPTH);
    }

    #[test]
    fn test_matches_are_in_discovery_order() {
        let tree = node(
            0,
            NodeKind::ArrayExpression,
            None,
            vec![
                node(1, NodeKind::NumericLiteral, Some("1"), vec![]),
                node(2, NodeKind::NumericLiteral, Some("2"), vec![]),
                node(3, NodeKind::NumericLiteral, Some("3"), vec![]),
            ],
        );
        let mut tags = HashMap::new();

        let matches = collect_matches(
            &tree,
            &kind_is(NodeKind::NumericLiteral),
            ScopePath::global(),
            DEFAULT_MAX_SCOPE_DEPTH,
            &mut tags,
        );

        let ids: Vec<_> = matches.iter().map(|m| m.node.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
