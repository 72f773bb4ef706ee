//! The query engine.
//!
//! Owns one parsed program for its lifetime and answers kind queries over
//! it. Every returned node is paired with the scope path it was discovered
//! under; scope tags also persist in a side map until the next query
//! recomputes them.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use crate::ast::{self, Node, NodeId, NodeKind};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::scope::{is_in_scope, ScopePath};
use crate::traversal::{self, kind_is, TaggedNode};

/// Scope-aware query engine over one parsed program.
///
/// Purely synchronous and single-threaded; one engine wraps exactly one
/// parsed tree.
pub struct TreeQueryEngine {
    source: String,
    program: Node,
    config: EngineConfig,
    scope_tags: RefCell<HashMap<NodeId, ScopePath>>,
}

impl TreeQueryEngine {
    /// Parse `source` with the default configuration.
    pub fn new(source: &str) -> Result<Self> {
        Self::with_config(source, EngineConfig::default())
    }

    /// Parse `source` with an explicit configuration. Parse errors surface
    /// here; an engine cannot be constructed from unparseable text.
    pub fn with_config(source: &str, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let program = ast::parse(source, config.language)?;
        Ok(Self {
            source: source.to_string(),
            program,
            config,
            scope_tags: RefCell::new(HashMap::new()),
        })
    }

    /// The parsed program root.
    pub fn program(&self) -> &Node {
        &self.program
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All nodes of `kind`, in program order (statement order, then
    /// depth-first within each statement). Each top-level statement is
    /// walked independently, starting at the global scope.
    pub fn query_kind(&self, kind: &NodeKind) -> Vec<TaggedNode<'_>> {
        let mut tags = self.scope_tags.borrow_mut();
        tags.clear();

        let predicate = kind_is(kind.clone());
        let mut matches = Vec::new();
        for statement in self.program.child_slots() {
            matches.extend(traversal::collect_matches(
                statement,
                &predicate,
                ScopePath::global(),
                self.config.max_scope_depth,
                &mut tags,
            ));
        }
        debug!(kind = %kind, matches = matches.len(), "kind query");
        matches
    }

    /// All nodes whose kind tag equals `tag` (ESTree-style, e.g.
    /// `"CallExpression"`; unknown tags fall through to raw grammar names).
    pub fn query_tag(&self, tag: &str) -> Vec<TaggedNode<'_>> {
        self.query_kind(&NodeKind::from_tag(tag))
    }

    /// All arrow function expressions.
    pub fn arrow_function_expressions(&self) -> Vec<TaggedNode<'_>> {
        self.query_kind(&NodeKind::ArrowFunctionExpression)
    }

    /// All expression statements.
    pub fn expression_statements(&self) -> Vec<TaggedNode<'_>> {
        self.query_kind(&NodeKind::ExpressionStatement)
    }

    /// All function declarations.
    pub fn function_declarations(&self) -> Vec<TaggedNode<'_>> {
        self.query_kind(&NodeKind::FunctionDeclaration)
    }

    /// All import declarations.
    pub fn import_declarations(&self) -> Vec<TaggedNode<'_>> {
        self.query_kind(&NodeKind::ImportDeclaration)
    }

    /// All variable declarations.
    pub fn variable_declarations(&self) -> Vec<TaggedNode<'_>> {
        self.query_kind(&NodeKind::VariableDeclaration)
    }

    /// The first expression statement in `scope` that calls `name`.
    ///
    /// `name` is either a bare identifier (`"foo"`) or a dotted
    /// `object.method` pair (`"obj.foo"`). A bare name matches a direct call
    /// `foo(...)` or an awaited call `await foo(...)`; a dotted name matches
    /// only a member call `obj.foo(...)` whose object and property are both
    /// plain identifiers. Absence is `None`, never an error.
    pub fn expression_statement_by_call_name(
        &self,
        name: &str,
        scope: &ScopePath,
    ) -> Option<TaggedNode<'_>> {
        self.expression_statements()
            .into_iter()
            .filter(|tagged| is_in_scope(&tagged.scope, scope))
            .find(|tagged| statement_calls(tagged.node, name))
    }

    /// Re-emit a node as source text.
    ///
    /// Emission is span-based: the node's byte range is sliced back out of
    /// the engine's source. A node whose span does not fall on this source's
    /// boundaries (e.g. one taken from a different engine) is an error.
    pub fn generate_code(&self, node: &Node) -> Result<String> {
        self.source
            .get(node.span.start_byte..node.span.end_byte)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::Generate(format!(
                    "node span {}..{} is outside the source ({} bytes)",
                    node.span.start_byte,
                    node.span.end_byte,
                    self.source.len()
                ))
            })
    }

    /// The scope path a node was tagged with during the most recent query.
    pub fn scope_of(&self, id: NodeId) -> Option<ScopePath> {
        self.scope_tags.borrow().get(&id).cloned()
    }
}

/// Does this expression statement call `name` in one of the recognized
/// shapes?
fn statement_calls(statement: &Node, name: &str) -> bool {
    let Some(expression) = statement.child_slots().first() else {
        return false;
    };

    match expression.kind {
        NodeKind::CallExpression => {
            let Some(callee) = expression.child_slots().first() else {
                return false;
            };
            if name.contains('.') {
                // Dotted names only ever match the member-call shape.
                let mut parts = name.split('.');
                let object_name = parts.next();
                let method_name = parts.next();
                if callee.kind != NodeKind::MemberExpression {
                    return false;
                }
                let object = callee.child_slots().first();
                let property = callee.child_slots().get(1);
                object.and_then(Node::identifier_name) == object_name
                    && property.and_then(Node::identifier_name) == method_name
            } else {
                callee.identifier_name() == Some(name)
            }
        }
        NodeKind::AwaitExpression => {
            if name.contains('.') {
                return false;
            }
            let Some(call) = expression.child_slots().first() else {
                return false;
            };
            call.kind == NodeKind::CallExpression
                && call.child_slots().first().and_then(Node::identifier_name) == Some(name)
        }
        _ => false,
    }
}
