//! Syntactic node kinds and grammar mappings.
//!
//! Maps tree-sitter grammar node names to our NodeKind enum. Kinds carry
//! ESTree-style tags ("ArrowFunctionExpression", "CallExpression", ...) so
//! queries can be written against familiar names regardless of the grammar's
//! own naming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic category of an AST node.
///
/// Closed over the kinds the engine understands; anything the grammar
/// produces that has no mapping is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    CallExpression,
    MemberExpression,
    AwaitExpression,
    Identifier,
    ArrowFunctionExpression,
    FunctionExpression,
    FunctionDeclaration,
    ImportDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    BlockStatement,
    ClassDeclaration,
    MethodDefinition,
    ReturnStatement,
    IfStatement,
    ForStatement,
    WhileStatement,
    BinaryExpression,
    AssignmentExpression,
    ObjectExpression,
    ArrayExpression,
    StringLiteral,
    NumericLiteral,
    TemplateLiteral,
    /// Unmapped grammar kind, carrying the grammar's own node name.
    Other(String),
}

impl NodeKind {
    /// Map a tree-sitter grammar node name to a kind.
    pub fn from_grammar(grammar_kind: &str) -> Self {
        match grammar_kind {
            "program" => NodeKind::Program,
            "expression_statement" => NodeKind::ExpressionStatement,
            "call_expression" => NodeKind::CallExpression,
            "member_expression" => NodeKind::MemberExpression,
            "await_expression" => NodeKind::AwaitExpression,
            "identifier" | "property_identifier" | "shorthand_property_identifier" => {
                NodeKind::Identifier
            }
            "arrow_function" => NodeKind::ArrowFunctionExpression,
            "function_expression" | "function" | "generator_function" => {
                NodeKind::FunctionExpression
            }
            "function_declaration" | "generator_function_declaration" => {
                NodeKind::FunctionDeclaration
            }
            "import_statement" => NodeKind::ImportDeclaration,
            "lexical_declaration" | "variable_declaration" => NodeKind::VariableDeclaration,
            "variable_declarator" => NodeKind::VariableDeclarator,
            "statement_block" => NodeKind::BlockStatement,
            "class_declaration" => NodeKind::ClassDeclaration,
            "method_definition" => NodeKind::MethodDefinition,
            "return_statement" => NodeKind::ReturnStatement,
            "if_statement" => NodeKind::IfStatement,
            "for_statement" | "for_in_statement" => NodeKind::ForStatement,
            "while_statement" => NodeKind::WhileStatement,
            "binary_expression" => NodeKind::BinaryExpression,
            "assignment_expression" => NodeKind::AssignmentExpression,
            "object" => NodeKind::ObjectExpression,
            "array" => NodeKind::ArrayExpression,
            "string" => NodeKind::StringLiteral,
            "number" => NodeKind::NumericLiteral,
            "template_string" => NodeKind::TemplateLiteral,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Parse an ESTree-style tag into a kind. Unknown tags land in `Other`,
    /// which lets callers query arbitrary grammar kinds by their raw name.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Program" => NodeKind::Program,
            "ExpressionStatement" => NodeKind::ExpressionStatement,
            "CallExpression" => NodeKind::CallExpression,
            "MemberExpression" => NodeKind::MemberExpression,
            "AwaitExpression" => NodeKind::AwaitExpression,
            "Identifier" => NodeKind::Identifier,
            "ArrowFunctionExpression" => NodeKind::ArrowFunctionExpression,
            "FunctionExpression" => NodeKind::FunctionExpression,
            "FunctionDeclaration" => NodeKind::FunctionDeclaration,
            "ImportDeclaration" => NodeKind::ImportDeclaration,
            "VariableDeclaration" => NodeKind::VariableDeclaration,
            "VariableDeclarator" => NodeKind::VariableDeclarator,
            "BlockStatement" => NodeKind::BlockStatement,
            "ClassDeclaration" => NodeKind::ClassDeclaration,
            "MethodDefinition" => NodeKind::MethodDefinition,
            "ReturnStatement" => NodeKind::ReturnStatement,
            "IfStatement" => NodeKind::IfStatement,
            "ForStatement" => NodeKind::ForStatement,
            "WhileStatement" => NodeKind::WhileStatement,
            "BinaryExpression" => NodeKind::BinaryExpression,
            "AssignmentExpression" => NodeKind::AssignmentExpression,
            "ObjectExpression" => NodeKind::ObjectExpression,
            "ArrayExpression" => NodeKind::ArrayExpression,
            "StringLiteral" => NodeKind::StringLiteral,
            "NumericLiteral" => NodeKind::NumericLiteral,
            "TemplateLiteral" => NodeKind::TemplateLiteral,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// The ESTree-style tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::AwaitExpression => "AwaitExpression",
            NodeKind::Identifier => "Identifier",
            NodeKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ImportDeclaration => "ImportDeclaration",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::MethodDefinition => "MethodDefinition",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::TemplateLiteral => "TemplateLiteral",
            NodeKind::Other(raw) => raw,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
