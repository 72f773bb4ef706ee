//! Scope paths and the scope filter.
//!
//! A scope path is the ordered list of enclosing named-identifier tokens a
//! node was discovered under, starting at the global sentinel. It is a
//! heuristic approximation of lexical scope, not a binding resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel token that roots every scope path.
pub const GLOBAL_SCOPE: &str = "global";

/// An ordered scope path, e.g. `global.setup.handler`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopePath(Vec<String>);

impl ScopePath {
    /// The unconstrained root path, `["global"]`.
    pub fn global() -> Self {
        ScopePath(vec![GLOBAL_SCOPE.to_string()])
    }

    /// Build a path from tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScopePath(tokens.into_iter().map(Into::into).collect())
    }

    /// The tokens of this path, outermost first.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the bare `["global"]` path.
    pub fn is_global(&self) -> bool {
        self.0.len() == 1 && self.0[0] == GLOBAL_SCOPE
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A copy of this path with one more token appended.
    pub fn extended(&self, token: &str) -> Self {
        let mut tokens = self.0.clone();
        tokens.push(token.to_string());
        ScopePath(tokens)
    }

    /// The dotted form, e.g. `global.setup.handler`.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

/// Decide whether a node found at `node_path` counts as inside `target_path`.
///
/// The bare `["global"]` target means unconstrained and matches everything.
/// A node can never be inside a scope deeper than where it was found.
/// Otherwise the test is raw substring containment over the dotted forms:
/// a target `a.b` also matches a node path containing `xa.by`. Callers rely
/// on the loose match, so it is kept as-is rather than tightened to a
/// segment-prefix test.
pub fn is_in_scope(node_path: &ScopePath, target_path: &ScopePath) -> bool {
    if target_path.is_global() {
        return true;
    }
    if node_path.len() < target_path.len() {
        return false;
    }
    node_path.dotted().contains(&target_path.dotted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_target_matches_everything() {
        let paths = [
            ScopePath::global(),
            ScopePath::from_tokens(["global", "a"]),
            ScopePath::from_tokens(["global", "a", "b", "c"]),
        ];
        for path in &paths {
            assert!(is_in_scope(path, &ScopePath::global()));
        }
    }

    #[test]
    fn test_shorter_node_path_never_matches() {
        let node = ScopePath::from_tokens(["global", "a"]);
        let target = ScopePath::from_tokens(["global", "a", "b"]);
        assert!(!is_in_scope(&node, &target));
    }

    #[test]
    fn test_segment_containment() {
        let node = ScopePath::from_tokens(["global", "setup", "handler"]);
        assert!(is_in_scope(&node, &ScopePath::from_tokens(["setup"])));
        assert!(is_in_scope(
            &node,
            &ScopePath::from_tokens(["setup", "handler"])
        ));
        assert!(!is_in_scope(&node, &ScopePath::from_tokens(["teardown"])));
    }

    #[test]
    fn test_substring_match_is_loose() {
        // Known imprecision: the dotted strings are compared by substring,
        // so "a.b" matches inside "xa.by".
        let node = ScopePath::from_tokens(["global", "xa", "by"]);
        let target = ScopePath::from_tokens(["a", "b"]);
        assert!(is_in_scope(&node, &target));
    }

    #[test]
    fn test_dotted_display() {
        let path = ScopePath::from_tokens(["global", "f"]);
        assert_eq!(path.to_string(), "global.f");
        assert_eq!(path.dotted(), "global.f");
    }
}
