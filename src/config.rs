//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::ast::SourceLanguage;
use crate::error::{Error, Result};
use crate::DEFAULT_MAX_SCOPE_DEPTH;

/// Configuration for a query engine, fixed at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of tokens in a scope path (including the global
    /// sentinel). Must be at least 1.
    pub max_scope_depth: usize,

    /// Grammar to parse source text with. Sources are treated as modules.
    pub language: SourceLanguage,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_scope_depth: DEFAULT_MAX_SCOPE_DEPTH,
            language: SourceLanguage::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            max_scope_depth: std::env::var("TREEQUERY_MAX_SCOPE_DEPTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_SCOPE_DEPTH),
            language: std::env::var("TREEQUERY_LANGUAGE")
                .ok()
                .and_then(|s| SourceLanguage::from_name(&s))
                .unwrap_or_default(),
        }
    }

    /// Set the scope depth cap.
    pub fn with_max_scope_depth(mut self, depth: usize) -> Self {
        self.max_scope_depth = depth;
        self
    }

    /// Set the source grammar.
    pub fn with_language(mut self, language: SourceLanguage) -> Self {
        self.language = language;
        self
    }

    /// Validate the configuration. A scope depth of zero cannot represent
    /// even the global sentinel.
    pub fn validate(&self) -> Result<()> {
        if self.max_scope_depth == 0 {
            return Err(Error::Config(
                "max_scope_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_scope_depth, DEFAULT_MAX_SCOPE_DEPTH);
        assert_eq!(config.language, SourceLanguage::Javascript);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_max_scope_depth(2)
            .with_language(SourceLanguage::Typescript);
        assert_eq!(config.max_scope_depth, 2);
        assert_eq!(config.language, SourceLanguage::Typescript);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let config = EngineConfig::default().with_max_scope_depth(0);
        assert!(config.validate().is_err());
    }
}
