//! Error types for the query engine.

use thiserror::Error;

/// Errors surfaced by the engine. Adapter failures (parse, generate) pass
/// through with their own identity; the engine never catches or retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be parsed into a syntax tree.
    #[error("parse error: {0}")]
    Parse(String),

    /// A node could not be re-emitted as source text.
    #[error("code generation failed: {0}")]
    Generate(String),

    /// The engine configuration was rejected at construction.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
