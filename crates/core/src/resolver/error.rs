use thiserror::Error;

/// Errors that can occur during resolver operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolver's backing machinery failed (I/O, parsing, whatever the
    /// implementation leans on). Not the same as a name that resolves to
    /// nothing, which is `Ok(None)`.
    #[error("Resolver backend failed: {0}")]
    Backend(String),
    /// The resolver does not implement this capability.
    #[error("Operation not supported by this resolver: {0}")]
    Unsupported(&'static str),
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur when assembling a resolver decorator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Cache key prefix must not be empty")]
    EmptyPrefix,
}
