//! Error types for Anime Quotes.
//!
//! Expected failures are values, not panics: every orchestrator returns a
//! [`ResolveResult`] and callers branch on `Ok`/`Err`.

use thiserror::Error;

/// Root error type for resolver operations.
///
/// Only failures of the primary (anime) provider end up here. Quote provider
/// failures and rejected records are absorbed by the resolver.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The anime-by-title fetch failed
    #[error("anime by title not found")]
    AnimeByTitleNotFound {
        #[source]
        source: ProviderError,
    },

    /// The random anime fetch failed or returned an empty record
    #[error("random anime not found")]
    RandomAnimeNotFound {
        #[source]
        source: Option<ProviderError>,
    },

    /// The random anime record was fetched but failed validation
    #[error("failed to parse random anime")]
    RandomAnimeParse {
        #[source]
        source: ValidationError,
    },
}

/// Errors reported by provider collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Nothing matched the request
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The request could not be completed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The upstream answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Timeout enforced by the provider
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// The provider is not reachable at all
    #[error("Provider unavailable")]
    Unavailable,
}

/// A raw record that did not match its schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {record} record: {message}")]
pub struct ValidationError {
    /// Kind of record being validated (`"anime"`, `"quote"`)
    pub record: &'static str,
    /// Reason reported by the schema
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(record: &'static str, err: serde_json::Error) -> Self {
        Self {
            record,
            message: err.to_string(),
        }
    }
}

/// Errors raised while assembling a resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required collaborator was not supplied
    #[error("Missing provider: {0}")]
    MissingProvider(&'static str),

    /// The configuration failed its own validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Decode(err.to_string())
    }
}

impl From<String> for ProviderError {
    fn from(msg: String) -> Self {
        ProviderError::RequestFailed(msg)
    }
}

impl From<&str> for ProviderError {
    fn from(msg: &str) -> Self {
        ProviderError::RequestFailed(msg.to_string())
    }
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Result type alias for schema validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for resolver construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for orchestrator outcomes.
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_resolve_error_messages() {
        let err = ResolveError::AnimeByTitleNotFound {
            source: ProviderError::Unavailable,
        };
        assert_eq!(err.to_string(), "anime by title not found");

        let err = ResolveError::RandomAnimeNotFound { source: None };
        assert_eq!(err.to_string(), "random anime not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_resolve_error_keeps_source() {
        let err = ResolveError::RandomAnimeNotFound {
            source: Some(ProviderError::Status(503)),
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Unexpected HTTP status: 503");
    }

    #[test]
    fn test_provider_error_from_str() {
        let err: ProviderError = "connection reset".into();
        assert_eq!(err, ProviderError::RequestFailed("connection reset".to_string()));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            record: "quote",
            message: "missing field `quote`".to_string(),
        };
        assert_eq!(err.to_string(), "invalid quote record: missing field `quote`");
    }
}
