//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use anime_quotes::prelude::*;
//! ```

// Configuration
pub use crate::config::{Config, ResolverConfig};

// Entities
pub use crate::entity::{Anime, Quote};

// Providers
pub use crate::provider::{AnimeProvider, Page, Pagination, Provider, QuoteProvider};

// Resolver
pub use crate::resolver::{AnimeResolver, AnimeResolverBuilder};

// Errors
pub use crate::error::{
    ConfigError, ConfigResult, ProviderError, ProviderResult, ResolveError, ResolveResult,
    ValidationError, ValidationResult,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
