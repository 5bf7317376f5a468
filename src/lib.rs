//! # Anime Quotes
//!
//! **Anime Quotes** combines anime metadata and character quotes from two
//! independent providers into a single [`Anime`] entity.
//!
//! ## Overview
//!
//! The anime provider is the primary source: if it fails, the call fails.
//! The quote provider is secondary: if it fails, anime come back without
//! quotes. Each raw record is validated on its own, so one malformed record
//! never takes down the rest of a batch.
//!
//! ## Layer Structure
//!
//! ```text
//! resolver  - Use cases: resolve by title, resolve random
//! entity    - Immutable Anime and Quote
//! schema    - Raw JSON record -> canonical data
//! provider  - Anime and quote provider traits
//! error     - Result aliases and error enums
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use anime_quotes::prelude::*;
//!
//! // Implement the provider traits over your HTTP clients
//! #[async_trait]
//! impl AnimeProvider for JikanClient {
//!     async fn fetch_by_title(&self, title: &str) -> ProviderResult<Page<Value>> { ... }
//!     async fn fetch_random(&self) -> ProviderResult<Value> { ... }
//! }
//!
//! let resolver = AnimeResolver::new(Arc::new(jikan), Arc::new(animechan));
//!
//! match resolver.resolve_by_title("naruto").await {
//!     Ok(page) => println!("{} anime, next page: {}", page.data.len(), page.pagination.has_next_page),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

mod config;
mod entity;
mod error;
mod provider;
mod resolver;
pub mod schema;

pub mod prelude;

// Re-export core types
pub use config::{Config, ResolverConfig};
pub use entity::{Anime, Quote};
pub use error::{
    ConfigError, ConfigResult, ProviderError, ProviderResult, ResolveError, ResolveResult,
    ValidationError, ValidationResult,
};
pub use provider::{AnimeProvider, Page, Pagination, Provider, QuoteProvider};
pub use resolver::{AnimeResolver, AnimeResolverBuilder};
pub use schema::{AnimeData, AnimeSchema, QuoteData, QuoteSchema};

// Re-export async-trait for convenience
pub use async_trait::async_trait;
