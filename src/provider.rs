//! Provider traits for the anime and quote data sources.
//!
//! Providers are the external collaborators the resolver depends on. They own
//! transport concerns (HTTP, retries, timeouts) and hand back loosely-typed
//! JSON records. The resolver only relies on the shapes defined here.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderResult;

/// Base trait for all data providers.
pub trait Provider: Send + Sync + Debug {
    /// Returns the name of this provider.
    ///
    /// Used in log events to tell the two data sources apart.
    fn name(&self) -> &str;
}

/// Pagination metadata reported by the anime provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Whether the provider has another page for this query
    pub has_next_page: bool,
    /// Page number of the returned data
    pub current_page: u32,
}

/// One page of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Create a page from its records and pagination.
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }
}

/// Primary data source: anime metadata.
///
/// # Example
///
/// ```rust
/// use anime_quotes::{async_trait, AnimeProvider, Page, Pagination, Provider, ProviderResult};
/// use serde_json::{json, Value};
///
/// #[derive(Debug)]
/// struct StaticAnime;
///
/// impl Provider for StaticAnime {
///     fn name(&self) -> &str {
///         "static"
///     }
/// }
///
/// #[async_trait]
/// impl AnimeProvider for StaticAnime {
///     async fn fetch_by_title(&self, _title: &str) -> ProviderResult<Page<Value>> {
///         let pagination = Pagination { has_next_page: false, current_page: 1 };
///         Ok(Page::new(vec![json!({"mal_id": 1, "title": "Cowboy Bebop"})], pagination))
///     }
///
///     async fn fetch_random(&self) -> ProviderResult<Value> {
///         Ok(json!({"mal_id": 1, "title": "Cowboy Bebop"}))
///     }
/// }
/// ```
#[async_trait]
pub trait AnimeProvider: Provider {
    /// Search anime by title, returning one page of raw records.
    async fn fetch_by_title(&self, title: &str) -> ProviderResult<Page<Value>>;

    /// Fetch a single random anime record.
    ///
    /// A `Value::Null` payload means the provider answered without a record.
    async fn fetch_random(&self) -> ProviderResult<Value>;
}

/// Secondary data source: character quotes.
#[async_trait]
pub trait QuoteProvider: Provider {
    /// Fetch raw quote records for an anime title.
    async fn fetch_by_title(&self, title: &str) -> ProviderResult<Vec<Value>>;
}
