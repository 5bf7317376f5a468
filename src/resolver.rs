//! Anime resolver: the two orchestrated use cases.
//!
//! The resolver calls the providers, validates every record on its own and
//! merges quotes into anime entities. Only anime provider failures surface as
//! errors; the quote provider can fail without failing the call.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::{Config, ResolverConfig};
use crate::entity::{Anime, Quote};
use crate::error::{ConfigError, ConfigResult, ProviderResult, ResolveError, ResolveResult};
use crate::provider::{AnimeProvider, Page, Provider, QuoteProvider};
use crate::schema::{parse_all, AnimeSchema, QuoteSchema};

/// Resolves anime with their quotes from an anime and a quote provider.
///
/// # Example
///
/// ```rust,ignore
/// use anime_quotes::prelude::*;
///
/// let resolver = AnimeResolver::builder()
///     .anime_provider(Arc::new(JikanClient::new()))
///     .quote_provider(Arc::new(AnimechanClient::new()))
///     .build()?;
///
/// let page = resolver.resolve_by_title("naruto").await?;
/// let random = resolver.resolve_random().await?;
/// ```
#[derive(Debug, Clone)]
pub struct AnimeResolver {
    anime: Arc<dyn AnimeProvider>,
    quotes: Arc<dyn QuoteProvider>,
    config: ResolverConfig,
}

impl AnimeResolver {
    /// Create a resolver with the default configuration.
    pub fn new(anime: Arc<dyn AnimeProvider>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self {
            anime,
            quotes,
            config: ResolverConfig::default(),
        }
    }

    /// Start building a resolver.
    pub fn builder() -> AnimeResolverBuilder {
        AnimeResolverBuilder::new()
    }

    /// Returns the resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every anime matching `title`, each carrying the quotes found
    /// for `title`.
    ///
    /// Both fetches run concurrently on the current task and are awaited to
    /// completion before either outcome is looked at. Pagination is passed
    /// through from the anime provider untouched.
    #[instrument(skip(self), fields(resolver = self.config.name()))]
    pub async fn resolve_by_title(&self, title: &str) -> ResolveResult<Page<Anime>> {
        let (anime_outcome, quote_outcome) = tokio::join!(
            self.anime.fetch_by_title(title),
            self.quotes.fetch_by_title(title),
        );

        let page = match anime_outcome {
            Ok(page) => page,
            Err(source) => {
                warn!(provider = self.anime.name(), error = %source, "anime by title fetch failed");
                return Err(ResolveError::AnimeByTitleNotFound { source });
            }
        };

        let quotes = self.collect_quotes(quote_outcome);

        // Every anime in the page gets the full quote list for the searched
        // title. Quotes are not matched back to individual anime.
        let data: Vec<Anime> = parse_all(&page.data, AnimeSchema::parse, self.config.is_verbose())
            .into_iter()
            .map(|anime| Anime::create(anime, Arc::clone(&quotes)))
            .collect();

        debug!(
            received = page.data.len(),
            resolved = data.len(),
            quotes = quotes.len(),
            "resolved anime by title"
        );

        Ok(Page::new(data, page.pagination))
    }

    /// Resolve one random anime with the quotes for its title.
    ///
    /// The quote lookup needs the validated title, so the two fetches run one
    /// after the other. The quote provider is never called when the anime
    /// record is missing or invalid.
    #[instrument(skip(self), fields(resolver = self.config.name()))]
    pub async fn resolve_random(&self) -> ResolveResult<Anime> {
        let raw = match self.anime.fetch_random().await {
            Ok(Value::Null) => {
                warn!(provider = self.anime.name(), "random anime fetch returned no record");
                return Err(ResolveError::RandomAnimeNotFound { source: None });
            }
            Ok(raw) => raw,
            Err(source) => {
                warn!(provider = self.anime.name(), error = %source, "random anime fetch failed");
                return Err(ResolveError::RandomAnimeNotFound {
                    source: Some(source),
                });
            }
        };

        let anime = AnimeSchema::parse(&raw).map_err(|source| {
            warn!(provider = self.anime.name(), error = %source, "random anime failed validation");
            ResolveError::RandomAnimeParse { source }
        })?;

        let quote_outcome = self.quotes.fetch_by_title(&anime.title).await;
        let quotes = self.collect_quotes(quote_outcome);

        debug!(title = %anime.title, quotes = quotes.len(), "resolved random anime");

        Ok(Anime::create(anime, quotes))
    }

    /// Turn a quote fetch outcome into the valid quotes, degrading a failed
    /// fetch to an empty list.
    fn collect_quotes(&self, outcome: ProviderResult<Vec<Value>>) -> Arc<[Quote]> {
        let records = outcome.unwrap_or_else(|err| {
            warn!(provider = self.quotes.name(), error = %err, "quote fetch failed, continuing without quotes");
            Vec::new()
        });

        parse_all(&records, QuoteSchema::parse, self.config.is_verbose())
            .into_iter()
            .map(Quote::create)
            .collect()
    }
}

/// Builder for creating resolvers with fluent API.
#[derive(Default)]
pub struct AnimeResolverBuilder {
    anime: Option<Arc<dyn AnimeProvider>>,
    quotes: Option<Arc<dyn QuoteProvider>>,
    config: ResolverConfig,
}

impl AnimeResolverBuilder {
    /// Create a new resolver builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary anime provider.
    pub fn anime_provider(mut self, provider: Arc<dyn AnimeProvider>) -> Self {
        self.anime = Some(provider);
        self
    }

    /// Set the secondary quote provider.
    pub fn quote_provider(mut self, provider: Arc<dyn QuoteProvider>) -> Self {
        self.quotes = Some(provider);
        self
    }

    /// Set the resolver configuration.
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the resolver.
    pub fn build(self) -> ConfigResult<AnimeResolver> {
        let anime = self.anime.ok_or(ConfigError::MissingProvider("anime"))?;
        let quotes = self.quotes.ok_or(ConfigError::MissingProvider("quote"))?;
        self.config.validate().map_err(ConfigError::Invalid)?;

        Ok(AnimeResolver {
            anime,
            quotes,
            config: self.config,
        })
    }
}
