//! Immutable domain entities.

use std::sync::Arc;

use serde::Serialize;

use crate::schema::{AnimeData, QuoteData};

/// A character quote as reported by the quote provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    title: String,
    character: String,
    text: String,
}

impl Quote {
    /// Build a quote from validated data.
    pub fn create(data: QuoteData) -> Self {
        Self {
            title: data.title,
            character: data.character,
            text: data.text,
        }
    }

    /// Name of the anime the quote comes from, as the quote provider spells it.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An anime with the quotes attached at construction.
///
/// The quote list is an immutable shared slice. Several anime built from one
/// batch point at the same list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anime {
    id: u64,
    title: String,
    title_english: Option<String>,
    title_japanese: Option<String>,
    synopsis: Option<String>,
    image_url: Option<String>,
    episodes: Option<u32>,
    score: Option<f64>,
    status: Option<String>,
    year: Option<i32>,
    genres: Vec<String>,
    quotes: Arc<[Quote]>,
}

impl Anime {
    /// Build an anime from validated data and its quotes.
    pub fn create(data: AnimeData, quotes: impl Into<Arc<[Quote]>>) -> Self {
        Self {
            id: data.id,
            title: data.title,
            title_english: data.title_english,
            title_japanese: data.title_japanese,
            synopsis: data.synopsis,
            image_url: data.image_url,
            episodes: data.episodes,
            score: data.score,
            status: data.status,
            year: data.year,
            genres: data.genres,
            quotes: quotes.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_english(&self) -> Option<&str> {
        self.title_english.as_deref()
    }

    pub fn title_japanese(&self) -> Option<&str> {
        self.title_japanese.as_deref()
    }

    pub fn synopsis(&self) -> Option<&str> {
        self.synopsis.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn episodes(&self) -> Option<u32> {
        self.episodes
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Quotes attached at construction, in provider order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Shared handle to the quote list.
    pub fn shared_quotes(&self) -> Arc<[Quote]> {
        Arc::clone(&self.quotes)
    }
}
