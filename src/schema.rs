//! Record schemas for raw provider payloads.
//!
//! Each schema checks that the required fields exist with the right primitive
//! types and renames provider field names to canonical ones. A record that
//! fails its schema is rejected on its own; its siblings are unaffected.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};

/// Canonical anime fields, ready for [`Anime::create`](crate::Anime::create).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimeData {
    pub id: u64,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub episodes: Option<u32>,
    pub score: Option<f64>,
    pub status: Option<String>,
    pub year: Option<i32>,
    pub genres: Vec<String>,
}

/// Canonical quote fields, ready for [`Quote::create`](crate::Quote::create).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteData {
    pub title: String,
    pub character: String,
    pub text: String,
}

#[derive(Deserialize)]
struct AnimeRecord {
    mal_id: u64,
    title: String,
    title_english: Option<String>,
    title_japanese: Option<String>,
    synopsis: Option<String>,
    images: Option<ImagesRecord>,
    episodes: Option<u32>,
    score: Option<f64>,
    status: Option<String>,
    year: Option<i32>,
    genres: Option<Vec<GenreRecord>>,
}

#[derive(Deserialize)]
struct ImagesRecord {
    jpg: Option<ImageSetRecord>,
}

#[derive(Deserialize)]
struct ImageSetRecord {
    image_url: Option<String>,
}

#[derive(Deserialize)]
struct GenreRecord {
    name: String,
}

#[derive(Deserialize)]
struct QuoteRecord {
    #[serde(rename = "anime")]
    title: String,
    character: String,
    #[serde(rename = "quote")]
    text: String,
}

/// Schema for anime records returned by the anime provider.
pub struct AnimeSchema;

impl AnimeSchema {
    /// Validate a raw anime record and map it to [`AnimeData`].
    pub fn parse(raw: &Value) -> ValidationResult<AnimeData> {
        let record =
            AnimeRecord::deserialize(raw).map_err(|e| ValidationError::new("anime", e))?;

        Ok(AnimeData {
            id: record.mal_id,
            title: record.title,
            title_english: record.title_english,
            title_japanese: record.title_japanese,
            synopsis: record.synopsis,
            image_url: record
                .images
                .and_then(|images| images.jpg)
                .and_then(|jpg| jpg.image_url),
            episodes: record.episodes,
            score: record.score,
            status: record.status,
            year: record.year,
            genres: record
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|genre| genre.name)
                .collect(),
        })
    }
}

/// Schema for quote records returned by the quote provider.
pub struct QuoteSchema;

impl QuoteSchema {
    /// Validate a raw quote record and map it to [`QuoteData`].
    pub fn parse(raw: &Value) -> ValidationResult<QuoteData> {
        let record =
            QuoteRecord::deserialize(raw).map_err(|e| ValidationError::new("quote", e))?;

        Ok(QuoteData {
            title: record.title,
            character: record.character,
            text: record.text,
        })
    }
}

/// Validate every record independently, keeping the ones that pass in order.
///
/// Rejections are logged and dropped. `verbose` raises their log level from
/// `trace` to `debug`.
pub fn parse_all<T>(
    records: &[Value],
    parse: impl Fn(&Value) -> ValidationResult<T>,
    verbose: bool,
) -> Vec<T> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match parse(raw) {
            Ok(data) => Some(data),
            Err(err) => {
                if verbose {
                    tracing::debug!(index, error = %err, "dropping record");
                } else {
                    tracing::trace!(index, error = %err, "dropping record");
                }
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_anime() -> Value {
        json!({
            "mal_id": 1,
            "url": "https://myanimelist.net/anime/1/Cowboy_Bebop",
            "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/images/anime/4/19644.jpg"}},
            "title": "Cowboy Bebop",
            "title_english": "Cowboy Bebop",
            "title_japanese": "カウボーイビバップ",
            "episodes": 26,
            "status": "Finished Airing",
            "score": 8.75,
            "synopsis": "Crime is timeless.",
            "year": 1998,
            "genres": [
                {"mal_id": 1, "type": "anime", "name": "Action"},
                {"mal_id": 24, "type": "anime", "name": "Sci-Fi"}
            ]
        })
    }

    #[test]
    fn test_anime_schema_maps_fields() {
        let data = AnimeSchema::parse(&full_anime()).unwrap();

        assert_eq!(data.id, 1);
        assert_eq!(data.title, "Cowboy Bebop");
        assert_eq!(data.title_japanese.as_deref(), Some("カウボーイビバップ"));
        assert_eq!(
            data.image_url.as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/4/19644.jpg")
        );
        assert_eq!(data.episodes, Some(26));
        assert_eq!(data.score, Some(8.75));
        assert_eq!(data.year, Some(1998));
        assert_eq!(data.genres, vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn test_anime_schema_optional_fields() {
        let data = AnimeSchema::parse(&json!({
            "mal_id": 5,
            "title": "Untitled",
            "episodes": null,
            "images": {"jpg": null},
            "genres": null
        }))
        .unwrap();

        assert_eq!(data.episodes, None);
        assert_eq!(data.image_url, None);
        assert!(data.genres.is_empty());
    }

    #[test]
    fn test_anime_schema_rejects_missing_title() {
        let err = AnimeSchema::parse(&json!({"mal_id": 5})).unwrap_err();
        assert_eq!(err.record, "anime");
        assert!(err.message.contains("title"));
    }

    #[test]
    fn test_anime_schema_rejects_wrong_type() {
        assert!(AnimeSchema::parse(&json!({"mal_id": "5", "title": "x"})).is_err());
        assert!(AnimeSchema::parse(&json!({"mal_id": 5, "title": 7})).is_err());
        assert!(AnimeSchema::parse(&json!(null)).is_err());
    }

    #[test]
    fn test_quote_schema_renames_fields() {
        let data = QuoteSchema::parse(&json!({
            "anime": "Naruto",
            "character": "Naruto Uzumaki",
            "quote": "Believe it!"
        }))
        .unwrap();

        assert_eq!(
            data,
            QuoteData {
                title: "Naruto".to_string(),
                character: "Naruto Uzumaki".to_string(),
                text: "Believe it!".to_string(),
            }
        );
    }

    #[test]
    fn test_quote_schema_rejects_partial_record() {
        let err = QuoteSchema::parse(&json!({"anime": "A"})).unwrap_err();
        assert_eq!(err.record, "quote");
    }

    #[test]
    fn test_parse_all_keeps_valid_in_order() {
        let records = vec![
            json!({"anime": "A", "character": "X", "quote": "first"}),
            json!({"anime": "A"}),
            json!("not an object"),
            json!({"anime": "A", "character": "Y", "quote": "second"}),
        ];

        let parsed = parse_all(&records, QuoteSchema::parse, false);
        let texts: Vec<&str> = parsed.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
