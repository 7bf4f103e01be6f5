//! Normalization of raw article records.
//!
//! Input comes from outside the process (a news API, a persisted bookmark
//! blob) and may have any shape. Records without a string `title` or an
//! object `source` are dropped; everything else is coerced field by field.

use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{now_iso8601, parse_timestamp, Article, ArticleSource};

const UNKNOWN_SOURCE: &str = "Unknown Source";
const UNTITLED: &str = "Untitled Article";

/// Validates a raw list of article records. A non-array input yields the
/// placeholder record alone; an empty array yields an empty list.
pub fn validate_articles(raw: &Value) -> Vec<Article> {
    let Some(items) = raw.as_array() else {
        debug!("Article payload is not a list, substituting placeholder");
        return vec![Article::placeholder()];
    };

    let articles: Vec<Article> = items.iter().filter_map(normalize_article).collect();
    if articles.len() != items.len() {
        debug!("Dropped {} malformed article records", items.len() - articles.len());
    }
    articles
}

fn normalize_article(raw: &Value) -> Option<Article> {
    let record = raw.as_object()?;
    let title = record.get("title")?.as_str()?;
    let source = record.get("source")?.as_object()?;

    Some(Article {
        source: normalize_source(source),
        author: optional_string(record, "author"),
        title: non_empty(title).unwrap_or(UNTITLED).to_string(),
        description: optional_string(record, "description"),
        url: optional_string(record, "url").unwrap_or_default(),
        url_to_image: optional_string(record, "urlToImage"),
        published_at: record
            .get("publishedAt")
            .and_then(Value::as_str)
            .filter(|ts| parse_timestamp(ts).is_some())
            .map_or_else(now_iso8601, str::to_string),
        content: optional_string(record, "content"),
    })
}

fn normalize_source(source: &Map<String, Value>) -> ArticleSource {
    let field = move |key: &str| source.get(key).and_then(Value::as_str).and_then(non_empty);

    ArticleSource {
        id: field("id").map(str::to_string),
        name: field("name").unwrap_or(UNKNOWN_SOURCE).to_string(),
    }
}

fn optional_string(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
