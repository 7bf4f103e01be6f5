use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publisher of an article. `name` is always present once an article has
/// been through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// The normalized article shape handed to the view layer and persisted in
/// the bookmark list. Field names on the wire follow the news API
/// (`urlToImage`, `publishedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
}

impl Article {
    pub const PLACEHOLDER_SOURCE: &'static str = "News App";
    pub const PLACEHOLDER_TITLE: &'static str = "Service Temporarily Unavailable";
    pub const PLACEHOLDER_DESCRIPTION: &'static str = "We're currently experiencing technical difficulties. Please check back later for the latest news updates.";

    pub fn new(title: impl Into<String>, url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            source: ArticleSource {
                id: None,
                name: source.into(),
            },
            author: None,
            title: title.into(),
            description: None,
            url: url.into(),
            url_to_image: None,
            published_at: now_iso8601(),
            content: None,
        }
    }

    /// The "service unavailable" record shown whenever no real data can be
    /// produced.
    pub fn placeholder() -> Self {
        Self {
            description: Some(Self::PLACEHOLDER_DESCRIPTION.to_string()),
            ..Self::new(Self::PLACEHOLDER_TITLE, "", Self::PLACEHOLDER_SOURCE)
        }
    }

    /// True for the fallback record. The timestamp is ignored since every
    /// placeholder is stamped with its own creation time.
    pub fn is_placeholder(&self) -> bool {
        self.title == Self::PLACEHOLDER_TITLE
            && self.source.name == Self::PLACEHOLDER_SOURCE
            && self.source.id.is_none()
            && self.url.is_empty()
    }

    /// Case-insensitive substring match against title or description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }

    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }

    pub fn share_message(&self) -> String {
        format!("{} - Read more: {}", self.title, self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// What every provider call resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: ResponseStatus,
    pub total_results: usize,
    pub articles: Vec<Article>,
}

impl NewsResponse {
    pub fn ok(articles: Vec<Article>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            total_results: articles.len(),
            articles,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: ResponseStatus::Error,
            total_results: 1,
            articles: vec![Article::placeholder()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Business,
    Technology,
    Sports,
    Health,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Business,
        Category::Technology,
        Category::Sports,
        Category::Health,
    ];

    /// Unknown identifiers select the general set.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap_or_default()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Health => "health",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Concrete scheme the view renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn next(self) -> Self {
        match self {
            ThemePreference::System => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::System => "System Default",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }

    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemePreference::System => system,
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Default,
    Large,
}

impl FontSize {
    pub fn next(self) -> Self {
        match self {
            FontSize::Small => FontSize::Default,
            FontSize::Default => FontSize::Large,
            FontSize::Large => FontSize::Small,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Default => "Default",
            FontSize::Large => "Large",
        }
    }
}

/// Local filter over an already loaded list. A blank query keeps
/// everything.
pub fn filter_articles(articles: &[Article], query: &str) -> Vec<Article> {
    if query.trim().is_empty() {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|a| a.matches_query(query))
        .cloned()
        .collect()
}

/// Current UTC time in the `2023-11-25T09:45:00.000Z` form.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
