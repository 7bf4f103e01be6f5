//! Plain-text views over articles and preferences.

use nr_core::types::parse_timestamp;
use nr_core::{Article, Category, ColorScheme};
use nr_storage::Preferences;

const UNKNOWN_DATE: &str = "Unknown date";

/// `Nov 25, 2023`
pub fn card_date(published_at: &str) -> String {
    parse_timestamp(published_at)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// `Saturday, November 25, 2023`, or the raw value if it does not parse.
pub fn long_date(published_at: &str) -> String {
    match parse_timestamp(published_at) {
        Some(dt) => dt.format("%A, %B %-d, %Y").to_string(),
        None if !published_at.is_empty() => published_at.to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

pub fn render_card(index: usize, article: &Article) -> String {
    let description = article
        .description
        .as_deref()
        .unwrap_or("No description available for this article.");
    [
        format!("{:>2}. {}", index + 1, article.title),
        format!(
            "    {} · {}",
            article.source.name,
            card_date(&article.published_at)
        ),
        format!("    {}", description),
        format!("    {}", article.url),
    ]
    .join("\n")
}

pub fn render_cards(articles: &[Article]) -> String {
    articles
        .iter()
        .enumerate()
        .map(|(i, article)| render_card(i, article))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_headlines(category: Category, articles: &[Article], filter: Option<&str>) -> String {
    let header = format!("📰 {} headlines", category.label());
    if !articles.is_empty() {
        return format!("{}\n\n{}", header, render_cards(articles));
    }
    match filter {
        Some(query) => format!("{}\n\n{}", header, no_results(query)),
        None => format!(
            "{}\n\nNo News Available\nPull to refresh or try a different category.",
            header
        ),
    }
}

pub fn render_search(query: &str, articles: &[Article]) -> String {
    let header = format!("🔎 Results for \"{}\"", query);
    if articles.is_empty() {
        format!("{}\n\n{}", header, no_results(query))
    } else {
        format!("{}\n\n{}", header, render_cards(articles))
    }
}

fn no_results(query: &str) -> String {
    format!(
        "No Results Found\nWe couldn't find any articles matching \"{}\". Try different keywords or browse by category.",
        query
    )
}

pub fn render_bookmarks(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No bookmarks yet\nSave articles for later by bookmarking them while reading a story."
            .to_string();
    }
    format!("🔖 Bookmarks ({})\n\n{}", articles.len(), render_cards(articles))
}

pub fn render_detail(article: &Article, bookmarked: bool) -> String {
    let mut lines = vec![
        format!(
            "{} {}",
            if bookmarked { "🔖" } else { "  " },
            article.source.name
        ),
        String::new(),
        article.title.clone(),
        format!("{} | {}", article.source.name, long_date(&article.published_at)),
    ];
    if let Some(author) = &article.author {
        lines.push(format!("By {}", author));
    }
    lines.push(String::new());
    lines.push(
        article
            .description
            .clone()
            .unwrap_or_else(|| "No description available for this article.".to_string()),
    );
    lines.push(String::new());
    lines.push(article.content.clone().unwrap_or_else(|| {
        "Full content unavailable. Please visit the source website for more information."
            .to_string()
    }));
    lines.push(String::new());
    if article.url.is_empty() {
        lines.push("Source link unavailable".to_string());
    } else {
        lines.push(format!("For the full article, visit {}", article.url));
        lines.push(format!("Share: {}", article.share_message()));
    }
    lines.join("\n")
}

pub fn render_unavailable() -> String {
    "We couldn't load this article.\nThe article may be temporarily unavailable. Please try again later."
        .to_string()
}

pub fn render_categories() -> String {
    Category::ALL
        .iter()
        .map(|c| format!("{:<12} {}", c.id(), c.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_preferences(preferences: &Preferences, scheme: ColorScheme) -> String {
    let on_off = |enabled: bool| if enabled { "On" } else { "Off" };
    [
        "Appearance".to_string(),
        format!(
            "  Theme              {} ({:?})",
            preferences.theme.label(),
            scheme
        ),
        format!("  Font size          {}", preferences.font_size.label()),
        "Notifications".to_string(),
        format!("  Push notifications {}", on_off(preferences.push_notifications)),
        format!("  Breaking news      {}", on_off(preferences.breaking_news)),
    ]
    .join("\n")
}
