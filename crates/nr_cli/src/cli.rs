use clap::{ArgAction, Parser, Subcommand};
use nr_core::{
    filter_articles, Article, Category, ColorScheme, Error, FontSize, NewsProvider, Result,
    ThemePreference,
};
use nr_provider::{create_provider, ProviderConfig};
use nr_storage::{create_store, BookmarkStore, PreferenceStore, StoreConfig, StoreKind, DEFAULT_DB_PATH};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::logging::level_for;
use crate::render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse, search and bookmark headlines", long_about = None)]
pub struct Cli {
    /// Where bookmarks and preferences are kept
    #[arg(long, value_enum, default_value_t = StoreKind::Sqlite)]
    pub storage: StoreKind,
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
    /// Simulated provider latency in milliseconds
    #[arg(long, default_value_t = 800)]
    pub latency_ms: u64,
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        level_for(self.verbose, self.quiet)
    }

    pub fn store_config(&self) -> StoreConfig {
        match self.storage {
            StoreKind::Memory => StoreConfig::memory(),
            StoreKind::Sqlite => StoreConfig::sqlite(&self.db_path),
        }
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            latency: Duration::from_millis(self.latency_ms),
            ..ProviderConfig::default()
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List headlines for a category
    Headlines {
        /// general, business, technology, sports or health
        #[arg(short, long, default_value = "general")]
        category: String,
        /// Keep only articles whose title or description contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Search headlines across every category
    Search { query: String },
    /// Show a single article
    Read { url: String },
    /// Bookmark an article, or remove it if already bookmarked
    Bookmark { url: String },
    /// List bookmarked articles in the order they were saved
    Bookmarks,
    /// List the available categories
    Categories,
    /// Show or change display and notification settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommands {
    /// Print every setting
    Show {
        /// Scheme the platform is currently using
        #[arg(long, value_enum, default_value_t = ColorScheme::Light)]
        system_scheme: ColorScheme,
    },
    /// Set the theme, or cycle to the next one
    Theme {
        #[arg(value_enum)]
        value: Option<ThemePreference>,
    },
    /// Set the font size, or cycle to the next one
    FontSize {
        #[arg(value_enum)]
        value: Option<FontSize>,
    },
    /// Enable or disable push notifications
    Push {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Enable or disable breaking news alerts
    BreakingNews {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

/// Everything a command needs: a provider and the two stores sharing one
/// key-value backend.
pub struct App {
    provider: Arc<dyn NewsProvider>,
    bookmarks: BookmarkStore,
    preferences: PreferenceStore,
}

impl App {
    pub async fn new(store_config: &StoreConfig, provider_config: &ProviderConfig) -> Result<Self> {
        let store = create_store(store_config).await?;
        let provider = create_provider(provider_config)?;
        Ok(Self::from_parts(provider, store))
    }

    pub fn from_parts(
        provider: Arc<dyn NewsProvider>,
        store: Arc<dyn nr_core::KeyValueStore>,
    ) -> Self {
        Self {
            provider,
            bookmarks: BookmarkStore::new(store.clone()),
            preferences: PreferenceStore::new(store),
        }
    }

    pub async fn run(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Headlines { category, filter } => {
                let category = Category::from_id(&category);
                info!("📰 Fetching {} headlines", category);
                let response = self.provider.get_headlines(category.id()).await;
                let filter = filter.filter(|q| !q.trim().is_empty());
                let articles = match &filter {
                    Some(query) => filter_articles(&response.articles, query),
                    None => response.articles,
                };
                Ok(render::render_headlines(category, &articles, filter.as_deref()))
            }
            Commands::Search { query } => {
                if query.trim().is_empty() {
                    return Err(Error::InvalidQuery("search query is empty".to_string()));
                }
                info!("🔎 Searching for \"{}\"", query);
                let response = self.provider.search_headlines(&query).await;
                Ok(render::render_search(&query, &response.articles))
            }
            Commands::Read { url } => match self.find_article(&url).await {
                Some(article) => {
                    let bookmarked = self.bookmarks.is_bookmarked(&article.url).await;
                    Ok(render::render_detail(&article, bookmarked))
                }
                None => Ok(render::render_unavailable()),
            },
            Commands::Bookmark { url } => {
                let article = self
                    .find_article(&url)
                    .await
                    .ok_or_else(|| Error::Provider(format!("Article not found: {}", url)))?;
                let bookmarked = self.bookmarks.try_toggle(&article).await?;
                Ok(if bookmarked {
                    format!("🔖 Bookmarked: {}", article.title)
                } else {
                    format!("Removed bookmark: {}", article.title)
                })
            }
            Commands::Bookmarks => {
                let articles = self.bookmarks.load().await;
                Ok(render::render_bookmarks(&articles))
            }
            Commands::Categories => Ok(render::render_categories()),
            Commands::Settings { command } => {
                self.settings(command.unwrap_or(SettingsCommands::Show {
                    system_scheme: ColorScheme::Light,
                }))
                .await
            }
        }
    }

    async fn settings(&self, command: SettingsCommands) -> Result<String> {
        let prefs = &self.preferences;
        let saved = match command {
            SettingsCommands::Show { system_scheme } => {
                let all = prefs.load_all().await;
                let scheme = all.theme.resolve(system_scheme);
                return Ok(render::render_preferences(&all, scheme));
            }
            SettingsCommands::Theme { value: Some(theme) } => {
                (prefs.save_theme(theme).await, format!("Theme: {}", theme.label()))
            }
            SettingsCommands::Theme { value: None } => {
                let theme = prefs.cycle_theme().await;
                (prefs.load_theme().await == theme, format!("Theme: {}", theme.label()))
            }
            SettingsCommands::FontSize { value: Some(size) } => (
                prefs.save_font_size(size).await,
                format!("Font size: {}", size.label()),
            ),
            SettingsCommands::FontSize { value: None } => {
                let size = prefs.cycle_font_size().await;
                (
                    prefs.load_font_size().await == size,
                    format!("Font size: {}", size.label()),
                )
            }
            SettingsCommands::Push { enabled } => (
                prefs.set_push_notifications(enabled).await,
                format!("Push notifications: {}", on_off(enabled)),
            ),
            SettingsCommands::BreakingNews { enabled } => (
                prefs.set_breaking_news(enabled).await,
                format!("Breaking news: {}", on_off(enabled)),
            ),
        };
        match saved {
            (true, message) => Ok(message),
            (false, message) => Err(Error::Storage(format!("could not save setting ({})", message))),
        }
    }

    /// Bookmarked copy first, then every category in order.
    async fn find_article(&self, url: &str) -> Option<Article> {
        if let Some(article) = self.bookmarks.find(url).await {
            debug!("Found {} in bookmarks", url);
            return Some(article);
        }
        for category in Category::ALL {
            let response = self.provider.get_headlines(category.id()).await;
            if let Some(article) = response
                .articles
                .into_iter()
                .find(|a| !a.is_placeholder() && a.url == url)
            {
                return Some(article);
            }
        }
        None
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "On"
    } else {
        "Off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use nr_provider::MockNewsProvider;
    use nr_storage::InMemoryStore;

    const QUANTUM_URL: &str = "https://example.com/quantum-milestone";

    fn app() -> App {
        App::from_parts(
            Arc::new(MockNewsProvider::with_latency(Duration::ZERO)),
            Arc::new(InMemoryStore::new()),
        )
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["nr", "--storage", "memory", "settings", "push", "false"])
            .unwrap();
        assert_eq!(cli.storage, StoreKind::Memory);
        assert_eq!(
            cli.command,
            Commands::Settings {
                command: Some(SettingsCommands::Push { enabled: false })
            }
        );

        let cli = Cli::try_parse_from(["nr", "settings", "theme", "dark"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Settings {
                command: Some(SettingsCommands::Theme {
                    value: Some(ThemePreference::Dark)
                })
            }
        );
        assert_eq!(cli.storage, StoreKind::Sqlite);
        assert_eq!(cli.provider_config().latency, Duration::from_millis(800));

        assert!(Cli::try_parse_from(["nr", "settings", "theme", "sepia"]).is_err());
        assert!(Cli::try_parse_from(["nr", "-v", "-q", "categories"]).is_err());
    }

    #[tokio::test]
    async fn test_headlines_with_filter() {
        let app = app();
        let output = app
            .run(Commands::Headlines {
                category: "technology".to_string(),
                filter: None,
            })
            .await
            .unwrap();
        assert!(output.contains("Quantum Computing Reaches New Milestone"));
        assert!(output.contains("Next-Gen VR Headsets Promise Full Immersion"));

        let output = app
            .run(Commands::Headlines {
                category: "general".to_string(),
                filter: Some("battery".to_string()),
            })
            .await
            .unwrap();
        assert!(output.contains("The Future of Electric Vehicles"));
        assert!(!output.contains("Global Climate Summit"));

        let output = app
            .run(Commands::Headlines {
                category: "sports".to_string(),
                filter: Some("quantum".to_string()),
            })
            .await
            .unwrap();
        assert!(output.contains("No Results Found"));
    }

    #[tokio::test]
    async fn test_search() {
        let app = app();
        let output = app
            .run(Commands::Search {
                query: "quantum".to_string(),
            })
            .await
            .unwrap();
        assert!(output.contains("Quantum Computing Reaches New Milestone"));

        let err = app
            .run(Commands::Search {
                query: "  ".to_string(),
            })
            .await;
        assert!(matches!(err, Err(Error::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_bookmark_toggle_and_list() {
        let app = app();
        let empty = app.run(Commands::Bookmarks).await.unwrap();
        assert!(empty.starts_with("No bookmarks yet"));

        let added = app
            .run(Commands::Bookmark {
                url: QUANTUM_URL.to_string(),
            })
            .await
            .unwrap();
        assert!(added.starts_with("🔖 Bookmarked"));

        let detail = app
            .run(Commands::Read {
                url: QUANTUM_URL.to_string(),
            })
            .await
            .unwrap();
        assert!(detail.starts_with("🔖 Wired"));

        let list = app.run(Commands::Bookmarks).await.unwrap();
        assert!(list.contains("Bookmarks (1)"));

        let removed = app
            .run(Commands::Bookmark {
                url: QUANTUM_URL.to_string(),
            })
            .await
            .unwrap();
        assert!(removed.starts_with("Removed bookmark"));
    }

    #[tokio::test]
    async fn test_unknown_article() {
        let app = app();
        let output = app
            .run(Commands::Read {
                url: "https://example.com/missing".to_string(),
            })
            .await
            .unwrap();
        assert!(output.starts_with("We couldn't load this article."));

        let err = app
            .run(Commands::Bookmark {
                url: "https://example.com/missing".to_string(),
            })
            .await;
        assert!(matches!(err, Err(Error::Provider(_))));
    }

    #[tokio::test]
    async fn test_state_survives_restart_with_sqlite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_config = StoreConfig::sqlite(temp_dir.path().join("news.db"));
        let provider_config = ProviderConfig {
            latency: Duration::ZERO,
            ..ProviderConfig::default()
        };

        let first = App::new(&store_config, &provider_config).await.unwrap();
        first
            .run(Commands::Bookmark {
                url: QUANTUM_URL.to_string(),
            })
            .await
            .unwrap();
        first
            .run(Commands::Settings {
                command: Some(SettingsCommands::Theme {
                    value: Some(ThemePreference::Dark),
                }),
            })
            .await
            .unwrap();
        drop(first);

        let second = App::new(&store_config, &provider_config).await.unwrap();
        let list = second.run(Commands::Bookmarks).await.unwrap();
        assert!(list.contains("Quantum Computing Reaches New Milestone"));
        let shown = second.run(Commands::Settings { command: None }).await.unwrap();
        assert!(shown.contains("Theme              Dark (Dark)"));
    }

    #[tokio::test]
    async fn test_settings() {
        let app = app();
        let run = |command| app.run(Commands::Settings { command: Some(command) });

        assert_eq!(
            run(SettingsCommands::Theme { value: None }).await.unwrap(),
            "Theme: Light"
        );
        assert_eq!(
            run(SettingsCommands::FontSize {
                value: Some(FontSize::Small)
            })
            .await
            .unwrap(),
            "Font size: Small"
        );
        run(SettingsCommands::Push { enabled: false }).await.unwrap();

        let shown = app.run(Commands::Settings { command: None }).await.unwrap();
        assert!(shown.contains("Theme              Light (Light)"));
        assert!(shown.contains("Font size          Small"));
        assert!(shown.contains("Push notifications Off"));
        assert!(shown.contains("Breaking news      On"));
    }
}
