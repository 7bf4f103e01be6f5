pub mod error;
pub mod provider;
pub mod storage;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use provider::NewsProvider;
pub use storage::{keys, KeyValueStore};
pub use types::{
    filter_articles, Article, ArticleSource, Category, ColorScheme, FontSize, NewsResponse,
    ResponseStatus, ThemePreference,
};
pub use validation::validate_articles;

pub mod prelude {
    pub use super::{Article, Category, Error, KeyValueStore, NewsProvider, NewsResponse, Result};
}
