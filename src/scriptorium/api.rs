//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all operations, whatever the UI: the bundled CLI, or a web layer rendering
//! a homepage and article pages.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing `DD.MM.YYYY` dates, applying the configured home limit)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and no presentation.
//!
//! ## Generic Over DataStore
//!
//! `BlogApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BlogApi<ArticleStore>`
//! - Testing: `BlogApi<InMemoryStore>`
//!
//! Every method takes `&self`, so one `BlogApi` behind an `Arc` can serve many threads.

use crate::commands;
use crate::config::BlogConfig;
use crate::error::{BlogError, Result};
use crate::model::parse_date;
use crate::store::DataStore;
use chrono::NaiveDate;
use std::path::Path;

/// The main API facade for blog operations.
pub struct BlogApi<S: DataStore> {
    store: S,
    paths: commands::BlogPaths,
    config: BlogConfig,
}

impl<S: DataStore> BlogApi<S> {
    pub fn new(store: S, paths: commands::BlogPaths, config: BlogConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    /// The configured number of articles (newest first) for a home listing.
    pub fn home(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, Some(self.config.home_limit))
    }

    pub fn list_articles(&self, limit: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, limit)
    }

    pub fn view_articles<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn create_article(
        &self,
        title: String,
        content: impl Into<Vec<u8>>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, title, content.into())
    }

    pub fn update_article(&self, update: &ArticleUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, update)
    }

    pub fn import_article(&self, path: &Path, title: Option<String>) -> Result<commands::CmdResult> {
        commands::import::run(&self.store, path, title)
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn settings(&self) -> &BlogConfig {
        &self.config
    }
}

/// Parses a user supplied `DD.MM.YYYY` creation date.
pub fn parse_creation_date(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| {
        BlogError::Api(format!(
            "Invalid date {:?}, expected DD.MM.YYYY",
            value
        ))
    })
}

pub use crate::commands::config::ConfigAction;
pub use commands::{ArticleUpdate, BlogPaths, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api_with(store: InMemoryStore, dir: &TempDir, config: BlogConfig) -> BlogApi<InMemoryStore> {
        BlogApi::new(store, BlogPaths::new(dir.path()), config)
    }

    #[test]
    fn home_applies_configured_limit() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().with_articles(5).store;
        let config = BlogConfig {
            home_limit: 2,
            ..BlogConfig::default()
        };
        let api = api_with(store, &dir, config);

        let result = api.home().unwrap();
        let ids: Vec<_> = result.listed_articles.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["5", "4"]);
    }

    #[test]
    fn create_then_view() {
        let dir = TempDir::new().unwrap();
        let api = api_with(InMemoryStore::new(), &dir, BlogConfig::default());

        let created = api.create_article("Hello".into(), "# Hi").unwrap();
        let id = created.affected_articles[0].id().to_string();

        let viewed = api.view_articles(&[id]).unwrap();
        assert_eq!(viewed.listed_articles[0].content, b"# Hi");
    }

    #[test]
    fn parses_canonical_dates_only() {
        assert_eq!(
            parse_creation_date("02.01.2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        for bad in ["2024/01/02", "2.1.2024", "02.01.2024\n"] {
            assert!(matches!(parse_creation_date(bad), Err(BlogError::Api(_))));
        }
    }
}
