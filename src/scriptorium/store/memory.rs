use super::{DataStore, DoctorReport};
use crate::error::{BlogError, Result};
use crate::index::ArticleIndex;
use crate::model::{validate_id, Article};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    index: Mutex<ArticleIndex>,
    simulate_write_error: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following save fail with an I/O error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, ArticleIndex>> {
        self.index
            .lock()
            .map_err(|_| BlogError::Store("article index lock poisoned".to_string()))
    }
}

impl DataStore for InMemoryStore {
    fn save_article(&self, article: &Article) -> Result<()> {
        validate_id(article.id())?;
        let mut index = self.lock()?;
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BlogError::Io(io::Error::other("simulated write error")));
        }
        index.insert(article.clone());
        Ok(())
    }

    fn load_article(&self, id: &str) -> Result<Article> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| BlogError::ArticleNotFound(id.to_string()))
    }

    fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.lock()?.ordered())
    }

    fn doctor(&self) -> Result<DoctorReport> {
        Ok(DoctorReport::default())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ArticleMeta;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` articles with ids "1".."count", one day apart starting 01.01.2024.
        pub fn with_articles(self, count: usize) -> Self {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            for i in 0..count {
                let id = (i + 1).to_string();
                let date = start + chrono::Duration::days(i as i64);
                let meta = ArticleMeta::new(id.clone(), format!("Article {}", id), date);
                let article = Article::with_meta(meta, format!("# Article {}\n", id));
                self.store.save_article(&article).unwrap();
            }
            self
        }

        pub fn with_article(self, id: &str, title: &str, date: &str, content: &str) -> Self {
            let date = NaiveDate::parse_from_str(date, crate::model::DATE_FORMAT).unwrap();
            let article = Article::with_meta(ArticleMeta::new(id, title, date), content);
            self.store.save_article(&article).unwrap();
            self
        }
    }
}
