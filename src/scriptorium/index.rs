//! # The Article Index
//!
//! The index is the in-memory map from identifier to [`Article`]. It is built once by the
//! recovery scan and is the authoritative read path afterwards; the files on disk are a
//! durable mirror of it.
//!
//! ## Ordering
//!
//! Listing order is a contract, not an implementation detail: newest creation date
//! first, ties broken by identifier ascending. Homepages take the top N of this order,
//! so it has to be deterministic across calls. See [`newest_first`].

use crate::model::Article;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Comparator for listing: creation date descending, then identifier ascending.
pub fn newest_first(a: &Article, b: &Article) -> Ordering {
    b.meta
        .creation_date
        .cmp(&a.meta.creation_date)
        .then_with(|| a.meta.id.cmp(&b.meta.id))
}

/// Sorts articles into listing order.
pub fn sort_articles(articles: &mut [Article]) {
    articles.sort_by(newest_first);
}

#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    articles: HashMap<String, Article>,
}

impl ArticleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.get(id)
    }

    /// Inserts or replaces the article under its own identifier.
    /// Returns the previous version, if any.
    pub fn insert(&mut self, article: Article) -> Option<Article> {
        self.articles.insert(article.meta.id.clone(), article)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// All articles, cloned, in listing order.
    pub fn ordered(&self) -> Vec<Article> {
        let mut all: Vec<Article> = self.articles.values().cloned().collect();
        sort_articles(&mut all);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArticleMeta;
    use chrono::NaiveDate;

    fn article(id: &str, d: u32, m: u32, y: i32) -> Article {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Article::with_meta(ArticleMeta::new(id, format!("Title {}", id), date), "")
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id()).collect()
    }

    #[test]
    fn orders_newest_first() {
        let mut index = ArticleIndex::new();
        index.insert(article("1", 1, 1, 2024));
        index.insert(article("2", 2, 1, 2024));
        index.insert(article("3", 31, 12, 2023));

        assert_eq!(ids(&index.ordered()), vec!["2", "1", "3"]);
    }

    #[test]
    fn compares_dates_not_their_text() {
        // "02.01.2024" sorts before "31.12.2023" as text, but is the newer date
        let mut index = ArticleIndex::new();
        index.insert(article("old", 31, 12, 2023));
        index.insert(article("new", 2, 1, 2024));

        assert_eq!(ids(&index.ordered()), vec!["new", "old"]);
    }

    #[test]
    fn ties_broken_by_id_ascending() {
        let mut index = ArticleIndex::new();
        index.insert(article("b", 1, 1, 2024));
        index.insert(article("c", 1, 1, 2024));
        index.insert(article("a", 1, 1, 2024));

        for _ in 0..5 {
            assert_eq!(ids(&index.ordered()), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut index = ArticleIndex::new();
        assert!(index.insert(article("x", 1, 1, 2024)).is_none());
        let previous = index.insert(article("x", 2, 2, 2024));

        assert!(previous.is_some());
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get("x").unwrap().meta.creation_date,
            NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()
        );
    }
}
