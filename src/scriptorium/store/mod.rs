//! # Storage Layer
//!
//! This module defines the storage abstraction for scriptorium. The [`DataStore`] trait
//! lets the command layer run against either backend.
//!
//! ## Implementations
//!
//! - [`fs::ArticleStore`]: Production file-based storage.
//!   - Metadata for all articles in `articles/meta.json` (JSON array)
//!   - Article content in individual files: `articles/{id}.md`
//!   - Full in-memory index, rebuilt by a recovery scan on open
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Concurrency
//!
//! Stores are shared between threads (one per request in a web server) and take `&self`
//! everywhere. Each implementation serializes every operation, reads included, behind a
//! single mutex held for the whole operation, disk I/O included. There is no read/write
//! split and no background work.
//!
//! ## Storage Format
//!
//! For `ArticleStore`:
//! ```text
//! <root>/
//! └── articles/
//!     ├── meta.json       # [{"id", "title", "creation-date": "DD.MM.YYYY"}, ...]
//!     └── {id}.md         # Raw markdown, one file per article
//! ```

use crate::error::Result;
use crate::model::Article;

pub mod fs;
pub mod memory;

/// Report from the read-only `doctor` check.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    /// Metadata entries whose content file does not exist.
    pub missing_content: Vec<String>,
    /// Content files with no metadata entry.
    pub orphan_files: Vec<String>,
    /// Identifiers listed more than once in the metadata file.
    pub duplicate_ids: Vec<String>,
    /// Metadata entries with an unusable identifier or creation date.
    pub corrupt_entries: Vec<String>,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.missing_content.is_empty()
            && self.orphan_files.is_empty()
            && self.duplicate_ids.is_empty()
            && self.corrupt_entries.is_empty()
    }
}

/// Abstract interface for article storage.
///
/// Implementations must be safe to share between threads and must make every
/// operation atomic with respect to the others.
pub trait DataStore: Send + Sync {
    /// Save an article (create, or overwrite the one with the same id)
    fn save_article(&self, article: &Article) -> Result<()>;

    /// Get an article by id, failing with `ArticleNotFound` if absent
    fn load_article(&self, id: &str) -> Result<Article>;

    /// All articles, newest first, ties broken by id
    fn list_articles(&self) -> Result<Vec<Article>>;

    /// Check metadata and content for inconsistencies without changing anything
    fn doctor(&self) -> Result<DoctorReport>;
}
