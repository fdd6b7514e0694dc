//! # File-backed Article Store
//!
//! [`ArticleStore`] owns `<root>/articles/` and is the only writer of it.
//!
//! ## Recovery Scan
//!
//! [`ArticleStore::open`] creates the working directory if needed, reads `meta.json`
//! (creating it as `[]` when absent), then loads `{id}.md` for every entry. An entry whose
//! content is missing or unreadable, or whose id or date is unusable, is left out of the
//! index and reported in the [`RecoveryReport`]; the rest of the store still loads. Only a
//! metadata file that is not valid JSON stops the store from opening.
//!
//! ## Save
//!
//! Saves are staged so readers never see an article that did not reach disk:
//!
//! 1. Write the content to a temp file and rename it over `{id}.md`.
//! 2. Re-read `meta.json`, update the entry in place or append it, and rewrite the whole
//!    file the same way (temp file, then rename).
//! 3. Swap the article into the in-memory index.
//!
//! If step 2 fails after step 1 succeeded, `{id}.md` is newer than its metadata until the
//! next successful save of that id. The error is returned to the caller; nothing is rolled
//! back.

use super::{DataStore, DoctorReport};
use crate::error::{BlogError, Result};
use crate::index::ArticleIndex;
use crate::model::{validate_id, Article, ArticleMeta, MetaRecord};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Subdirectory of the root that holds all article files.
pub const ARTICLES_DIR: &str = "articles";
pub const META_FILE: &str = "meta.json";
const CONTENT_EXT: &str = "md";
const FILE_MODE: u32 = 0o644;

/// An entry the recovery scan could not load.
#[derive(Debug)]
pub struct SkippedEntry {
    pub id: String,
    pub error: BlogError,
}

/// Outcome of the recovery scan performed by [`ArticleStore::open`].
#[derive(Debug, Default)]
pub struct RecoveryReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl RecoveryReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn first_error(&self) -> Option<&BlogError> {
        self.skipped.first().map(|entry| &entry.error)
    }

    pub fn into_first_error(self) -> Option<BlogError> {
        self.skipped.into_iter().next().map(|entry| entry.error)
    }
}

pub struct ArticleStore {
    workdir: PathBuf,
    index: Mutex<ArticleIndex>,
}

impl ArticleStore {
    /// Opens the store under `<root>/articles`, rebuilding the index from disk.
    ///
    /// The store is returned even when some entries failed to load; check the report.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<(Self, RecoveryReport)> {
        let workdir = root.as_ref().join(ARTICLES_DIR);
        fs::create_dir_all(&workdir).map_err(BlogError::Io)?;

        let records = match read_records(&workdir.join(META_FILE))? {
            Some(records) => records,
            None => {
                debug!(dir = %workdir.display(), "no metadata file, creating an empty one");
                write_records(&workdir, &[])?;
                Vec::new()
            }
        };

        let mut index = ArticleIndex::new();
        let mut report = RecoveryReport::default();

        for record in &records {
            match load_entry(&workdir, record) {
                Ok(article) => {
                    if index.insert(article).is_some() {
                        warn!(id = %record.id, "duplicate metadata entry, keeping the last one");
                    }
                }
                Err(error) => {
                    warn!(id = %record.id, %error, "skipping article during recovery");
                    report.skipped.push(SkippedEntry {
                        id: record.id.clone(),
                        error,
                    });
                }
            }
        }

        report.loaded = index.len();
        info!(
            dir = %workdir.display(),
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "article store opened"
        );

        let store = Self {
            workdir,
            index: Mutex::new(index),
        };
        Ok((store, report))
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn meta_path(&self) -> PathBuf {
        self.workdir.join(META_FILE)
    }

    pub fn content_path(&self, id: &str) -> PathBuf {
        content_path(&self.workdir, id)
    }

    /// Number of indexed articles.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// All indexed articles, newest first, ties broken by id ascending.
    pub fn list(&self) -> Result<Vec<Article>> {
        let index = self.lock()?;
        Ok(index.ordered())
    }

    pub fn load(&self, id: &str) -> Result<Article> {
        let index = self.lock()?;
        index
            .get(id)
            .cloned()
            .ok_or_else(|| BlogError::ArticleNotFound(id.to_string()))
    }

    /// Creates or overwrites the article with `article.meta.id`.
    pub fn save(&self, article: &Article) -> Result<()> {
        validate_id(article.id())?;

        let mut index = self.lock()?;
        write_atomic(
            &self.workdir,
            &self.content_path(article.id()),
            &article.content,
        )?;
        self.update_meta(&article.meta)?;

        let replaced = index.insert(article.clone()).is_some();
        debug!(
            id = %article.id(),
            bytes = article.content.len(),
            replaced,
            "article saved"
        );
        Ok(())
    }

    /// Read-only consistency check of the files on disk.
    pub fn doctor(&self) -> Result<DoctorReport> {
        let _index = self.lock()?;
        let records = read_records(&self.meta_path())?.unwrap_or_default();
        let mut report = DoctorReport::default();

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                if !report.duplicate_ids.contains(&record.id) {
                    report.duplicate_ids.push(record.id.clone());
                }
                continue;
            }
            if record.to_meta().is_err() {
                report.corrupt_entries.push(record.id.clone());
                continue;
            }
            if !self.content_path(&record.id).is_file() {
                report.missing_content.push(record.id.clone());
            }
        }

        for entry in fs::read_dir(&self.workdir).map_err(BlogError::Io)? {
            let path = entry.map_err(BlogError::Io)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(CONTENT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !seen.contains(stem) {
                    report.orphan_files.push(stem.to_string());
                }
            }
        }
        report.orphan_files.sort();

        Ok(report)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ArticleIndex>> {
        self.index
            .lock()
            .map_err(|_| BlogError::Store("article index lock poisoned".to_string()))
    }

    fn update_meta(&self, meta: &ArticleMeta) -> Result<()> {
        let mut records = read_records(&self.meta_path())?.unwrap_or_default();

        match records.iter_mut().find(|r| r.id == meta.id) {
            Some(existing) => existing.update_from(meta),
            None => records.push(MetaRecord::from(meta)),
        }
        // At most one entry per id survives a save.
        let mut seen = false;
        records.retain(|r| r.id != meta.id || !std::mem::replace(&mut seen, true));

        write_records(&self.workdir, &records)
    }
}

impl DataStore for ArticleStore {
    fn save_article(&self, article: &Article) -> Result<()> {
        self.save(article)
    }

    fn load_article(&self, id: &str) -> Result<Article> {
        self.load(id)
    }

    fn list_articles(&self) -> Result<Vec<Article>> {
        self.list()
    }

    fn doctor(&self) -> Result<DoctorReport> {
        ArticleStore::doctor(self)
    }
}

fn content_path(workdir: &Path, id: &str) -> PathBuf {
    workdir.join(format!("{}.{}", id, CONTENT_EXT))
}

/// `Ok(None)` when the file does not exist. An empty file reads as no entries.
fn read_records(path: &Path) -> Result<Option<Vec<MetaRecord>>> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(BlogError::Io(e)),
    };
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Some(Vec::new()));
    }
    let records = serde_json::from_slice(&raw).map_err(BlogError::Serialization)?;
    Ok(Some(records))
}

fn write_records(workdir: &Path, records: &[MetaRecord]) -> Result<()> {
    let content = serde_json::to_vec_pretty(records).map_err(BlogError::Serialization)?;
    write_atomic(workdir, &workdir.join(META_FILE), &content)
}

fn load_entry(workdir: &Path, record: &MetaRecord) -> Result<Article> {
    let meta = record.to_meta()?;
    let path = content_path(workdir, &meta.id);
    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(BlogError::MissingContent { id: meta.id, path })
        }
        Err(e) => return Err(BlogError::Io(e)),
    };
    Ok(Article::with_meta(meta, content))
}

/// Writes `bytes` to a temp file in `dir`, then renames it over `target`.
pub(crate) fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = dir.join(format!(".write-{}.tmp", Uuid::new_v4()));

    let written = create_file(&tmp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    let result = written.and_then(|_| fs::rename(&tmp_path, target));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(BlogError::Io(e));
    }
    Ok(())
}

#[cfg(unix)]
fn create_file(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn create_file(path: &Path) -> std::io::Result<fs::File> {
    let _ = FILE_MODE;
    OpenOptions::new().write(true).create_new(true).open(path)
}
