//! # Domain Model
//!
//! An [`Article`] is its [`ArticleMeta`] (identifier, title, creation date) plus the raw
//! markdown bytes of its content. Metadata for every article lives together in one
//! JSON document, while each article's content lives in its own `<id>.md` file.
//!
//! ## Creation Dates
//!
//! Creation dates are calendar dates with no time-of-day component. Their canonical
//! textual form is `DD.MM.YYYY` ([`DATE_FORMAT`]), both on disk and at the CLI.
//!
//! ## Identifiers
//!
//! The identifier doubles as the filename stem of the content file, so it must be
//! usable as one: see [`validate_id`]. New articles get a UUID v4 identifier.
//!
//! ## On-disk Records
//!
//! [`MetaRecord`] is the shape of one entry in the metadata file. Dates are kept as raw
//! text there so that a single corrupt entry can be isolated during recovery instead of
//! failing the whole document.

use crate::error::{BlogError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical creation date format (`DD.MM.YYYY`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a date in its canonical form only: two-digit day and month, four-digit
/// year, no surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == value)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMeta {
    pub id: String,
    pub title: String,
    pub creation_date: NaiveDate,
}

impl ArticleMeta {
    pub fn new(id: impl Into<String>, title: impl Into<String>, creation_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            creation_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub meta: ArticleMeta,
    pub content: Vec<u8>,
}

impl Article {
    /// A brand new article: fresh identifier, dated today.
    pub fn new(title: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            meta: ArticleMeta::new(
                Uuid::new_v4().to_string(),
                title,
                Local::now().date_naive(),
            ),
            content: content.into(),
        }
    }

    pub fn with_meta(meta: ArticleMeta, content: impl Into<Vec<u8>>) -> Self {
        Self {
            meta,
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Content as text, replacing invalid UTF-8 sequences.
    pub fn content_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// One entry of the metadata file, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "creation-date")]
    pub creation_date: String,
}

impl MetaRecord {
    pub fn to_meta(&self) -> Result<ArticleMeta> {
        validate_id(&self.id)?;
        let creation_date = parse_date(&self.creation_date).ok_or_else(|| BlogError::CorruptDate {
            id: self.id.clone(),
            value: self.creation_date.clone(),
        })?;
        Ok(ArticleMeta::new(
            self.id.clone(),
            self.title.clone(),
            creation_date,
        ))
    }

    /// Overwrite title and date in place, keeping the entry's position.
    pub fn update_from(&mut self, meta: &ArticleMeta) {
        self.title = meta.title.clone();
        self.creation_date = format_date(meta.creation_date);
    }
}

impl From<&ArticleMeta> for MetaRecord {
    fn from(meta: &ArticleMeta) -> Self {
        Self {
            id: meta.id.clone(),
            title: meta.title.clone(),
            creation_date: format_date(meta.creation_date),
        }
    }
}

/// Checks that an identifier can safely be used as a filename stem.
pub fn validate_id(id: &str) -> Result<()> {
    let unsafe_char = |c: char| c == '/' || c == '\\' || c.is_control();
    if id.is_empty() || id.starts_with('.') || id.chars().any(unsafe_char) {
        return Err(BlogError::InvalidId(id.to_string()));
    }
    Ok(())
}
