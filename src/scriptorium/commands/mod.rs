use crate::config::BlogConfig;
use crate::model::Article;
use crate::store::DoctorReport;
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod doctor;
pub mod import;
pub mod list;
pub mod update;
pub mod view;

/// Filesystem locations a blog instance works with.
#[derive(Debug, Clone)]
pub struct BlogPaths {
    /// Root directory; articles live in `<root>/articles`, config in `<root>/config.json`
    pub root: PathBuf,
}

impl BlogPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.root
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_articles: Vec<Article>,
    pub listed_articles: Vec<Article>,
    pub config: Option<BlogConfig>,
    pub doctor: Option<DoctorReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_articles(mut self, articles: Vec<Article>) -> Self {
        self.affected_articles = articles;
        self
    }

    pub fn with_listed_articles(mut self, articles: Vec<Article>) -> Self {
        self.listed_articles = articles;
        self
    }

    pub fn with_config(mut self, config: BlogConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_doctor(mut self, report: DoctorReport) -> Self {
        self.doctor = Some(report);
        self
    }
}

/// An edit to an existing article. Fields left as `None` keep their stored value,
/// including the creation date.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<Vec<u8>>,
    pub creation_date: Option<NaiveDate>,
}

impl ArticleUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
            creation_date: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.creation_date.is_none()
    }
}
