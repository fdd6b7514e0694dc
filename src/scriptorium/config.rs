use crate::error::{BlogError, Result};
use crate::store::fs::write_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";

/// Settings kept in `<root>/config.json`. File keys match the CLI keys; any key
/// missing from the file takes its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlogConfig {
    /// How many articles the home listing shows
    pub home_limit: usize,

    /// Characters of content shown next to each title in listings
    pub preview_chars: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            home_limit: 10,
            preview_chars: 60,
        }
    }
}

impl BlogConfig {
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILENAME);
        match fs::read(&path) {
            Ok(raw) => serde_json::from_slice(&raw).map_err(BlogError::Serialization),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BlogError::Io(e)),
        }
    }

    /// Replaces `<root>/config.json` atomically, creating `root` when needed.
    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();
        fs::create_dir_all(root).map_err(BlogError::Io)?;
        let content = serde_json::to_vec_pretty(self).map_err(BlogError::Serialization)?;
        write_atomic(root, &root.join(CONFIG_FILENAME), &content)?;
        debug!(root = %root.display(), "config saved");
        Ok(())
    }

    /// Value of a setting by its CLI key (`home-limit`, `preview-chars`)
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "home-limit" => Some(self.home_limit.to_string()),
            "preview-chars" => Some(self.preview_chars.to_string()),
            _ => None,
        }
    }

    /// Set a setting by its CLI key, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: usize = value
            .parse()
            .map_err(|_| BlogError::Api(format!("{} expects a number, got {:?}", key, value)))?;
        match key {
            "home-limit" => self.home_limit = parsed,
            "preview-chars" => self.preview_chars = parsed,
            _ => return Err(BlogError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["home-limit", "preview-chars"]
    }
}
