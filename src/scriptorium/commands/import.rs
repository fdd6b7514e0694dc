use crate::commands::{create, CmdResult};
use crate::error::{BlogError, Result};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Creates an article from a markdown file.
///
/// Without an explicit title, the first `# ` heading is used, falling back to the file stem.
pub fn run<S: DataStore>(store: &S, path: &Path, title: Option<String>) -> Result<CmdResult> {
    if !path.is_file() {
        return Err(BlogError::Api(format!(
            "Not a file: {}",
            path.display()
        )));
    }
    let content = fs::read(path).map_err(BlogError::Io)?;

    let title = title
        .or_else(|| heading_title(&content))
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "Untitled".to_string());

    create::run(store, title, content)
}

fn heading_title(content: &[u8]) -> Option<String> {
    String::from_utf8_lossy(content)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.strip_prefix("# "))
        .map(|heading| heading.trim().to_string())
        .filter(|heading| !heading.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn uses_first_heading_as_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "\n# Hello World\n\nBody text\n").unwrap();

        let store = InMemoryStore::new();
        let result = run(&store, &path, None).unwrap();

        let article = &result.affected_articles[0];
        assert_eq!(article.meta.title, "Hello World");
        assert_eq!(article.content, b"\n# Hello World\n\nBody text\n");
    }

    #[test]
    fn falls_back_to_file_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes-on-rust.md");
        fs::write(&path, "No heading here").unwrap();

        let store = InMemoryStore::new();
        let result = run(&store, &path, None).unwrap();
        assert_eq!(result.affected_articles[0].meta.title, "notes-on-rust");
    }

    #[test]
    fn explicit_title_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "# Heading").unwrap();

        let store = InMemoryStore::new();
        let result = run(&store, &path, Some("Chosen".into())).unwrap();
        assert_eq!(result.affected_articles[0].meta.title, "Chosen");
    }

    #[test]
    fn missing_file_is_an_api_error() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let err = run(&store, &dir.path().join("nope.md"), None).unwrap_err();
        assert!(matches!(err, BlogError::Api(_)));
    }
}
