use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::Article;
use crate::store::DataStore;

/// Saves a new article with a fresh id, dated today.
pub fn run<S: DataStore>(store: &S, title: String, content: Vec<u8>) -> Result<CmdResult> {
    if title.trim().is_empty() {
        return Err(BlogError::Api("Title cannot be empty".into()));
    }

    let article = Article::new(title, content);
    store.save_article(&article)?;

    let message = CmdMessage::success(format!(
        "Article created ({}): {}",
        article.meta.id, article.meta.title
    ));
    let mut result = CmdResult::default().with_affected_articles(vec![article]);
    result.add_message(message);
    Ok(result)
}
