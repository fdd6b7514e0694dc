use crate::commands::{ArticleUpdate, CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::store::DataStore;

/// Edits an existing article in place. The id never changes; the creation date
/// only changes when the update carries one.
pub fn run<S: DataStore>(store: &S, update: &ArticleUpdate) -> Result<CmdResult> {
    let mut article = store.load_article(&update.id)?;

    if update.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for {}",
            article.meta.id
        )));
        return Ok(result);
    }

    if let Some(title) = &update.title {
        if title.trim().is_empty() {
            return Err(BlogError::Api("Title cannot be empty".into()));
        }
        article.meta.title = title.clone();
    }
    if let Some(content) = &update.content {
        article.content = content.clone();
    }
    if let Some(date) = update.creation_date {
        article.meta.creation_date = date;
    }

    store.save_article(&article)?;

    let message = CmdMessage::success(format!(
        "Article updated ({}): {}",
        article.meta.id, article.meta.title
    ));
    let mut result = CmdResult::default().with_affected_articles(vec![article]);
    result.add_message(message);
    Ok(result)
}
