use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Lists articles newest first, keeping only the first `limit` when given.
pub fn run<S: DataStore>(store: &S, limit: Option<usize>) -> Result<CmdResult> {
    let mut articles = store.list_articles()?;
    if let Some(limit) = limit {
        articles.truncate(limit);
    }
    Ok(CmdResult::default().with_listed_articles(articles))
}
