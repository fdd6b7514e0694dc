use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let articles = ids
        .iter()
        .map(|id| store.load_article(id.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_articles(articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_in_requested_order() {
        let fixture = StoreFixture::new().with_articles(3);
        let result = run(&fixture.store, &["1", "3"]).unwrap();
        let ids: Vec<_> = result.listed_articles.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new().with_articles(1);
        let err = run(&fixture.store, &["1", "missing"]).unwrap_err();
        assert!(err.is_not_found());
    }
}
