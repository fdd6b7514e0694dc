use crate::store::fs::{ArticleStore, RecoveryReport};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: ArticleStore,
    pub report: RecoveryReport,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let (store, report) = ArticleStore::open(&root).expect("failed to open store");
        Self {
            _temp_dir: temp_dir,
            store,
            report,
            root,
        }
    }
}
