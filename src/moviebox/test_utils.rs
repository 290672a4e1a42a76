use crate::api::MovieboxApi;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_dir = temp_dir.path().join("movies");
        let config_dir = temp_dir.path().join("config");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_dir,
        }
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_dir.clone())
    }

    pub fn api(&self) -> MovieboxApi<FileStore> {
        MovieboxApi::new(self.store(), self.config_dir.clone())
    }
}
