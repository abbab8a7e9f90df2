//! File State Store - One JSON file per key under a data directory

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::PipelineError;
use crate::ports::state_store::StateStore;

/// Key-value store persisting each record as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform default: `<data dir>/moodline`
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("moodline"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, PipelineError> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| PipelineError::Storage(format!("record '{}': {}", key, e)))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PipelineError::Storage(format!("record '{}': {}", key, e))),
        }
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), PipelineError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PipelineError::Storage(e.to_string()))?;
        let bytes =
            serde_json::to_vec_pretty(&value).map_err(|e| PipelineError::Storage(e.to_string()))?;
        tokio::fs::write(self.path_for(key), bytes)
            .await
            .map_err(|e| PipelineError::Storage(format!("record '{}': {}", key, e)))
    }
}
