//! Memory State Store - Ephemeral key-value store
//!
//! Backs tests and servers run without a data directory; state is lost
//! on process exit.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::PipelineError;
use crate::ports::state_store::StateStore;

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    records: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, PipelineError> {
        Ok(self.records.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), PipelineError> {
        self.records.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_last_put() {
        let store = MemoryStateStore::new();
        store.put("k", serde_json::json!("v")).await.unwrap();
        assert_eq!(
            store.get("k").await.unwrap(),
            Some(serde_json::json!("v"))
        );
        assert_eq!(store.get("other").await.unwrap(), None);
    }
}
