//! State Store Port
//!
//! Generic key-value persistence facility. The pipeline writes two named
//! records through this interface (entry history and weekly summaries)
//! and treats the storage format as opaque JSON.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::errors::PipelineError;

/// Current schema version written into every persisted record
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned envelope around a persisted record.
///
/// There is no migration machinery; an unknown version is treated as
/// absent state and logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedRecord<T> {
    pub version: u32,
    pub data: T,
}

impl<T: Serialize + DeserializeOwned> PersistedRecord<T> {
    pub fn new(data: T) -> Self {
        Self {
            version: SCHEMA_VERSION,
            data,
        }
    }

    /// Unwrap a raw stored value, discarding records written by an
    /// unknown schema version
    pub fn decode(key: &str, value: serde_json::Value) -> Option<T> {
        let record: PersistedRecord<T> = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Discarding unreadable record '{}': {}", key, e);
                return None;
            }
        };
        if record.version != SCHEMA_VERSION {
            tracing::warn!(
                "Discarding record '{}' with unknown schema version {}",
                key,
                record.version
            );
            return None;
        }
        Some(record.data)
    }

    pub fn encode(&self) -> Result<serde_json::Value, PipelineError> {
        serde_json::to_value(self).map_err(|e| PipelineError::Storage(e.to_string()))
    }
}

/// Key-value persistence interface
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch a record by key; `None` when the key has never been written
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, PipelineError>;

    /// Write a record, replacing any previous value for the key
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), PipelineError>;
}
