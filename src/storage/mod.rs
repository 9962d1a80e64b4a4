pub mod adapter;
pub mod layout;

pub use adapter::{FsStorageAdapter, StorageAdapter};
pub use layout::{LayoutState, LayoutStorage};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

const HEALTH_CHECK_KEY: &str = "tektite-storage-test";
const HEALTH_CHECK_VALUE: &str = "test-value";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write key {key:?}")]
    Write {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to encode JSON for key {key:?}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to persist layout preferences")]
    LayoutSave(#[source] Box<StorageError>),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StorageHealth {
    pub available: bool,
    pub adapter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Uniform async key/value surface over an injected adapter. Read-like
/// operations swallow adapter failures and log them; write-like operations
/// propagate so callers can tell the user persistence failed.
#[derive(Clone)]
pub struct StorageManager {
    adapter: Arc<dyn StorageAdapter>,
}

impl StorageManager {
    pub fn new(adapter: Arc<dyn StorageAdapter>) -> Self {
        StorageManager { adapter }
    }

    pub fn adapter_type(&self) -> &'static str {
        self.adapter.adapter_type()
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        match self.adapter.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!("storage.get failed for key {key:?}: {err:#}");
                None
            }
        }
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.adapter
            .set(key, value)
            .await
            .map_err(|source| StorageError::Write {
                key: key.to_string(),
                source,
            })
    }

    pub async fn remove(&self, key: &str) {
        if let Err(err) = self.adapter.remove(key).await {
            warn!("storage.remove failed for key {key:?}: {err:#}");
        }
    }

    pub async fn clear(&self) {
        if let Err(err) = self.adapter.clear().await {
            warn!("storage.clear failed: {err:#}");
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key).await?;
        match serde_json::from_str(&value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!("storage: malformed JSON under key {key:?}: {err}");
                None
            }
        }
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string_pretty(value).map_err(|source| StorageError::Encode {
                key: key.to_string(),
                source,
            })?;
        self.set(key, &serialized).await
    }

    /// Full write/read/delete probe against the adapter. Reads go through the
    /// adapter directly so read failures show up in the report instead of
    /// being swallowed. The sentinel key is removed on every exit path.
    pub async fn health_check(&self) -> StorageHealth {
        let mut error = None;
        let mut retrieved = None;

        match self.adapter.set(HEALTH_CHECK_KEY, HEALTH_CHECK_VALUE).await {
            Ok(()) => match self.adapter.get(HEALTH_CHECK_KEY).await {
                Ok(value) => retrieved = value,
                Err(err) => error = Some(format!("{err:#}")),
            },
            Err(err) => error = Some(format!("{err:#}")),
        }

        // Cleanup runs whether or not the probe succeeded.
        self.remove(HEALTH_CHECK_KEY).await;

        StorageHealth {
            available: error.is_none() && retrieved.as_deref() == Some(HEALTH_CHECK_VALUE),
            adapter: self.adapter_type().to_string(),
            error,
        }
    }

    /// Startup diagnostic; logs the health outcome and never fails.
    pub async fn initialize(&self) {
        let health = self.health_check().await;
        if health.available {
            info!("storage initialized: {} adapter", health.adapter);
        } else {
            warn!(
                "storage unavailable ({} adapter): {}",
                health.adapter,
                health.error.as_deref().unwrap_or("read-back mismatch")
            );
        }
    }
}
