//! Local key-value persistence seam
//!
//! Models the device's key-value storage service: string keys to string
//! values, each call possibly failing. The app persists exactly one record
//! through this seam, the logged-in identity.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Async key-value store (get/set/remove by key)
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`; removing an absent key is a no-op
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
