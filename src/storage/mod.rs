//! Persistence collaborator for consent decisions.

mod file;
mod memory;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use crate::consent::CategoryId;

pub use file::FileConsentStore;
pub use memory::MemoryConsentStore;

/// Records a consent decision.
///
/// Implementations invoke `on_done` after the commitment is durably
/// recorded, and handle (log) their own failures without invoking it.
pub trait ConsentStore: Send + Sync {
    fn store_cookies(&self, categories: &[CategoryId], app_id: &str, on_done: &mut dyn FnMut());
}

/// A persisted consent decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub id: Uuid,
    pub app_id: String,
    pub categories: Vec<CategoryId>,
    pub recorded_at_unix: u64,
}

impl ConsentRecord {
    pub fn new(app_id: &str, categories: &[CategoryId]) -> Self {
        let recorded_at_unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            id: Uuid::new_v4(),
            app_id: app_id.to_string(),
            categories: categories.to_vec(),
            recorded_at_unix,
        }
    }
}

/// Errors raised inside a store. Never surfaced to the dialog.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access consent store '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse consent store '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize consent records: {0}")]
    Serialize(#[source] serde_json::Error),
}
