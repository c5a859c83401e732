//! JSON file store.
//!
//! The document maps app id to the latest [`ConsentRecord`]. Writers hold an
//! exclusive lock on a sibling `.lock` file for the whole read-modify-write.

use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::consent::CategoryId;
use crate::storage::{ConsentRecord, ConsentStore, StorageError};

type Document = BTreeMap<String, ConsentRecord>;

pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.local/share/cookie-consent/consents.json` or the platform
    /// equivalent via `dirs::data_dir()`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("cookie-consent").join("consents.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Latest record for `app_id`, if one was ever written.
    ///
    /// Read-only: never creates the data directory or the lock file. Takes
    /// a shared lock when a writer has already created one.
    pub fn latest(&self, app_id: &str) -> Result<Option<ConsentRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let _lock = self.lock_shared()?;
        let mut document = self.read_document()?;
        Ok(document.remove(app_id))
    }

    /// Write a record for `app_id`, replacing any earlier one.
    pub fn write(&self, record: ConsentRecord) -> Result<(), StorageError> {
        let _lock = self.lock()?;
        let mut document = self.read_document()?;
        document.insert(record.app_id.clone(), record);
        let content = serde_json::to_string_pretty(&document).map_err(StorageError::Serialize)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn read_document(&self) -> Result<Document, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn lock(&self) -> Result<StoreLock, StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.io_error(e))?;
        FileExt::lock_exclusive(&file).map_err(|e| self.io_error(e))?;
        Ok(StoreLock { file: Some(file) })
    }

    /// Shared lock for readers. No lock file means no writer ever ran, so
    /// there is nothing to wait for.
    fn lock_shared(&self) -> Result<StoreLock, StorageError> {
        let file = match File::open(self.lock_path()) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreLock { file: None }),
            Err(e) => return Err(self.io_error(e)),
        };
        FileExt::lock_shared(&file).map_err(|e| self.io_error(e))?;
        Ok(StoreLock { file: Some(file) })
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Releases the advisory lock on drop.
struct StoreLock {
    file: Option<File>,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = FileExt::unlock(file);
        }
    }
}

impl ConsentStore for FileConsentStore {
    fn store_cookies(&self, categories: &[CategoryId], app_id: &str, on_done: &mut dyn FnMut()) {
        let record = ConsentRecord::new(app_id, categories);
        let record_id = record.id;
        match self.write(record) {
            Ok(()) => {
                tracing::info!(
                    app_id,
                    %record_id,
                    path = %self.path.display(),
                    "Consent recorded"
                );
                on_done();
            }
            Err(e) => {
                tracing::error!(app_id, error = %e, "Failed to record consent");
            }
        }
    }
}
