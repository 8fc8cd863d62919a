//! Local submission cache used when the endpoint cannot confirm receipt.
//!
//! Purpose: Keep a best-effort local copy of payloads that may not have reached the endpoint.
//! Responsibilities: Append payloads in insertion order and read them back.
//! Non-scope: Replaying cached payloads, eviction, or cross-process locking.
//! Invariants/Assumptions: The cache is append-only and unbounded; the file holds one JSON array.
//!
//! A missing or empty cache file is an empty cache. A file that does not parse,
//! including one that is not UTF-8, is renamed to `*.corrupt.{millis}` and a
//! fresh array is started, so a damaged cache never blocks the fallback path.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::error::CacheError;
use crate::models::SubmissionPayload;

/// Append-only store for submission payloads.
pub trait SubmissionCache: Send + Sync {
    /// Append a payload to the end of the cache.
    fn append(&self, payload: &SubmissionPayload) -> Result<(), CacheError>;

    /// Return every cached payload in insertion order.
    fn load(&self) -> Result<Vec<SubmissionPayload>, CacheError>;
}

/// Cache persisted as a JSON array in a single file.
#[derive(Debug)]
pub struct JsonFileCache {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<Vec<SubmissionPayload>, CacheError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // Bytes are parsed directly so invalid UTF-8 surfaces as a parse error.
        Ok(serde_json::from_slice(&content)?)
    }

    /// Move the damaged file aside as `*.corrupt.<unix-millis>[-n]`.
    fn backup_corrupt_file(&self) -> Result<PathBuf, CacheError> {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let mut backup_path = self.path.with_extension(format!("corrupt.{millis}"));
        let mut attempt = 1u32;
        while backup_path.exists() {
            backup_path = self
                .path
                .with_extension(format!("corrupt.{millis}-{attempt}"));
            attempt += 1;
        }
        fs::rename(&self.path, &backup_path).map_err(|e| self.io_error(e))?;
        Ok(backup_path)
    }

    fn write_entries(&self, entries: &[SubmissionPayload]) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let content = serde_json::to_string(entries)?;
        fs::write(&temp_path, content).map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl SubmissionCache for JsonFileCache {
    fn append(&self, payload: &SubmissionPayload) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().map_err(|_| CacheError::Poisoned)?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(CacheError::Serialization(e)) => {
                let backup = self.backup_corrupt_file()?;
                warn!(
                    error = %e,
                    backup = %backup.display(),
                    "Submission cache was corrupt, starting a new one"
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        entries.push(payload.clone());
        self.write_entries(&entries)?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Submission appended to local cache"
        );
        Ok(())
    }

    fn load(&self) -> Result<Vec<SubmissionPayload>, CacheError> {
        self.read_entries()
    }
}

/// Open the file cache at `path`, falling back to an in-memory cache when its
/// directory cannot be created.
pub fn open_submission_cache(path: &Path) -> Arc<dyn SubmissionCache> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match parent.map(fs::create_dir_all).transpose() {
        Ok(_) => Arc::new(JsonFileCache::new(path)),
        Err(e) => {
            warn!(
                error = %e,
                path = %path.display(),
                "Cache directory unavailable, cached submissions will not outlive this session"
            );
            Arc::new(MemoryCache::new())
        }
    }
}

/// In-memory cache, used when no writable data directory is available.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<Vec<SubmissionPayload>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubmissionCache for MemoryCache {
    fn append(&self, payload: &SubmissionPayload) -> Result<(), CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Poisoned)?
            .push(payload.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vec<SubmissionPayload>, CacheError> {
        Ok(self.entries.lock().map_err(|_| CacheError::Poisoned)?.clone())
    }
}
