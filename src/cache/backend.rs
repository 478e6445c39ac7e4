use directories::ProjectDirs;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::utils::{Result, SyllabusError};

/// String key/value store scoped to the current session.
///
/// Reads that fail are reported as errors so the cache layer can decide
/// how to degrade; writes that fail are always fatal to the caller.
pub trait SessionStore: std::fmt::Debug {
    /// Load the raw string stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Persist `value` under `key`, overwriting any prior entry
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove any entry under `key` unconditionally
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store, the per-process analog of per-tab session storage.
/// Entries live exactly as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// File-backed store for state that should survive a restart
#[derive(Debug)]
pub struct FileStore {
    store_dir: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at `store_dir`
    pub fn new(store_dir: PathBuf) -> Result<Self> {
        // Ensure store directory exists
        fs::create_dir_all(&store_dir)?;
        Ok(Self { store_dir })
    }

    /// Create a store under the platform cache directory
    /// (~/.cache/<namespace> on Linux, ~/Library/Caches/<namespace> on macOS)
    pub fn in_user_cache_dir(namespace: &str) -> Result<Self> {
        let store_dir = if let Some(proj_dirs) = ProjectDirs::from("", "", namespace) {
            proj_dirs.cache_dir().to_path_buf()
        } else {
            // Fallback to ~/.cache/<namespace>
            let home = std::env::var("HOME")
                .map_err(|_| SyllabusError::StorageError("could not determine home directory".to_string()))?;
            PathBuf::from(home).join(".cache").join(namespace)
        };
        Self::new(store_dir)
    }

    /// Derive a file-safe name for a key, sharded on the first 2 hash chars
    fn entry_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        self.store_dir
            .join(&digest[..2])
            .join(format!("{}.entry", &digest[..16]))
    }
}

impl SessionStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
