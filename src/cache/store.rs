use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use super::backend::SessionStore;
use super::entry::CacheEntry;
use crate::constants::DEFAULT_CACHE_LIFETIME_MS;
use crate::utils::Result;

/// Handle on a single cached value, addressed by a caller-chosen key.
///
/// Several handles may share one [`SessionStore`]; keys must be unique per
/// logical cached value. Expired entries are evicted lazily on `get`, never
/// proactively.
#[derive(Debug, Clone)]
pub struct SessionCache {
    key: String,
    store: Arc<dyn SessionStore>,
}

impl SessionCache {
    /// Create a handle for `key` backed by `store`
    pub fn new(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            store,
        }
    }

    /// The key this handle addresses
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the cached value if present and unexpired.
    ///
    /// Malformed stored data is a miss, never an error. An expired entry is
    /// removed from the store as a side effect of the failing read.
    pub fn get<T: DeserializeOwned>(&self) -> Option<T> {
        self.get_at(now_ms())
    }

    /// Cache `value` with the default lifetime (5 minutes)
    pub fn set<T: Serialize>(&self, value: &T) -> Result<()> {
        self.set_with_lifetime(value, DEFAULT_CACHE_LIFETIME_MS)
    }

    /// Cache `value`, expiring `lifetime_ms` from now.
    ///
    /// A failed write (store full or unavailable) propagates to the caller.
    pub fn set_with_lifetime<T: Serialize>(&self, value: &T, lifetime_ms: i64) -> Result<()> {
        self.set_at(value, lifetime_ms, now_ms())
    }

    /// Remove any cached value unconditionally
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }

    fn get_at<T: DeserializeOwned>(&self, now_ms: i64) -> Option<T> {
        let raw = match self.store.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("failed to read cache entry '{}': {}", self.key, err);
                return None;
            }
        };

        let entry = CacheEntry::decode(&raw)?;
        if entry.is_expired(now_ms) {
            // Lazy eviction; a failed removal still reports a miss
            if let Err(err) = self.store.remove(&self.key) {
                warn!("failed to evict expired entry '{}': {}", self.key, err);
            }
            return None;
        }

        serde_json::from_value(entry.value).ok()
    }

    fn set_at<T: Serialize>(&self, value: &T, lifetime_ms: i64, now_ms: i64) -> Result<()> {
        let entry = CacheEntry::new(serde_json::to_value(value)?, now_ms, lifetime_ms);
        let raw = entry.encode()?;
        self.store.save(&self.key, &raw)
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
