// Gateway module for cache - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod backend;
mod entry;
mod store;

// Public re-exports - the ONLY way to access cache functionality
pub use backend::{FileStore, MemoryStore, SessionStore};
pub use entry::CacheEntry;
pub use store::SessionCache;

use std::sync::Arc;

use crate::app::CacheConfig;
use crate::utils::Result;

/// Build the session store selected by configuration.
///
/// The "file" backend persists across restarts; anything else gets the
/// in-memory store, which matches per-tab session semantics.
pub fn init(config: &CacheConfig) -> Result<Arc<dyn SessionStore>> {
    if config.backend == "file" {
        let store = FileStore::in_user_cache_dir(&config.namespace)?;
        return Ok(Arc::new(store));
    }
    Ok(Arc::new(MemoryStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_defaults_to_the_memory_backend() {
        let store = init(&CacheConfig::default()).unwrap();
        let cache = SessionCache::new(store, "probe");
        cache.set(&true).unwrap();
        assert_eq!(cache.get::<bool>(), Some(true));
    }
}
