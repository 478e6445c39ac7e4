use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted cache entry: the payload plus its absolute expiry timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: Value,
    pub expired_at: i64,
}

impl CacheEntry {
    /// Create an entry expiring `lifetime_ms` after `now_ms`
    pub fn new(value: Value, now_ms: i64, lifetime_ms: i64) -> Self {
        Self {
            value,
            expired_at: now_ms + lifetime_ms,
        }
    }

    /// Check whether the entry is stale at the given instant
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expired_at <= now_ms
    }

    /// Encode as the single-string storage representation (base64-wrapped JSON)
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64.encode(json))
    }

    /// Decode a stored string. Malformed input of any kind yields `None`,
    /// never an error; callers treat it as a cache miss.
    pub fn decode(raw: &str) -> Option<Self> {
        let json = BASE64.decode(raw).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_decode_round_trip() {
        let entry = CacheEntry::new(json!({"id": 42, "title": "Sociology 101"}), 1_000, 500);
        let raw = entry.encode().unwrap();
        let decoded = CacheEntry::decode(&raw).unwrap();
        assert_eq!(decoded.value, entry.value);
        assert_eq!(decoded.expired_at, 1_500);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        // Not base64 at all
        assert!(CacheEntry::decode("%%%not-base64%%%").is_none());
        // Valid base64, but not JSON underneath
        let raw = BASE64.encode(b"definitely not json");
        assert!(CacheEntry::decode(&raw).is_none());
        // Valid JSON, wrong shape
        let raw = BASE64.encode(b"[1, 2, 3]");
        assert!(CacheEntry::decode(&raw).is_none());
    }

    #[test]
    fn test_expiry_boundary() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);
        assert!(!entry.is_expired(1_499));
        assert!(entry.is_expired(1_500));
        assert!(entry.is_expired(2_000));
    }
}
