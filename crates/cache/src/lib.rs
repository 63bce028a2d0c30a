//! TTL-bounded in-memory cache
//!
//! A single-process key→value store with per-entry expiry. Entries are
//! stamped on insert and evicted lazily: an expired entry is dropped the
//! next time it is read, or by an explicit [`TtlCache::clear`] /
//! [`TtlCache::delete`].
//!
//! The map sits behind a `Mutex` so the read-check-evict sequence is a
//! single critical section; the lock is never held across an await point.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use cache::TtlCache;
//!
//! let cache: TtlCache<String> = TtlCache::new(Duration::from_secs(300));
//! cache.set("job_trends", "computed".to_string());
//! assert_eq!(cache.get("job_trends").as_deref(), Some("computed"));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A stored value plus its insertion stamp
#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// TTL key→value cache
///
/// Cloned values are handed out, so `T` is typically a cheap-to-clone
/// aggregate. A disabled cache always misses and ignores writes.
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
    ttl: Duration,
    enabled: bool,
}

impl<T: Clone> TtlCache<T> {
    /// Create an enabled cache with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            enabled: true,
        }
    }

    /// Create a cache that never stores or returns anything
    pub fn disabled() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Duration::ZERO,
            enabled: false,
        }
    }

    /// Whether this cache stores values at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured TTL
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fetch a live entry, evicting it if expired
    pub fn get(&self, key: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }

        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                tracing::debug!(key, "cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                tracing::debug!(key, "cache entry expired");
                entries.remove(key);
                None
            }
            None => {
                tracing::debug!(key, "cache miss");
                None
            }
        }
    }

    /// Store a value, overwriting any previous entry for the key
    pub fn set(&self, key: &str, value: T) {
        if !self.enabled {
            return;
        }

        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
        tracing::debug!(key, "cached value");
    }

    /// Drop all entries
    pub fn clear(&self) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.clear();
        tracing::info!("cache cleared");
    }

    /// Drop one entry; no-op when the key is absent
    pub fn delete(&self, key: &str) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if entries.remove(key).is_some() {
            tracing::debug!(key, "deleted cache entry");
        }
    }

    /// Number of stored entries, expired or not
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_set_then_get() {
        let cache = TtlCache::new(Duration::from_secs(10));
        cache.set("key", 42);
        assert_eq!(cache.get("key"), Some(42));
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(10));
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_expiry_evicts_on_read() {
        let cache = TtlCache::new(Duration::from_millis(50));
        cache.set("key", "value".to_string());
        assert!(cache.get("key").is_some());

        thread::sleep(Duration::from_millis(60));

        assert_eq!(cache.get("key"), None);
        // Eviction happened during the read, not just a filtered answer
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let cache = TtlCache::new(Duration::from_secs(10));
        cache.set("key", 1);
        cache.set("key", 2);
        assert_eq!(cache.get("key"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = TtlCache::new(Duration::from_secs(10));
        cache.set("a", 1);
        cache.set("b", 2);

        cache.clear();

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_delete_removes_only_named_key() {
        let cache = TtlCache::new(Duration::from_secs(10));
        cache.set("a", 1);
        cache.set("b", 2);

        cache.delete("a");

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
    }

    #[test]
    fn test_delete_unknown_key_is_noop() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(10));
        cache.delete("nope");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_disabled_cache_never_stores() {
        let cache = TtlCache::disabled();
        cache.set("key", 42);

        assert_eq!(cache.get("key"), None);
        assert!(cache.is_empty());
        assert!(!cache.is_enabled());
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let cache = Arc::new(TtlCache::new(Duration::from_secs(10)));
        let writer = {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    cache.set(&format!("key{i}"), i);
                }
            })
        };
        writer.join().unwrap();

        assert_eq!(cache.len(), 100);
        assert_eq!(cache.get("key99"), Some(99));
    }
}
