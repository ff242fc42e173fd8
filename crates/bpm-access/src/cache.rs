//! Keyed record cache with per-entry expiry, backed by moka
//!
//! Guards repeated remote fetches. An entry is valid while
//! `now - timestamp <= expiry`; stale entries are evicted when read. There is
//! no size bound and no LRU policy.

use moka::future::Cache;
use moka::Expiry;
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time-to-live for cached entries (5 minutes)
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(5 * 60);

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of live entries
    pub entry_count: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Arc<dyn Any + Send + Sync>,
    timestamp: Instant,
    expiry: Duration,
}

impl CacheEntry {
    fn is_valid(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) <= self.expiry
    }
}

/// Hands each entry's own expiry to moka
struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.expiry)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.expiry)
    }
}

/// Record cache shared by the catalog repositories
///
/// Cloning is cheap; clones share entries and the enable switch.
#[derive(Debug, Clone)]
pub struct RecordCache {
    inner: Cache<String, CacheEntry>,
    enabled: Arc<AtomicBool>,
    default_expiry: Duration,
}

impl RecordCache {
    /// Create cache with the given default expiry
    #[must_use]
    pub fn new(default_expiry: Duration) -> Self {
        Self {
            inner: Cache::builder().expire_after(EntryExpiry).build(),
            enabled: Arc::new(AtomicBool::new(true)),
            default_expiry,
        }
    }

    /// Create cache that starts switched off
    #[must_use]
    pub fn disabled(default_expiry: Duration) -> Self {
        let cache = Self::new(default_expiry);
        cache.set_enabled(false);
        cache
    }

    /// Whether caching is on
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Switch caching on or off
    ///
    /// While off, `get` always misses and `set` does nothing.
    #[inline]
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Default expiry used by [`RecordCache::set`]
    #[inline]
    #[must_use]
    pub fn default_expiry(&self) -> Duration {
        self.default_expiry
    }

    /// Get a value
    ///
    /// Misses when absent, stale (the entry is evicted), stored under a
    /// different type, or when caching is off.
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.is_enabled() {
            return None;
        }

        let entry = self.inner.get(key).await?;
        if !entry.is_valid(Instant::now()) {
            tracing::debug!(key, "evicting stale cache entry");
            self.inner.invalidate(key).await;
            return None;
        }

        let value = entry.data.downcast_ref::<T>().cloned();
        if value.is_none() {
            tracing::debug!(key, "cache entry holds a different type");
        }
        value
    }

    /// Store a value with the default expiry
    pub async fn set<T>(&self, key: impl Into<String>, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.set_with_expiry(key, value, self.default_expiry).await;
    }

    /// Store a value with an explicit expiry, overwriting any previous entry
    pub async fn set_with_expiry<T>(&self, key: impl Into<String>, value: T, expiry: Duration)
    where
        T: Send + Sync + 'static,
    {
        if !self.is_enabled() {
            return;
        }

        let entry = CacheEntry {
            data: Arc::new(value),
            timestamp: Instant::now(),
            expiry,
        };
        self.inner.insert(key.into(), entry).await;
    }

    /// Remove one entry
    #[inline]
    pub async fn invalidate(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    /// Remove all entries
    #[inline]
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks().await;
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for RecordCache {
    /// Create cache with the default 5 minute expiry
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let cache = RecordCache::default();
        cache.set("all_services", vec![1_u32, 2, 3]).await;

        let hit = cache.get::<Vec<u32>>("all_services").await;
        assert_eq!(hit, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn missing_key_returns_none() {
        let cache = RecordCache::default();
        assert!(cache.get::<String>("services_42").await.is_none());
    }

    #[tokio::test]
    async fn wrong_type_misses() {
        let cache = RecordCache::default();
        cache.set("k", 7_u64).await;
        assert!(cache.get::<String>("k").await.is_none());
        assert_eq!(cache.get::<u64>("k").await, Some(7));
    }

    #[tokio::test]
    async fn expired_entry_is_evicted_and_set_still_works() {
        let cache = RecordCache::default();
        cache
            .set_with_expiry("short", "v1".to_string(), Duration::from_millis(30))
            .await;
        assert_eq!(cache.get::<String>("short").await.as_deref(), Some("v1"));

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(cache.get::<String>("short").await.is_none());

        cache.set("short", "v2".to_string()).await;
        assert_eq!(cache.get::<String>("short").await.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let cache = RecordCache::default();
        cache.set("k", 1_i32).await;
        cache.set("k", 2_i32).await;
        assert_eq!(cache.get::<i32>("k").await, Some(2));
    }

    #[tokio::test]
    async fn disabled_cache_never_hits() {
        let cache = RecordCache::disabled(DEFAULT_EXPIRY);
        cache.set("k", 1_i32).await;
        assert!(cache.get::<i32>("k").await.is_none());

        cache.set_enabled(true);
        assert!(cache.get::<i32>("k").await.is_none());
        cache.set("k", 1_i32).await;
        assert_eq!(cache.get::<i32>("k").await, Some(1));

        cache.set_enabled(false);
        assert!(cache.get::<i32>("k").await.is_none());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let cache = RecordCache::default();
        for i in 0..5 {
            cache.set(format!("key_{i}"), i).await;
        }
        assert_eq!(cache.stats().await.entry_count, 5);

        cache.clear();
        for i in 0..5 {
            assert!(cache.get::<i32>(&format!("key_{i}")).await.is_none());
        }
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = RecordCache::default();
        let clone = cache.clone();
        cache.set("shared", 9_u8).await;
        assert_eq!(clone.get::<u8>("shared").await, Some(9));
    }
}
