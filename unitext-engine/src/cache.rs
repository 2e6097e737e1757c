//! Bounded memoization of engine objects
//!
//! Collators and break engines are expensive to build and immutable once
//! built, so they are shared as `Arc`s out of per-kind LRU maps. A handle
//! checked out of the cache stays valid after its entry is evicted.

use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use unitext_core::{BoundaryKind, CollationOptions};

use crate::backend::{self, KindSegmenter};
use crate::error::{EngineError, Result};
use crate::locale::Locale;

/// Per-kind cache capacities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCapacity {
    /// Maximum number of cached collators
    pub collators: usize,
    /// Maximum number of cached break engines
    pub segmenters: usize,
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self {
            collators: 128,
            segmenters: 64,
        }
    }
}

impl CacheCapacity {
    /// Fail if either capacity is zero
    pub fn validate(&self) -> Result<()> {
        if self.collators == 0 {
            return Err(EngineError::configuration(
                "collator cache capacity must be greater than 0",
            ));
        }
        if self.segmenters == 0 {
            return Err(EngineError::configuration(
                "segmenter cache capacity must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Point-in-time counters for one cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that ran the builder
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
    /// Entries currently held
    pub len: usize,
    /// Maximum entries
    pub capacity: usize,
}

/// Thread-safe LRU map of shared values
///
/// The lock is never held while a value is being built. Two threads missing
/// on the same key may both build; the entry written last is kept.
pub struct BoundedCache<K: Hash + Eq, V> {
    map: Mutex<LruCache<K, Arc<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq + Debug,
{
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            map: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Return the cached value for `key`, building and inserting it on a miss
    pub fn get_or_try_build<F, E>(&self, key: K, build: F) -> std::result::Result<Arc<V>, E>
    where
        F: FnOnce() -> std::result::Result<V, E>,
    {
        let cached = self.map.lock().get(&key).cloned();
        if let Some(value) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(?key, "cache hit");
            return Ok(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(?key, "cache miss, building");
        let value = Arc::new(build()?);

        let mut map = self.map.lock();
        let replacing = map.contains(&key);
        if let Some((evicted, _)) = map.push(key, Arc::clone(&value)) {
            if !replacing {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(key = ?evicted, "cache eviction");
            }
        }
        Ok(value)
    }

    /// Whether `key` is currently cached; does not touch recency
    pub fn contains(&self, key: &K) -> bool {
        self.map.lock().contains(key)
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    /// Whether the cache holds nothing
    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.map.lock().cap().get()
    }

    /// Drop every entry; counters are kept
    pub fn clear(&self) {
        self.map.lock().clear();
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CacheStats {
        let map = self.map.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            len: map.len(),
            capacity: map.cap().get(),
        }
    }
}

/// Cache key for collators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollatorKey {
    /// Full locale tag, extensions included
    pub locale: String,
    /// Collator configuration
    pub options: CollationOptions,
}

/// Cache key for break engines
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmenterKey {
    /// Boundary granularity
    pub kind: BoundaryKind,
    /// Full locale tag, extensions included
    pub locale: String,
}

/// Memoized collators and break engines
///
/// Pass it around as `Arc<ResourceCache>`; there is no global instance.
pub struct ResourceCache {
    collators: BoundedCache<CollatorKey, icu_collator::Collator>,
    segmenters: BoundedCache<SegmenterKey, KindSegmenter>,
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceCache {
    /// Cache with default capacities
    pub fn new() -> Self {
        Self::with_capacity(CacheCapacity::default())
    }

    /// Cache with explicit capacities
    pub fn with_capacity(capacity: CacheCapacity) -> Self {
        Self {
            collators: BoundedCache::new(capacity.collators),
            segmenters: BoundedCache::new(capacity.segmenters),
        }
    }

    /// Convenience for `Arc::new(ResourceCache::new())`
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub(crate) fn collator_engine(
        &self,
        locale: &Locale,
        options: CollationOptions,
    ) -> Result<Arc<icu_collator::Collator>> {
        let key = CollatorKey {
            locale: locale.full_tag(),
            options,
        };
        self.collators
            .get_or_try_build(key, || backend::build_collator(locale, options))
    }

    /// Shared break engine for `kind` and `locale`
    pub fn segmenter(&self, kind: BoundaryKind, locale: &Locale) -> Result<Arc<KindSegmenter>> {
        let key = SegmenterKey {
            kind,
            locale: locale.full_tag(),
        };
        self.segmenters
            .get_or_try_build(key, || KindSegmenter::build(kind, locale))
    }

    /// Current capacities
    pub fn capacity(&self) -> CacheCapacity {
        CacheCapacity {
            collators: self.collators.capacity(),
            segmenters: self.segmenters.capacity(),
        }
    }

    /// Collator cache counters
    pub fn collator_stats(&self) -> CacheStats {
        self.collators.stats()
    }

    /// Break engine cache counters
    pub fn segmenter_stats(&self) -> CacheStats {
        self.segmenters.stats()
    }

    /// Empty every resource kind
    pub fn clear(&self) {
        tracing::debug!("clearing resource cache");
        self.collators.clear();
        self.segmenters.clear();
    }
}

impl std::fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceCache")
            .field("collators", &self.collators.stats())
            .field("segmenters", &self.segmenters.stats())
            .finish()
    }
}
