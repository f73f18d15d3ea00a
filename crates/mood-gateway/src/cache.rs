//! Size-bounded response memoization.

use std::collections::{HashMap, VecDeque};

use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

/// A bounded key-value cache with FIFO eviction.
///
/// Keys are SHA-256 fingerprints of the call kind plus input text, so
/// identical submissions within one process reuse the upstream response
/// without keeping raw user text around as map keys. A capacity of 0
/// disables caching entirely.
#[derive(Debug)]
pub struct BoundedCache {
    capacity: usize,
    inner: RwLock<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
}

impl BoundedCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(CacheInner::default()),
        }
    }

    /// Fingerprint a (kind, input) pair into a cache key.
    pub fn key(kind: &str, input: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(kind.as_bytes());
        hasher.update(b"\n");
        hasher.update(input.as_bytes());
        let digest = hasher.finalize();
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            hex.push_str(&format!("{:02x}", byte));
        }
        hex
    }

    /// Look up a cached value.
    pub async fn get(&self, key: &str) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }
        let inner = self.inner.read().await;
        inner.entries.get(key).cloned()
    }

    /// Insert a value, evicting the oldest entry when full.
    pub async fn insert(&self, key: String, value: String) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.write().await;

        if inner.entries.insert(key.clone(), value).is_none() {
            inner.order.push_back(key);
        }

        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// True when the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
