use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Cache key: (operation kind, normalized arguments).
type CacheKey = (String, String);

struct CacheEntry {
    payload: Value,
    /// `None` means the entry lives for the rest of the process.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires_at) => now < expires_at,
            None => true,
        }
    }
}

/// Memoization layer shared by all gateway calls, with an
/// operation-specific expiry per entry.
///
/// Values are stored as JSON snapshots, so any serde-serializable result
/// (including failure outcomes) caches transparently. A read past expiry
/// is treated as absent and triggers a fresh compute; a write always
/// overwrites the existing entry for the same key.
///
/// There is deliberately no single-flight protection: the lock is
/// released while `compute` runs, so two concurrent misses for the same
/// key both invoke it and the second write wins.
#[derive(Default)]
pub struct TtlCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize lookup arguments for keying (trim, lowercase).
    fn normalize(args: &str) -> String {
        args.trim().to_lowercase()
    }

    /// Return the cached value for `(op, args)` when fresh, otherwise run
    /// `compute`, store its result with `now + ttl` (`None` ttl = never
    /// expires), and return it.
    pub async fn get_or_compute<T, F, Fut>(
        &self,
        op: &str,
        args: &str,
        ttl: Option<Duration>,
        compute: F,
    ) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let key = (op.to_string(), Self::normalize(args));

        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(&key) {
                if entry.is_fresh(Instant::now()) {
                    if let Ok(value) = serde_json::from_value::<T>(entry.payload.clone()) {
                        debug!("cache hit: {} '{}'", key.0, key.1);
                        return value;
                    }
                    // Stored shape no longer matches the requested type;
                    // treat as a miss and overwrite below.
                }
            }
        }

        debug!("cache miss: {} '{}'", key.0, key.1);
        let value = compute().await;

        match serde_json::to_value(&value) {
            Ok(payload) => {
                let expires_at = ttl.map(|ttl| Instant::now() + ttl);
                let mut entries = self.entries.lock().await;
                entries.insert(key, CacheEntry { payload, expires_at });
            }
            Err(e) => {
                warn!("cache: failed to serialize result for {} '{}': {}", key.0, key.1, e);
            }
        }

        value
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}
