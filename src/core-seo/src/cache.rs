//! Tag-aware get-or-compute caching.
//!
//! The cache layer is modeled as a capability trait so the provider can be
//! tested against the in-memory implementation and production wiring can
//! supply a distributed store. Entries carry a TTL and a set of invalidation
//! tags; a change notification matching any tag evicts the entry. There is no
//! manual deletion.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::errors::Result;

/// Parameters for one cached operation.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Namespace for the cached operation. Distinct operations use distinct
    /// namespaces so they invalidate independently.
    pub key: String,
    pub ttl: Duration,
    /// Invalidation tags attached to the entry.
    pub tags: BTreeSet<String>,
}

/// Boxed compute future producing the payload to cache on a miss.
pub type ComputeFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Get-or-compute cache keyed by operation name with tag-based invalidation.
#[async_trait]
pub trait TagCache: Send + Sync {
    /// Returns the cached payload for `settings.key`, computing and storing it
    /// on a miss. The stored entry carries the settings' TTL and tag set.
    /// A failed compute stores nothing.
    async fn load_or_compute(&self, settings: CacheSettings, compute: ComputeFuture<'_>) -> Result<Value>;

    /// Evicts every entry whose tag set contains `tag`.
    async fn notify_change(&self, tag: &str);
}

struct Entry {
    value: Value,
    expires_at: Instant,
    tags: BTreeSet<String>,
}

/// Process-local [`TagCache`] backed by a `tokio::sync::RwLock` map.
///
/// Concurrent misses for the same key may recompute redundantly; the compute
/// is a pure read of store state, so racing writers converge on equal values.
/// Writes happen only after a compute succeeds, so a cancelled or failed
/// compute leaves no half-written entry.
#[derive(Default)]
pub struct MemoryTagCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryTagCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagCache for MemoryTagCache {
    async fn load_or_compute(&self, settings: CacheSettings, compute: ComputeFuture<'_>) -> Result<Value> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&settings.key) {
                if entry.expires_at > Instant::now() {
                    tracing::debug!(key = %settings.key, "cache hit");
                    return Ok(entry.value.clone());
                }
            }
        }

        tracing::debug!(key = %settings.key, "cache miss, computing");
        let value = compute.await?;

        let mut entries = self.entries.write().await;
        entries.insert(
            settings.key,
            Entry {
                value: value.clone(),
                expires_at: Instant::now() + settings.ttl,
                tags: settings.tags,
            },
        );
        Ok(value)
    }

    async fn notify_change(&self, tag: &str) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.contains(tag));
        let evicted = before - entries.len();
        if evicted > 0 {
            tracing::debug!(tag = %tag, evicted = evicted, "cache entries evicted");
        }
    }
}
