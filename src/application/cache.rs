use crate::domain::order::OrderView;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Read-through cache of fulfilled order views, keyed by order identifier.
///
/// Confirmed orders are often deleted by the administrator once the buyer
/// has been served; the cache keeps the last fulfilled view available to the
/// buyer for a bounded TTL instead of retaining it indefinitely.
pub struct FulfilledOrderCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

struct CacheEntry {
    view: OrderView,
    cached_at: Instant,
}

impl FulfilledOrderCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Caches the fulfilled view, evicting anything already expired.
    pub async fn put(&self, order_id: &str, view: OrderView) {
        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.cached_at.elapsed() < ttl);
        entries.insert(
            order_id.to_string(),
            CacheEntry {
                view,
                cached_at: Instant::now(),
            },
        );
    }

    /// Returns the cached view if present and not expired.
    pub async fn get(&self, order_id: &str) -> Option<OrderView> {
        let entries = self.entries.read().await;
        let entry = entries.get(order_id)?;
        if entry.cached_at.elapsed() < self.ttl {
            Some(entry.view.clone())
        } else {
            None
        }
    }
}
