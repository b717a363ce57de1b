//! TTL-cached dynamic links
//!
//! The storefront's contact/social links live in the CMS and change
//! rarely, so they are memoised for 5 minutes instead of fetched per
//! render. The cache is an owned object with explicit `(value, fetched_at)`
//! state and an injected fetcher, not a module-level singleton, so tests
//! and multiple storefront instances can each carry their own.

use std::time::{Duration, Instant};

use parking_lot::RwLock;
use shared::StoreLinks;

/// Refresh interval for cached values (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

/// Single-value lazy cache with a fixed TTL
pub struct TtlCache<T> {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry<T>>>,
}

/// Dynamic-links cache for the storefront
pub type LinksCache = TtlCache<StoreLinks>;

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Return the cached value, refreshing through `fetch` when stale.
    ///
    /// A failed refresh serves the previous value when one exists; the
    /// error only surfaces when the cache has never been filled.
    pub fn get_or_refresh(&self, fetch: impl FnOnce() -> anyhow::Result<T>) -> anyhow::Result<T> {
        {
            let entry = self.entry.read();
            if let Some(cached) = entry.as_ref()
                && cached.fetched_at.elapsed() < self.ttl
            {
                return Ok(cached.value.clone());
            }
        }

        match fetch() {
            Ok(value) => {
                let mut entry = self.entry.write();
                *entry = Some(CacheEntry {
                    value: value.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(value)
            }
            Err(err) => {
                let entry = self.entry.read();
                match entry.as_ref() {
                    Some(cached) => {
                        tracing::warn!(error = %err, "refresh failed, serving stale value");
                        Ok(cached.value.clone())
                    }
                    None => Err(err),
                }
            }
        }
    }

    /// Drop the cached value, forcing a refresh on next access
    pub fn invalidate(&self) {
        *self.entry.write() = None;
    }
}
