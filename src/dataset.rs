// src/dataset.rs
//! Cache-aside access to the country and continent snapshots.

use crate::cache::CacheStore;
use crate::error::StatsError;
use crate::models::{Continents, Countries};
use crate::upstream::Upstream;
use log::{debug, info, warn};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;

/// Cache key of the country snapshot.
pub const COUNTRIES_KEY: &str = "total";
/// Cache key of the continent snapshot.
pub const CONTINENTS_KEY: &str = "continent";

/// A dataset that is cached and replaced as a single unit.
pub trait Snapshot: Serialize + DeserializeOwned {
    fn is_empty(&self) -> bool;
}

impl Snapshot for Countries {
    fn is_empty(&self) -> bool {
        Countries::is_empty(self)
    }
}

impl Snapshot for Continents {
    fn is_empty(&self) -> bool {
        Continents::is_empty(self)
    }
}

/// Reads snapshots through the cache, falling back to the upstream API.
///
/// A non-empty cached snapshot is returned as-is: there is no freshness check
/// here, expiry is the cache store's business. Concurrent misses may both
/// fetch and both write; the writes carry equivalent data.
#[derive(Clone)]
pub struct DatasetAccessor {
    cache: Arc<dyn CacheStore>,
    upstream: Arc<dyn Upstream>,
}

impl DatasetAccessor {
    pub fn new(cache: Arc<dyn CacheStore>, upstream: Arc<dyn Upstream>) -> Self {
        Self { cache, upstream }
    }

    pub async fn get_all_countries(&self) -> Result<Countries, StatsError> {
        self.cache_aside(COUNTRIES_KEY, async {
            self.upstream.fetch_countries().await.map(Countries::from)
        })
        .await
    }

    pub async fn get_continents(&self) -> Result<Continents, StatsError> {
        self.cache_aside(CONTINENTS_KEY, async {
            self.upstream.fetch_continents().await.map(Continents::from)
        })
        .await
    }

    async fn cache_aside<T, F>(&self, key: &str, fetch: F) -> Result<T, StatsError>
    where
        T: Snapshot,
        F: Future<Output = Result<T, StatsError>>,
    {
        if let Some(cached) = self.read_cached::<T>(key).await? {
            debug!("Serving snapshot {} from cache", key);
            return Ok(cached);
        }

        let fresh = fetch.await.map_err(|e| match e {
            StatsError::UpstreamUnavailable(_) => e,
            other => StatsError::UpstreamUnavailable(other.to_string()),
        })?;
        info!("Fetched snapshot {} from upstream", key);

        match serde_json::to_string(&fresh) {
            Ok(payload) => {
                if let Err(e) = self.cache.set(key, &payload).await {
                    warn!("Failed to write snapshot {} to cache: {}", key, e);
                }
            }
            Err(e) => warn!("Failed to serialize snapshot {}: {}", key, e),
        }
        Ok(fresh)
    }

    /// `Ok(None)` for absent, empty or undecodable payloads.
    async fn read_cached<T: Snapshot>(&self, key: &str) -> Result<Option<T>, StatsError> {
        let Some(payload) = self.cache.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<T>(&payload) {
            Ok(snapshot) if !snapshot.is_empty() => Ok(Some(snapshot)),
            Ok(_) => Ok(None),
            Err(e) => {
                warn!("Snapshot {}: {}; treating as a miss", key, StatsError::from(e));
                Ok(None)
            }
        }
    }
}
