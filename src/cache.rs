// src/cache.rs
//! Key-value stores holding serialized dataset snapshots.

use crate::config::CacheExpiry;
use crate::error::StatsError;
use crate::utils::redact_url;
use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, error, info};
use redis::{aio::ConnectionManager, AsyncCommands};
use std::fmt;
use std::time::Instant;

/// Opaque snapshot storage. Payloads are serialized by the caller.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` when the key is absent (or expired).
    async fn get(&self, key: &str) -> Result<Option<String>, StatsError>;

    async fn set(&self, key: &str, payload: &str) -> Result<(), StatsError>;
}

/// A shared Redis cache client.
/// Uses a `ConnectionManager` for automatic reconnection; every call works on
/// its own clone of the manager, which is dropped when the call returns.
#[derive(Clone)]
pub struct RedisCache {
    conn_manager: ConnectionManager,
    expiry: CacheExpiry,
    redis_url: String,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache")
            .field("redis_url", &redact_url(&self.redis_url))
            .field("expiry", &self.expiry)
            .field("conn_manager", &"<ConnectionManager instance>")
            .finish()
    }
}

impl RedisCache {
    pub async fn new(redis_url: &str, expiry: CacheExpiry) -> Result<Self, StatsError> {
        info!("Initializing Redis connection manager for URL: {}", redact_url(redis_url));
        let client = redis::Client::open(redis_url).map_err(|e| {
            StatsError::ConfigError(format!("Invalid Redis URL {}: {}", redact_url(redis_url), e))
        })?;
        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            error!("Failed to create Redis ConnectionManager: {}", e);
            StatsError::CacheUnavailable(format!("Failed to connect to Redis: {}", e))
        })?;
        info!("Redis ConnectionManager initialized successfully. Expiry: {:?}", expiry);
        Ok(Self {
            conn_manager,
            expiry,
            redis_url: redis_url.to_string(),
        })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, StatsError> {
        debug!("Attempting to GET cache for key: {}", key);
        let mut conn = self.conn_manager.clone();
        let value = conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!("Redis GET error for key {}: {}", key, e);
            e
        })?;
        match &value {
            Some(_) => debug!("Cache HIT for key: {}", key),
            None => debug!("Cache MISS for key: {}", key),
        }
        Ok(value)
    }

    async fn set(&self, key: &str, payload: &str) -> Result<(), StatsError> {
        let mut conn = self.conn_manager.clone();
        match self.expiry {
            CacheExpiry::Persistent => conn.set::<_, _, ()>(key, payload).await?,
            CacheExpiry::Expiring(ttl) => {
                conn.set_ex::<_, _, ()>(key, payload, ttl.as_secs().max(1)).await?
            }
        }
        debug!("Cache SET success for key: {} ({:?})", key, self.expiry);
        Ok(())
    }
}

/// In-process store for local runs without Redis, and for tests.
#[derive(Debug)]
pub struct MemoryCache {
    entries: DashMap<String, (String, Option<Instant>)>,
    expiry: CacheExpiry,
}

impl MemoryCache {
    pub fn new(expiry: CacheExpiry) -> Self {
        Self {
            entries: DashMap::new(),
            expiry,
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(CacheExpiry::Persistent)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, StatsError> {
        let expired = match self.entries.get(key) {
            None => return Ok(None),
            Some(entry) => match entry.1 {
                Some(deadline) if Instant::now() >= deadline => true,
                _ => return Ok(Some(entry.0.clone())),
            },
        };
        if expired {
            debug!("Cache entry for key {} expired", key);
            self.entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, payload: &str) -> Result<(), StatsError> {
        let deadline = match self.expiry {
            CacheExpiry::Persistent => None,
            CacheExpiry::Expiring(ttl) => Some(Instant::now() + ttl),
        };
        self.entries.insert(key.to_string(), (payload.to_string(), deadline));
        Ok(())
    }
}
