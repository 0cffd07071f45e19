//! # Redis-backed Graph Store
//!
//! A `GraphStore` over a Redis server using a tokio `MultiplexedConnection`.
//!
//! The connection is opened once at startup and cloned per call; clones
//! share one socket. A refused first connection fails immediately. There is
//! no reconnect, no retry policy and no timeout on individual commands: a
//! dropped connection fails every later request with `StoreUnavailable`.

use super::GraphStore;
use advgraph_core::AdvGraphError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::MultiplexedConnection};

/// Redis implementation of `GraphStore`.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Connect to the Redis server named by `uri`.
    ///
    /// An invalid URI is a configuration error; a refused or failed
    /// connection is `StoreUnavailable`.
    pub async fn connect(uri: &str) -> Result<Self, AdvGraphError> {
        let client = Client::open(uri).map_err(|e| {
            AdvGraphError::Config(format!("Invalid Redis URI '{}': {}", super::redact(uri), e))
        })?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AdvGraphError::StoreUnavailable(format!("Redis connection error: {}", e)))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl GraphStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AdvGraphError> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| classify_redis_error("get", &e))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AdvGraphError> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| classify_redis_error("set", &e))?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AdvGraphError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| classify_redis_error("ping", &e))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

/// Map a Redis failure onto the store error classes.
///
/// Anything that means "could not talk to Redis" is `StoreUnavailable`;
/// Redis answering with an error is `StoreIo`.
fn classify_redis_error(op: &str, err: &RedisError) -> AdvGraphError {
    if err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
        || err.is_io_error()
    {
        AdvGraphError::StoreUnavailable(format!("Redis {} failed: {}", op, err))
    } else {
        AdvGraphError::StoreIo(format!("Redis {} failed: {}", op, err))
    }
}
