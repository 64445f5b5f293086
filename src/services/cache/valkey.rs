use async_trait::async_trait;

use crate::services::cache::{CacheClient, CacheError, CacheResult};

/// Valkey/Redis-backend cache client.
#[derive(Clone)]
pub struct ValkeyClient {
    manager: redis::aio::ConnectionManager,
}

impl ValkeyClient {
    // Create a Valkey client from a URL like `redis://localhost:6379`
    pub async fn new(url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::BackendConnection(e.to_string()))?;

        let manager = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::BackendConnection(e.to_string()))?;

        Ok(Self { manager })
    }
}

#[async_trait]
impl CacheClient for ValkeyClient {
    fn backend_name(&self) -> &'static str {
        "valkey"
    }

    async fn sorted_set_range_with_scores(&self, key: &str) -> CacheResult<Vec<(String, f64)>> {
        let mut conn = self.manager.clone();

        // ZRANGE <key> 0 -1 WITHSCORES
        // RESP2 returns a flat [member, score, ...] list; redis-rs folds it into pairs.
        let pairs: Vec<(String, f64)> = redis::cmd("ZRANGE")
            .arg(key)
            .arg(0)
            .arg(-1)
            .arg("WITHSCORES")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::BackendCommand(e.to_string()))?;

        Ok(pairs)
    }
}
