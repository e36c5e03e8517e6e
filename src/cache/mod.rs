use async_trait::async_trait;
use std::sync::Arc;

use crate::core::CompletionTime;
use crate::error::Result;
use crate::providers::HltbClient;

/// Host-provided cache of previous lookups, keyed by Steam app id.
/// Storage lives with the host; this crate only reads through it.
#[async_trait]
pub trait CacheLookup: Send + Sync {
    /// Get cached completion time for an app id
    async fn lookup(&self, appid: &str) -> Result<Option<CompletionTime>>;
}

/// Cache that never hits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

#[async_trait]
impl CacheLookup for NoCache {
    async fn lookup(&self, _appid: &str) -> Result<Option<CompletionTime>> {
        Ok(None)
    }
}

/// Cache-first completion time lookup
pub struct CachedLookup {
    client: Arc<HltbClient>,
    cache: Arc<dyn CacheLookup>,
}

impl CachedLookup {
    pub fn new(client: Arc<HltbClient>, cache: Arc<dyn CacheLookup>) -> Self {
        Self { client, cache }
    }

    /// Without a cache every call goes to HLTB
    pub fn uncached(client: Arc<HltbClient>) -> Self {
        Self::new(client, Arc::new(NoCache))
    }

    /// Cached value if the host has one, fresh HLTB search otherwise.
    /// A failing cache counts as a miss.
    pub async fn get_completion_time(&self, appid: &str, game_name: &str) -> Option<CompletionTime> {
        match self.cache.lookup(appid).await {
            Ok(Some(cached)) => {
                tracing::debug!("💾 Using cached HLTB data for {}", appid);
                return Some(cached);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("⚠️ HLTB cache lookup failed for {}: {}", appid, e);
            }
        }

        self.client.search(game_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HltbGame;
    use crate::error::LookupError;
    use crate::providers::hltb::tests::{client_with, StubTransport};
    use serde_json::json;
    use std::collections::HashMap;

    struct MapCache(HashMap<String, CompletionTime>);

    #[async_trait]
    impl CacheLookup for MapCache {
        async fn lookup(&self, appid: &str) -> Result<Option<CompletionTime>> {
            Ok(self.0.get(appid).cloned())
        }
    }

    struct BrokenCache;

    #[async_trait]
    impl CacheLookup for BrokenCache {
        async fn lookup(&self, _appid: &str) -> Result<Option<CompletionTime>> {
            Err(LookupError::Cache("database is locked".to_string()))
        }
    }

    fn portal_stub() -> Arc<StubTransport> {
        Arc::new(StubTransport::always(json!({
            "data": [{"game_name": "Portal 2", "game_id": 7231, "comp_main": 30600}]
        })))
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let stub = portal_stub();
        let cached = CompletionTime::from_match("Portal 2", &HltbGame::new("7231", "Portal 2"), 1.0, None);
        let cache = MapCache(HashMap::from([("620".to_string(), cached.clone())]));

        let lookup = CachedLookup::new(Arc::new(client_with(stub.clone())), Arc::new(cache));
        let result = lookup.get_completion_time("620", "Portal 2").await;

        assert_eq!(result, Some(cached));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cache_miss_searches() {
        let stub = portal_stub();
        let lookup = CachedLookup::new(Arc::new(client_with(stub.clone())), Arc::new(MapCache(HashMap::new())));

        let result = lookup.get_completion_time("620", "Portal 2").await.unwrap();
        assert_eq!(result.main_story, Some(8.5));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cache_error_falls_back() {
        let stub = portal_stub();
        let lookup = CachedLookup::new(Arc::new(client_with(stub.clone())), Arc::new(BrokenCache));

        assert!(lookup.get_completion_time("620", "Portal 2").await.is_some());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_uncached() {
        let stub = portal_stub();
        let lookup = CachedLookup::uncached(Arc::new(client_with(stub.clone())));

        assert!(lookup.get_completion_time("620", "Portal 2").await.is_some());
        assert!(NoCache.lookup("620").await.unwrap().is_none());
    }
}
