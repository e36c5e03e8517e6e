use std::sync::Arc;

use crate::config::LookupConfig;
use crate::core::{CompletionTime, HltbSearchResponse, SearchRequest};
use crate::error::{LookupError, Result};
use crate::providers::{ReqwestTransport, SearchTransport};
use crate::ranking::{Ranker, SequenceMatcherRanker};

/// Library entries that are tools or runtimes, not games
const NON_GAME_PATTERNS: &[&str] = &[
    "proton",
    "steam linux runtime",
    "steamworks",
    "redistributable",
    "directx",
    "vcredist",
];

/// Whether a title is worth sending to HLTB at all
pub fn is_searchable_title(title: &str) -> bool {
    if title.trim().is_empty() || title.starts_with("Unknown") {
        return false;
    }

    let lower = title.to_lowercase();
    !NON_GAME_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

/// HowLongToBeat search client
pub struct HltbClient {
    config: Arc<LookupConfig>,
    transport: Arc<dyn SearchTransport>,
    ranker: Arc<dyn Ranker>,
}

impl HltbClient {
    /// Create client with the reqwest transport
    pub fn new(config: LookupConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create client over a custom transport
    pub fn with_transport(config: LookupConfig, transport: Arc<dyn SearchTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            ranker: Arc::new(SequenceMatcherRanker::new()),
        }
    }

    /// Replace the similarity ranker
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Look up completion times for a title.
    ///
    /// Never fails: skipped titles, missing matches and every transport or
    /// parse error all come back as `None`. Errors are only logged.
    pub async fn search(&self, title: &str) -> Option<CompletionTime> {
        if !is_searchable_title(title) {
            tracing::debug!("⏭️ Skipping non-game: {:?}", title);
            return None;
        }

        tracing::debug!("🔍 Searching HLTB for: {}", title);

        match self.try_search(title).await {
            Ok(Some(result)) => {
                tracing::info!(
                    "✅ Found HLTB match: {} (similarity: {:.2})",
                    result.matched_name,
                    result.similarity
                );
                Some(result)
            }
            Ok(None) => {
                tracing::debug!("No HLTB results found for: {}", title);
                None
            }
            Err(e) => {
                tracing::error!("❌ HLTB search failed for {}: {}", title, e);
                None
            }
        }
    }

    /// Search and match, surfacing errors
    async fn try_search(&self, title: &str) -> Result<Option<CompletionTime>> {
        let body = SearchRequest::for_title(title, self.config.page_size).to_bytes()?;
        let response = self.fetch_first_available(&body).await?;

        if response.data.is_empty() {
            return Ok(None);
        }

        let best = match self.ranker.best_match(title, &response.data) {
            Some(best) => best,
            None => return Ok(None),
        };

        tracing::debug!(
            "Best HLTB candidate for {} is {} ({:.2} via {})",
            title,
            best.game.game_name,
            best.score,
            self.ranker.name()
        );

        if best.score < self.config.min_similarity {
            tracing::debug!("Below threshold {:.2}, rejecting", self.config.min_similarity);
            return Ok(None);
        }

        let hltb_url = best.game.game_id.as_deref().map(|id| self.config.game_url(id));

        Ok(Some(CompletionTime::from_match(title, best.game, best.score, hltb_url)))
    }

    /// Try each endpoint variant in order, keeping the first parsed response
    async fn fetch_first_available(&self, body: &[u8]) -> Result<HltbSearchResponse> {
        let mut last_error = None;

        for endpoint in self.config.endpoints() {
            tracing::debug!("Trying HLTB endpoint: {}", endpoint);

            match self.fetch(&endpoint, body).await {
                Ok(response) => {
                    tracing::debug!("Success with endpoint: {} ({} results)", endpoint, response.data.len());
                    return Ok(response);
                }
                Err(e) => {
                    tracing::debug!("Endpoint {} failed via {}: {}", endpoint, self.transport.name(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| LookupError::Config("no search endpoints configured".to_string())))
    }

    async fn fetch(&self, endpoint: &str, body: &[u8]) -> Result<HltbSearchResponse> {
        let bytes = self.transport.post_json(endpoint, body).await?;
        Ok(HltbSearchResponse::from_json(&bytes)?)
    }
}
