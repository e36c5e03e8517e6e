use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{LookupError, Result};

pub const DEFAULT_BASE_URL: &str = "https://howlongtobeat.com";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_search_paths() -> Vec<String> {
    vec![
        "/api/search".to_string(),
        "/api/s/".to_string(),
        "/api/search/".to_string(),
    ]
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_min_similarity() -> f64 {
    0.7
}

fn default_page_size() -> u32 {
    20
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_redirects() -> usize {
    10
}

fn default_batch_delay_secs() -> f64 {
    1.0
}

/// Static lookup configuration, read-only once a client is built.
///
/// Every field has a default, so a host can deserialize a partial JSON
/// object (or nothing at all) and get a working setup.
///
/// # Examples
///
/// ```
/// use hltb_lookup::LookupConfig;
///
/// let config = LookupConfig::from_json(r#"{"min_similarity": 0.8}"#).unwrap();
/// assert_eq!(config.min_similarity, 0.8);
/// assert_eq!(config.page_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Service origin, also used for `Referer`/`Origin` and detail URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search endpoint path variants, tried in order
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Minimum similarity (inclusive) for a candidate to be accepted
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,

    /// Results requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout enforced by the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Pause between consecutive batch lookups
    #[serde(default = "default_batch_delay_secs")]
    pub batch_delay_secs: f64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_paths: default_search_paths(),
            user_agent: default_user_agent(),
            min_similarity: default_min_similarity(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            batch_delay_secs: default_batch_delay_secs(),
        }
    }
}

impl LookupConfig {
    /// Config pointing at another origin (mirrors, test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(LookupError::Config("base_url is empty".to_string()));
        }
        if self.search_paths.is_empty() {
            return Err(LookupError::Config("search_paths is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(LookupError::Config(format!(
                "min_similarity must be within [0, 1], got {}",
                self.min_similarity
            )));
        }
        if self.page_size == 0 {
            return Err(LookupError::Config("page_size must be positive".to_string()));
        }
        if !self.batch_delay_secs.is_finite() || self.batch_delay_secs < 0.0 {
            return Err(LookupError::Config(format!(
                "batch_delay_secs must be a non-negative number, got {}",
                self.batch_delay_secs
            )));
        }
        Ok(())
    }

    /// Origin without trailing slash
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full search URLs in attempt order
    pub fn endpoints(&self) -> Vec<String> {
        self.search_paths
            .iter()
            .map(|path| format!("{}/{}", self.origin(), path.trim_start_matches('/')))
            .collect()
    }

    /// Detail page for a game id
    pub fn game_url(&self, game_id: &str) -> String {
        format!("{}/game/{}", self.origin(), game_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_secs_f64(self.batch_delay_secs)
    }
}
