pub mod hltb;
pub mod http;

use async_trait::async_trait;
use crate::error::Result;

pub use hltb::{is_searchable_title, HltbClient};
pub use http::ReqwestTransport;

/// Transport used to POST a search payload (real HTTP, or a stub in tests)
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// POST `body` to `url` and return the response body on a 2xx status
    async fn post_json(&self, url: &str, body: &[u8]) -> Result<Vec<u8>>;

    /// Get transport name for logging
    fn name(&self) -> &str;
}
