//! # HLTB Lookup
//!
//! HowLongToBeat completion times for a Steam library:
//! - Title filter for tools/runtimes (Proton, redistributables, ...)
//! - Search with endpoint-variant fallback and 307/308-safe redirects
//! - Ratcliff–Obershelp title matching with a 0.7 acceptance threshold
//! - Rate-limited sequential batch fetch with progress reporting
//! - Cache-first lookups through a host-provided cache
//!
//! Lookups are best-effort: failures are logged with `tracing` and come
//! back as `None`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hltb_lookup::{HltbClient, LookupConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HltbClient::new(LookupConfig::default())?;
//!
//!     if let Some(time) = client.search("The Witcher 3").await {
//!         println!("{} - main story {:?}h", time.matched_name, time.main_story);
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cache;
pub mod config;
pub mod core;
pub mod error;
pub mod providers;
pub mod ranking;

// Re-export primary types
pub use batch::{BatchFetcher, GameEntry, NoProgress, ProgressReporter};
pub use cache::{CacheLookup, CachedLookup, NoCache};
pub use config::LookupConfig;
pub use crate::core::{CompletionTime, HltbGame};
pub use error::{LookupError, Result};
pub use providers::{HltbClient, ReqwestTransport, SearchTransport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
