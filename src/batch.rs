use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::CompletionTime;
use crate::providers::HltbClient;

/// One library entry to enrich
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameEntry {
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub name: String,
}

impl GameEntry {
    pub fn new(appid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            appid: appid.into(),
            name: name.into(),
        }
    }
}

/// Receives `(completed, total)` after each looked-up entry
pub trait ProgressReporter: Send + Sync {
    fn on_progress(&self, completed: usize, total: usize);
}

impl<F> ProgressReporter for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn on_progress(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Reporter that ignores progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_progress(&self, _completed: usize, _total: usize) {}
}

/// Sequential, rate-limited lookups over a game list
pub struct BatchFetcher {
    client: Arc<HltbClient>,
    delay: Duration,
}

impl BatchFetcher {
    /// Uses the client's configured batch delay
    pub fn new(client: Arc<HltbClient>) -> Self {
        let delay = client.config().batch_delay();
        Self { client, delay }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Look up every entry in order, one at a time, pausing `delay` between
    /// entries (not after the last). Entries missing an appid or name are
    /// skipped without a lookup, progress report or pause.
    pub async fn fetch_all(
        &self,
        games: &[GameEntry],
        progress: &dyn ProgressReporter,
    ) -> HashMap<String, CompletionTime> {
        let mut results = HashMap::new();
        let total = games.len();

        for (i, game) in games.iter().enumerate() {
            if game.appid.is_empty() || game.name.is_empty() {
                continue;
            }

            if let Some(result) = self.client.search(&game.name).await {
                tracing::debug!("[{}/{}] {}", i + 1, total, result.display());
                results.insert(game.appid.clone(), result);
            }

            progress.on_progress(i + 1, total);

            if i + 1 < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        tracing::info!("📦 Bulk fetch completed: {}/{} games found", results.len(), total);
        results
    }
}
