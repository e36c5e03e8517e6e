use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::HltbGame;

/// Seconds to hours, one decimal. Missing or non-positive values stay absent.
pub fn to_hours(seconds: Option<f64>) -> Option<f64> {
    match seconds {
        Some(s) if s > 0.0 => Some((s / 3600.0 * 10.0).round_ties_even() / 10.0),
        _ => None,
    }
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}

/// Completion times for a matched game, in hours
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionTime {
    /// Title that was searched for
    pub game_name: String,

    /// Title of the accepted HLTB entry
    pub matched_name: String,

    /// Name similarity (0.0 - 1.0, two decimals)
    pub similarity: f64,

    #[serde(default)]
    pub main_story: Option<f64>,

    #[serde(default)]
    pub main_extra: Option<f64>,

    #[serde(default)]
    pub completionist: Option<f64>,

    #[serde(default)]
    pub all_styles: Option<f64>,

    /// HLTB detail page
    #[serde(default)]
    pub hltb_url: Option<String>,

    /// Timestamp when this result was fetched
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl CompletionTime {
    /// Build from an accepted candidate. `hltb_url` is derived by the caller
    /// because it depends on the configured origin.
    pub fn from_match(
        query: impl Into<String>,
        game: &HltbGame,
        similarity: f64,
        hltb_url: Option<String>,
    ) -> Self {
        Self {
            game_name: query.into(),
            matched_name: game.game_name.clone(),
            similarity: round_score(similarity),
            main_story: to_hours(game.comp_main),
            main_extra: to_hours(game.comp_plus),
            completionist: to_hours(game.comp_100),
            all_styles: to_hours(game.comp_all),
            hltb_url,
            fetched_at: Utc::now(),
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        let fmt = |h: Option<f64>| h.map(|h| format!("{:.1}h", h)).unwrap_or_else(|| "-".to_string());
        format!(
            "{} → {} ({:.2}) main {} / extra {} / 100% {}",
            self.game_name,
            self.matched_name,
            self.similarity,
            fmt(self.main_story),
            fmt(self.main_extra),
            fmt(self.completionist),
        )
    }
}
