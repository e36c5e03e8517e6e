pub mod sequence_matcher;

use crate::core::HltbGame;

pub use sequence_matcher::{SequenceMatcher, SequenceMatcherRanker};

/// Trait for title similarity implementations
pub trait Ranker: Send + Sync {
    /// Similarity between a query and a candidate title (0.0 - 1.0)
    fn similarity(&self, query: &str, candidate: &str) -> f64;

    /// Get ranker name for logging
    fn name(&self) -> &str;

    /// Highest scoring candidate. The first one seen wins ties, and a
    /// candidate has to score above zero to be picked at all.
    fn best_match<'a>(&self, query: &str, candidates: &'a [HltbGame]) -> Option<RankedCandidate<'a>> {
        let mut best: Option<RankedCandidate<'a>> = None;
        let mut best_score = 0.0;

        for game in candidates {
            let score = self.similarity(query, &game.game_name);
            if score > best_score {
                best_score = score;
                best = Some(RankedCandidate::new(game, score));
            }
        }

        best
    }
}

/// Candidate with similarity score
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a> {
    pub game: &'a HltbGame,
    pub score: f64,
}

impl<'a> RankedCandidate<'a> {
    pub fn new(game: &'a HltbGame, score: f64) -> Self {
        Self { game, score }
    }
}
