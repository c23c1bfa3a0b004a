use std::sync::atomic::{AtomicUsize, Ordering};

use super::scorer::{SemanticMode, SemanticScorer};

/// Scorer returning fixed per-entry scores and counting how often it is consulted.
#[derive(Debug, Default)]
pub struct MockSemanticScorer {
    scores: Vec<f32>,
    calls: AtomicUsize,
    unresponsive: bool,
}

impl MockSemanticScorer {
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            calls: AtomicUsize::new(0),
            unresponsive: false,
        }
    }

    /// Reports itself available but returns no scores, like a failed query embedding.
    pub fn unresponsive() -> Self {
        Self {
            unresponsive: true,
            ..Self::default()
        }
    }

    /// Number of `score` / `score_candidates` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SemanticScorer for MockSemanticScorer {
    fn is_available(&self) -> bool {
        true
    }

    fn score(&self, _query: &str) -> Option<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unresponsive {
            return None;
        }
        Some(self.scores.clone())
    }

    fn score_candidates(&self, _query: &str, ids: &[usize]) -> Option<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unresponsive {
            return None;
        }
        ids.iter().map(|&id| self.scores.get(id).copied()).collect()
    }

    fn mode(&self) -> SemanticMode {
        SemanticMode::Mock
    }
}
