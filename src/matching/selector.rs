use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::MatchError;
use super::types::{MatchResult, MatchType};
use crate::constants::{
    CANDIDATE_WINDOW, HIGH_CONFIDENCE_THRESHOLD, LEXICAL_WEIGHT, MIN_MATCH_THRESHOLD,
    SEMANTIC_WEIGHT,
};
use crate::knowledge::KnowledgeBase;
use crate::lexical::LexicalScorer;
use crate::semantic::SemanticScorer;

/// Tiered matcher: a strong lexical hit answers immediately, otherwise the top
/// lexical candidates are re-ranked with semantic similarity when available.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct MatchSelector {
    knowledge: Arc<KnowledgeBase>,
    lexical: LexicalScorer,
    semantic: Arc<dyn SemanticScorer>,
}

impl std::fmt::Debug for MatchSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSelector")
            .field("entries", &self.knowledge.len())
            .field("vocabulary", &self.lexical.vocabulary_size())
            .field("semantic", &self.semantic.mode())
            .finish()
    }
}

impl MatchSelector {
    /// Fits the lexical scorer over the knowledge base questions.
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        semantic: Arc<dyn SemanticScorer>,
    ) -> Result<Self, MatchError> {
        if knowledge.is_empty() {
            return Err(MatchError::EmptyKnowledgeBase);
        }
        let lexical = LexicalScorer::fit(&knowledge.questions())?;
        Ok(Self {
            knowledge,
            lexical,
            semantic,
        })
    }

    #[instrument(skip_all, fields(query_len = query.len()))]
    pub fn select(&self, query: &str) -> Option<MatchResult> {
        let lexical = self.lexical.score(query);
        let (best_lex_idx, best_lex) = arg_max(&lexical)?;

        if best_lex >= HIGH_CONFIDENCE_THRESHOLD {
            debug!(
                entry_id = best_lex_idx,
                score = best_lex,
                "High-confidence lexical match"
            );
            return Some(self.result(best_lex_idx, best_lex, MatchType::Lexical));
        }

        let candidates = top_candidates(&lexical, CANDIDATE_WINDOW);
        if self.semantic.is_available()
            && let Some(semantic) = self.semantic.score_candidates(query, &candidates)
        {
            let combined: Vec<f32> = candidates
                .iter()
                .zip(&semantic)
                .map(|(&id, &sem)| SEMANTIC_WEIGHT * sem + LEXICAL_WEIGHT * lexical[id])
                .collect();

            if let Some((pos, best_combined)) = arg_max(&combined) {
                debug!(
                    entry_id = candidates[pos],
                    combined = best_combined,
                    semantic = semantic[pos],
                    "Best combined candidate"
                );
                if best_combined >= MIN_MATCH_THRESHOLD {
                    return Some(self.result(
                        candidates[pos],
                        best_combined,
                        MatchType::Combined,
                    ));
                }
            }
        }

        if best_lex >= MIN_MATCH_THRESHOLD {
            debug!(
                entry_id = best_lex_idx,
                score = best_lex,
                "Lexical match above minimum"
            );
            return Some(self.result(best_lex_idx, best_lex, MatchType::Lexical));
        }

        debug!(best_lex, "No knowledge base match");
        None
    }

    fn result(&self, entry_id: usize, score: f32, match_type: MatchType) -> MatchResult {
        let entry = &self.knowledge[entry_id];
        MatchResult {
            entry_id,
            question: entry.question.clone(),
            response: entry.response.clone(),
            intent: entry.intent.clone(),
            confidence: score.clamp(0.0, 1.0),
            match_type,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn semantic(&self) -> &Arc<dyn SemanticScorer> {
        &self.semantic
    }

    pub fn lexical(&self) -> &LexicalScorer {
        &self.lexical
    }
}

/// Index and value of the maximum; the first occurrence wins ties. NaN is skipped.
fn arg_max(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .fold(None, |best, (i, s)| match best {
            Some((_, b)) if s <= b => best,
            _ => Some((i, s)),
        })
}

/// Indices of the `k` highest scores, descending; ties keep the lower index first.
fn top_candidates(scores: &[f32], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order.truncate(k);
    order
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_arg_max_prefers_first_on_ties() {
        assert_eq!(arg_max(&[0.2, 0.5, 0.5]), Some((1, 0.5)));
        assert_eq!(arg_max(&[0.0, 0.0]), Some((0, 0.0)));
        assert_eq!(arg_max(&[]), None);
    }

    #[test]
    fn test_arg_max_skips_nan() {
        assert_eq!(arg_max(&[f32::NAN, 0.2, 0.1]), Some((1, 0.2)));
        assert_eq!(arg_max(&[0.3, f32::NAN]), Some((0, 0.3)));
        assert_eq!(arg_max(&[f32::NAN, f32::NAN]), None);
    }

    #[test]
    fn test_top_candidates_is_stable() {
        assert_eq!(top_candidates(&[0.1, 0.3, 0.3, 0.2, 0.3], 3), vec![1, 2, 4]);
        assert_eq!(top_candidates(&[0.0, 0.0, 0.0, 0.0], 3), vec![0, 1, 2]);
        assert_eq!(top_candidates(&[0.4], 3), vec![0]);
    }
}
