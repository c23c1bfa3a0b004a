use tracing::instrument;

use super::error::LexicalError;
use super::vectorizer::{SparseVector, TfidfVectorizer};
use crate::constants::{MAX_LEXICAL_FEATURES, MAX_NGRAM};

/// Scores a query against every knowledge base question by TF-IDF cosine similarity.
///
/// Fitted once at startup and read-only afterwards, so it can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    vectorizer: TfidfVectorizer,
    rows: Vec<SparseVector>,
}

impl LexicalScorer {
    /// Fits on the questions in knowledge base order.
    pub fn fit(questions: &[&str]) -> Result<Self, LexicalError> {
        Self::fit_with(questions, MAX_LEXICAL_FEATURES, MAX_NGRAM)
    }

    pub fn fit_with(
        questions: &[&str],
        max_features: usize,
        max_n: usize,
    ) -> Result<Self, LexicalError> {
        let (vectorizer, rows) = TfidfVectorizer::fit_transform(questions, max_features, max_n)?;
        Ok(Self { vectorizer, rows })
    }

    /// One score in `[0, 1]` per question. A query sharing no vocabulary scores all zeros.
    #[instrument(level = "trace", skip_all, fields(query_len = query.len()))]
    pub fn score(&self, query: &str) -> Vec<f32> {
        let query = self.vectorizer.transform(query);
        if query.is_zero() {
            return vec![0.0; self.rows.len()];
        }

        self.rows
            .iter()
            .map(|row| row.dot(&query).clamp(0.0, 1.0))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
