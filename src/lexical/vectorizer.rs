use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::error::LexicalError;
use super::tokenizer::analyze;

/// L2-normalized sparse term vector, sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    fn from_weights(mut entries: Vec<(u32, f32)>) -> Self {
        entries.sort_unstable_by_key(|(idx, _)| *idx);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        Self { entries }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product of two normalized vectors (their cosine similarity).
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;

        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }
}

/// TF-IDF vectorizer with a vocabulary frozen at fit time.
///
/// IDF is smoothed as `ln((1 + n) / (1 + df)) + 1`, so terms present in every
/// document still carry weight.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
    max_n: usize,
}

impl TfidfVectorizer {
    /// Fits on `documents` and returns the vectorizer plus one vector per document.
    ///
    /// Keeps at most `max_features` terms, ranked by corpus frequency (ties broken
    /// lexicographically so the vocabulary is deterministic).
    pub fn fit_transform(
        documents: &[&str],
        max_features: usize,
        max_n: usize,
    ) -> Result<(Self, Vec<SparseVector>), LexicalError> {
        if documents.is_empty() {
            return Err(LexicalError::EmptyCorpus);
        }

        let analyzed: Vec<Vec<String>> = documents.iter().map(|d| analyze(d, max_n)).collect();

        // term -> (total occurrences, document frequency)
        let mut stats: HashMap<&str, (u64, u32)> = HashMap::new();
        for terms in &analyzed {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms {
                let slot = stats.entry(term.as_str()).or_insert((0, 0));
                slot.0 += 1;
                if seen.insert(term.as_str()) {
                    slot.1 += 1;
                }
            }
        }

        if stats.is_empty() {
            return Err(LexicalError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, u64, u32)> = stats
            .into_iter()
            .map(|(term, (total, df))| (term, total, df))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let discarded = ranked.len().saturating_sub(max_features);
        ranked.truncate(max_features);
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (idx, (term, _, df)) in ranked.iter().enumerate() {
            vocabulary.insert((*term).to_string(), idx as u32);
            idf.push((((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0) as f32);
        }

        debug!(
            documents = documents.len(),
            features = vocabulary.len(),
            discarded,
            "Fitted TF-IDF vocabulary"
        );

        let vectorizer = Self {
            vocabulary,
            idf,
            max_n,
        };
        let vectors = analyzed
            .iter()
            .map(|terms| vectorizer.vectorize_terms(terms))
            .collect();

        Ok((vectorizer, vectors))
    }

    /// Vectorizes `text` against the frozen vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize_terms(&analyze(text, self.max_n))
    }

    fn vectorize_terms(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<u32, u32> = HashMap::new();
        for term in terms {
            if let Some(&idx) = self.vocabulary.get(term.as_str()) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        SparseVector::from_weights(
            counts
                .into_iter()
                .map(|(idx, count)| (idx, count as f32 * self.idf[idx as usize]))
                .collect(),
        )
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}
