use std::collections::BTreeSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::error::{KnowledgeError, KnowledgeResult};

/// One question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub question: String,
    pub response: String,
    pub intent: String,
    #[serde(default)]
    pub keywords: BTreeSet<String>,
}

impl Entry {
    pub fn new(
        question: impl Into<String>,
        response: impl Into<String>,
        intent: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            intent: intent.into(),
            keywords: BTreeSet::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered, non-empty, immutable sequence of [`Entry`] records.
///
/// The position of an entry is its id. Scorers fitted over [`KnowledgeBase::questions`]
/// stay aligned with these ids because the sequence cannot be reordered or mutated.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<Entry>,
}

impl KnowledgeBase {
    /// Wraps loaded entries. Fails when `entries` is empty.
    pub fn new(entries: Vec<Entry>) -> KnowledgeResult<Self> {
        if entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }
        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed knowledge base.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, entry_id: usize) -> Option<&Entry> {
        self.entries.get(entry_id)
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Question texts in entry order.
    pub fn questions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.question.as_str()).collect()
    }
}

impl Index<usize> for KnowledgeBase {
    type Output = Entry;

    fn index(&self, entry_id: usize) -> &Entry {
        &self.entries[entry_id]
    }
}
