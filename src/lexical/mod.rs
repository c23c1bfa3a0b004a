//! Lexical similarity over knowledge base questions.
//!
//! Word unigrams and bigrams, English stop words removed, weighted by smoothed
//! TF-IDF and compared by cosine similarity.

pub mod error;
mod scorer;
mod stop_words;
pub mod tokenizer;
mod vectorizer;


pub use error::LexicalError;
pub use scorer::LexicalScorer;
pub use stop_words::is_stop_word;
pub use vectorizer::{SparseVector, TfidfVectorizer};
