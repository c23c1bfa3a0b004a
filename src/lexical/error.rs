use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexicalError {
    #[error("cannot fit lexical scorer on an empty corpus")]
    EmptyCorpus,

    #[error("corpus produced an empty vocabulary (only stop words or short tokens)")]
    EmptyVocabulary,
}
