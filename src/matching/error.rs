use thiserror::Error;

use crate::lexical::LexicalError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("cannot build a match selector over an empty knowledge base")]
    EmptyKnowledgeBase,

    #[error("lexical scorer: {0}")]
    Lexical(#[from] LexicalError),
}
