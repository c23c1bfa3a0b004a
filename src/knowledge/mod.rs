//! Knowledge base: ordered FAQ entries and the sources they load from.

mod defaults;
pub mod error;
pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use defaults::default_entries;
pub use error::{KnowledgeError, KnowledgeResult};
pub use loader::{JsonFileSource, KnowledgeSource, StaticSource};
pub use types::{Entry, KnowledgeBase};

/// Loads entries from `source` and wraps them in a [`KnowledgeBase`].
pub fn load(source: &dyn KnowledgeSource) -> KnowledgeResult<KnowledgeBase> {
    KnowledgeBase::new(source.load_entries()?)
}
