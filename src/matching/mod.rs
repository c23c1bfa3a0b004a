//! Tiered match selection over the knowledge base.

pub mod error;
mod selector;
pub mod types;


pub use error::MatchError;
pub use selector::MatchSelector;
pub use types::{MatchResult, MatchType};
