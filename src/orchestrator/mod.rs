//! Request orchestration: response cache in front of the match selector, with
//! generation behind it.

mod bootstrap;
pub mod error;
pub mod policy;
mod service;
pub mod types;


pub use bootstrap::build_orchestrator;
pub use error::OrchestratorError;
pub use policy::CachePolicy;
pub use service::{Orchestrator, OrchestratorConfig};
pub use types::{Outcome, Reply, ReplySource, Resolution};
