//! In-memory response cache and request status markers.

pub mod clock;
pub mod config;
mod response;
pub mod stats;
pub mod types;


#[cfg(any(test, feature = "mock"))]
pub use clock::MockClock;
pub use clock::{Clock, SystemClock};
pub use config::CacheConfig;
pub use response::ResponseCache;
pub use stats::CacheStats;
pub use types::{TRIAGE_STATUS_HEADER, TRIAGE_STATUS_HEALTHY, TriageStatus};
