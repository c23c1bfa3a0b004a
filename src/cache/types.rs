pub const TRIAGE_STATUS_HEADER: &str = "X-Triage-Status";
pub const TRIAGE_STATUS_HEALTHY: &str = "healthy";

/// Which path answered a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriageStatus {
    /// Served from the response cache.
    HitCache,
    /// Fresh knowledge base match.
    HitFaq,
    /// Fresh reply from the generation backend.
    Generated,
    /// Generation failed or timed out; deterministic reply.
    Fallback,
}

impl TriageStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            TriageStatus::HitCache => "HIT_CACHE",
            TriageStatus::HitFaq => "HIT_FAQ",
            TriageStatus::Generated => "GENERATED",
            TriageStatus::Fallback => "FALLBACK",
        }
    }

    /// `true` when neither the matcher nor the generator ran.
    #[inline]
    pub fn is_cache_hit(&self) -> bool {
        matches!(self, TriageStatus::HitCache)
    }
}

impl std::fmt::Display for TriageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}
