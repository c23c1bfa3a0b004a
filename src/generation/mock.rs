use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::Generator;
use super::error::GenerationError;
use super::types::{Generation, GenerationMethod, GenerationRequest};

/// Scriptable generator for tests: counts calls, can fail or stall.
#[derive(Debug, Default)]
pub struct MockGenerator {
    calls: AtomicUsize,
    fail: bool,
    delay: Option<Duration>,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a provider error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Sleeps before answering, to exercise timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(GenerationError::Provider("mock failure".to_string()));
        }

        Ok(Generation {
            intent: "general".to_string(),
            response: format!("Mock response for: {}", request.message),
            confidence: 0.9,
            method: GenerationMethod::Model,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
