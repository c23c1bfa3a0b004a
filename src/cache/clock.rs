use std::time::Instant;

#[cfg(any(test, feature = "mock"))]
use std::time::Duration;

/// Time source for cache expiry.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for expiry tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug)]
pub struct MockClock {
    now: parking_lot::Mutex<Instant>,
}

#[cfg(any(test, feature = "mock"))]
impl MockClock {
    pub fn new() -> Self {
        Self {
            now: parking_lot::Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

#[cfg(any(test, feature = "mock"))]
impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "mock"))]
impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}
