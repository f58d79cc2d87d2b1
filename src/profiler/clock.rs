//! Clock capability used to time individual iterations

use std::time::{Duration, Instant};

/// Monotonic time source
///
/// `now` returns time elapsed since an arbitrary fixed origin. Only
/// differences between readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Milliseconds between two readings, never negative
pub(crate) fn elapsed_ms(start: Duration, end: Duration) -> f64 {
    end.saturating_sub(start).as_nanos() as f64 / 1_000_000.0
}
