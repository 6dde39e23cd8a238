use crate::codec::TransportError;
use crate::constants::{
    DEFAULT_RETRY_INITIAL_PERIOD, DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_RETRY_MAX_PERIOD,
};
use std::thread;
use std::time::Duration;

/// Decides whether a transport failure is retried.
///
/// Stateful across one call sequence: the handler takes a fresh instance per
/// invocation from the registered prototype.
pub trait Retryer: Send + Sync {
    /// A new retryer with reset state for one invocation.
    fn fresh(&self) -> Box<dyn Retryer>;

    /// Returns `Ok` to trigger another full encode-and-execute cycle, or the
    /// error itself once the policy gives up.
    fn continue_or_propagate(&mut self, error: TransportError) -> Result<(), TransportError>;
}

/// Default policy: exponential backoff between attempts, 1.5x growth from an
/// initial period up to a cap, bounded by a total attempt count.
#[derive(Debug, Clone)]
pub struct BackoffRetryer {
    max_attempts: usize,
    period: Duration,
    max_period: Duration,
    attempt: usize,
}

impl BackoffRetryer {
    pub fn new(max_attempts: usize, period: Duration, max_period: Duration) -> Self {
        Self {
            max_attempts,
            period,
            max_period,
            attempt: 1,
        }
    }

    fn interval(&self) -> Duration {
        let grown = self.period.mul_f64(1.5f64.powi(self.attempt as i32 - 1));
        grown.min(self.max_period)
    }
}

impl Default for BackoffRetryer {
    fn default() -> Self {
        Self::new(
            DEFAULT_RETRY_MAX_ATTEMPTS,
            DEFAULT_RETRY_INITIAL_PERIOD,
            DEFAULT_RETRY_MAX_PERIOD,
        )
    }
}

impl Retryer for BackoffRetryer {
    fn fresh(&self) -> Box<dyn Retryer> {
        Box::new(Self::new(self.max_attempts, self.period, self.max_period))
    }

    fn continue_or_propagate(&mut self, error: TransportError) -> Result<(), TransportError> {
        if self.attempt >= self.max_attempts {
            return Err(error);
        }
        thread::sleep(self.interval());
        self.attempt += 1;
        Ok(())
    }
}
