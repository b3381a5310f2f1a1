use std::time::Duration;

use constants::path::{MODEL_LOAD_ATTEMPTS, MODEL_RETRY_BASE_SECS, MODEL_RETRY_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub factor: f32,
}

impl RetryPolicy {
    /// Delay to wait after failed attempt `failed` (1-based) before the next
    /// one, or `None` once attempts are exhausted.
    pub fn delay_after(&self, failed: u32) -> Option<Duration> {
        if failed == 0 || failed >= self.max_attempts {
            return None;
        }
        let exponent = i32::try_from(failed - 1).unwrap_or(i32::MAX);
        Some(self.base_delay.mul_f32(self.factor.powi(exponent)))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MODEL_LOAD_ATTEMPTS,
            base_delay: Duration::from_secs_f32(MODEL_RETRY_BASE_SECS),
            factor: MODEL_RETRY_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_then_stop() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.delay_after(1), Some(Duration::from_secs(1)));
        assert_eq!(policy.delay_after(2), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay_after(3), None);
    }

    #[test]
    fn single_attempt_never_retries() {
        let policy = RetryPolicy {
            max_attempts: 1,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.delay_after(1), None);
    }
}
