use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::time::sleep;

/// Bounded retry with a fixed delay between attempts
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run `operation` until it succeeds or attempts run out. Returns the
    /// last error together with the number of attempts made.
    pub async fn run<T, E, F, Fut>(&self, what: &str, mut operation: F) -> Result<T, (u32, E)>
    where
        E: std::fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.max_attempts => return Err((attempt, e)),
                Err(e) => {
                    warn!(
                        "{} failed (attempt {}/{}): {}",
                        what, attempt, self.max_attempts, e
                    );
                    sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_succeeds_after_failures() {
        let calls = Cell::new(0);
        let policy = RetryPolicy::new(3, 1);

        let result: Result<u32, (u32, String)> = policy
            .run("test", || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move { if n < 3 { Err(format!("fail {}", n)) } else { Ok(n) } }
            })
            .await;

        assert_eq!(result, Ok(3));
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = Cell::new(0);
        let policy = RetryPolicy::new(2, 1);

        let result: Result<(), (u32, String)> = policy
            .run("test", || {
                calls.set(calls.get() + 1);
                async { Err("down".to_string()) }
            })
            .await;

        assert_eq!(result, Err((2, "down".to_string())));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_zero_attempts_means_one() {
        assert_eq!(RetryPolicy::new(0, 0).max_attempts(), 1);
    }
}
