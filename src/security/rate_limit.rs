//! Request throttling for the routes that cost something downstream.
//!
//! Guide turns hit the generation endpoint and contact submissions hit the
//! store, so each draws from its own token bucket: a burst of chat traffic
//! cannot lock visitors out of the contact form.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Slowest refill accepted; a zero rate would never hand out another token.
const MIN_RATE_PER_SEC: f64 = 0.001;

/// Which budget a request is charged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// `POST /api/guide/chat`
    Guide,
    /// `POST /contact` and `POST /api/contact`
    Contact,
}

#[derive(Debug)]
struct BucketState {
    tokens: f64,
    refilled_at: Instant,
}

/// Token bucket refilled continuously up to `burst` tokens.
#[derive(Debug)]
pub struct TokenBucket {
    state: Mutex<BucketState>,
    rate_per_sec: f64,
    burst: f64,
}

impl TokenBucket {
    /// A full bucket. `burst` is at least one token.
    #[must_use]
    pub fn new(rate_per_sec: f32, burst: f32) -> Self {
        let burst = f64::from(burst).max(1.0);
        Self {
            state: Mutex::new(BucketState {
                tokens: burst,
                refilled_at: Instant::now(),
            }),
            rate_per_sec: f64::from(rate_per_sec).max(MIN_RATE_PER_SEC),
            burst,
        }
    }

    /// Take one token, or report how long until one is available.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> Result<(), Duration> {
        // The state is two numbers; a panic elsewhere cannot leave it torn.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let elapsed = now.saturating_duration_since(state.refilled_at);
        state.tokens =
            (state.tokens + elapsed.as_secs_f64() * self.rate_per_sec).min(self.burst);
        state.refilled_at = state.refilled_at.max(now);

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            Ok(())
        } else {
            Err(Duration::from_secs_f64(
                (1.0 - state.tokens) / self.rate_per_sec,
            ))
        }
    }
}

/// One bucket per [`Bucket`], all sized from `resilience`.
#[derive(Debug)]
pub struct SiteRateLimiter {
    guide: TokenBucket,
    contact: TokenBucket,
}

impl SiteRateLimiter {
    #[must_use]
    pub fn new(rate_per_sec: f32, burst: f32) -> Self {
        Self {
            guide: TokenBucket::new(rate_per_sec, burst),
            contact: TokenBucket::new(rate_per_sec, burst),
        }
    }

    /// Charge one request to `bucket`.
    pub fn check(&self, bucket: Bucket) -> Result<(), Duration> {
        match bucket {
            Bucket::Guide => self.guide.try_acquire(),
            Bucket::Contact => self.contact.try_acquire(),
        }
    }
}

/// Whole seconds for a `Retry-After` header, rounded up.
fn retry_after_secs(wait: Duration) -> u64 {
    let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
    secs.max(1)
}

async fn throttle(state: &AppState, bucket: Bucket, req: Request, next: Next) -> Response {
    if !state.config.resilience.rate_limit_enabled {
        return next.run(req).await;
    }
    match state.rate_limiter.check(bucket) {
        Ok(()) => next.run(req).await,
        Err(wait) => {
            let retry_after = retry_after_secs(wait);
            tracing::warn!(
                name: "rate_limit.rejected",
                bucket = ?bucket,
                path = %req.uri().path(),
                retry_after,
                "Rate limit exceeded"
            );
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after.to_string())],
            )
                .into_response()
        }
    }
}

/// Middleware charging guide turns.
pub async fn guide_rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    throttle(&state, Bucket::Guide, req, next).await
}

/// Middleware charging contact submissions.
pub async fn contact_rate_limit(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    throttle(&state, Bucket::Contact, req, next).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_refills_over_time() {
        let bucket = TokenBucket::new(2.0, 3.0);
        let start = Instant::now();

        assert!(bucket.try_acquire_at(start).is_ok());
        assert!(bucket.try_acquire_at(start).is_ok());
        assert!(bucket.try_acquire_at(start).is_ok());
        let wait = bucket.try_acquire_at(start).unwrap_err();
        assert_eq!(wait, Duration::from_millis(500));

        // 600ms at 2/s refills 1.2 tokens
        let later = start + Duration::from_millis(600);
        assert!(bucket.try_acquire_at(later).is_ok());
        assert!(bucket.try_acquire_at(later).is_err());
    }

    #[test]
    fn test_refill_is_capped_at_burst() {
        let bucket = TokenBucket::new(100.0, 2.0);
        let later = Instant::now() + Duration::from_secs(60);

        assert!(bucket.try_acquire_at(later).is_ok());
        assert!(bucket.try_acquire_at(later).is_ok());
        assert!(bucket.try_acquire_at(later).is_err());
    }

    #[test]
    fn test_zero_rate_still_reports_a_wait() {
        let bucket = TokenBucket::new(0.0, 0.0);
        let now = Instant::now();

        assert!(bucket.try_acquire_at(now).is_ok());
        let wait = bucket.try_acquire_at(now).unwrap_err();
        assert_eq!(retry_after_secs(wait), 1000);
    }

    #[test]
    fn test_buckets_are_independent() {
        let limiter = SiteRateLimiter::new(0.001, 1.0);

        assert!(limiter.check(Bucket::Guide).is_ok());
        assert!(limiter.check(Bucket::Guide).is_err());
        assert!(limiter.check(Bucket::Contact).is_ok());
        assert!(limiter.check(Bucket::Contact).is_err());
    }

    #[test]
    fn test_poisoned_bucket_keeps_working() {
        let bucket = TokenBucket::new(1.0, 1.0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = bucket.state.lock().unwrap();
            panic!("poison the lock");
        }));
        assert!(result.is_err());
        assert!(bucket.state.is_poisoned());

        assert!(bucket.try_acquire().is_ok());
    }

    #[test]
    fn test_retry_after_rounds_up() {
        assert_eq!(retry_after_secs(Duration::from_millis(1)), 1);
        assert_eq!(retry_after_secs(Duration::from_millis(1500)), 2);
        assert_eq!(retry_after_secs(Duration::from_secs(3)), 3);
    }
}
