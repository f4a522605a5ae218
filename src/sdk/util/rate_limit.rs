use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// One lookup per second keeps well clear of IPStack's plan limits.
pub fn ipstack_limiter() -> Limiter {
    let quota = Quota::per_minute(NonZeroU32::new(60).unwrap());
    Arc::new(RateLimiter::direct(quota))
}

/// Blocks the calling thread until the limiter admits another request.
pub fn block_until_ready(limiter: &Limiter) {
    while limiter.check().is_err() {
        thread::sleep(Duration::from_millis(50));
    }
}
