mod session_tests;

use crate::config::LazyLoadPolicy;

/// Settling policy that scrolls like production but never sleeps
fn instant_policy() -> LazyLoadPolicy {
    LazyLoadPolicy {
        max_attempts: 3,
        settle_timeout_ms: 0,
        poll_interval_ms: 0,
    }
}
