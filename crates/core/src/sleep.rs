use std::thread;
use std::time::Duration;

use tracing::debug;

/// Block the loop for `duration`. Zero returns immediately.
pub fn sleep_for(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    debug!("Sleeping for {:.3} seconds", duration.as_secs_f64());
    thread::sleep(duration);
}

/// Time left of `interval` after `elapsed` has already been spent, never negative.
pub fn remaining(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_clamps_at_zero() {
        let tick = Duration::from_secs(5);
        assert_eq!(remaining(tick, Duration::from_secs(2)), Duration::from_secs(3));
        assert_eq!(remaining(tick, Duration::from_secs(5)), Duration::ZERO);
        assert_eq!(remaining(tick, Duration::from_secs(9)), Duration::ZERO);
    }
}
