//! Bounded polling of a condition against a clock
use std::time::{SystemTime, UNIX_EPOCH};

use finance::duration::Duration;
use sdk::cosmwasm_std::Timestamp;

use crate::error::{Error, Result};

pub trait Clock {
    fn now(&self) -> Timestamp;

    fn sleep(&mut self, period: Duration);
}

/// A clock that moves only when asked to
#[derive(Clone, Copy, Debug)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    pub const fn new(start: Timestamp) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, period: Duration) {
        self.now += period;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn sleep(&mut self, period: Duration) {
        self.advance(period)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(Timestamp::default(), |since_epoch| {
                Timestamp::from_nanos(u64::try_from(since_epoch.as_nanos()).unwrap_or(u64::MAX))
            })
    }

    fn sleep(&mut self, period: Duration) {
        std::thread::sleep(std::time::Duration::from_nanos(period.nanos()))
    }
}

/// Poll `probe` every `poll` until it yields a value or `timeout` elapses
///
/// The probe is always evaluated at least once, the last time at the deadline.
pub fn wait_until<C, P, T>(
    clock: &mut C,
    timeout: Duration,
    poll: Duration,
    mut probe: P,
) -> Result<T>
where
    C: Clock,
    P: FnMut(Timestamp) -> Option<T>,
{
    debug_assert!(!poll.is_zero(), "The poll period should be positive");

    let deadline = clock.now() + timeout;
    loop {
        let now = clock.now();
        if let Some(found) = probe(now) {
            break Ok(found);
        }
        if now >= deadline {
            break Err(Error::Timeout(timeout));
        }
        clock.sleep(poll.min(Duration::between(&now, &deadline)));
    }
}
