use serde::{Deserialize, Serialize};

use sdk::cosmwasm_std::Timestamp;

use crate::duration::Duration;

/// A right-open time interval `[start, start + length)`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Period {
    start: Timestamp,
    length: Duration,
}

impl Period {
    pub fn from_till(start: Timestamp, till: Timestamp) -> Self {
        debug_assert!(start <= till);
        Self::from_length(start, Duration::between(&start, &till))
    }

    pub fn from_length(start: Timestamp, length: Duration) -> Self {
        Self { start, length }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn length(&self) -> Duration {
        self.length
    }

    pub fn till(&self) -> Timestamp {
        self.start + self.length
    }

    /// The period of the same length starting at the end of this one
    pub fn next(self) -> Self {
        Self::from_length(self.till(), self.length)
    }

    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        &self.start <= timestamp && timestamp < &self.till()
    }

    pub fn move_within(&self, timestamp: Timestamp) -> Timestamp {
        timestamp.clamp(self.start, self.till())
    }
}
