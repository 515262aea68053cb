use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::Timestamp,
    schemars::{self, JsonSchema},
};

pub type Units = u64;

pub type Seconds = u32;

/// A more storage and compute optimal version of its counterpart in the std::time.
/// Designed to represent a timespan between cosmwasm_std::Timestamp-s.
///
/// Implementation note: We use `as` safely for numeric upcasts instead of `from/into`
/// in order to get const result.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Duration(Units);

impl Duration {
    const UNITS_IN_SECOND: Units = 1000 * 1000 * 1000;
    const SECONDS_IN_MINUTE: Seconds = 60;
    const SECONDS_IN_HOUR: Seconds = Self::SECONDS_IN_MINUTE * 60;
    const SECONDS_IN_DAY: Seconds = Self::SECONDS_IN_HOUR * 24;

    pub const HOUR: Duration = Self::from_hours(1);

    pub const YEAR: Duration = Self::from_days(365);

    pub const fn from_nanos(nanos: Units) -> Self {
        Self(nanos)
    }

    pub const fn from_secs(secs: Seconds) -> Self {
        Self::from_nanos(secs as Units * Self::UNITS_IN_SECOND)
    }

    pub const fn from_minutes(minutes: u16) -> Self {
        Self::from_secs(minutes as Seconds * Self::SECONDS_IN_MINUTE)
    }

    pub const fn from_hours(hours: u16) -> Self {
        Self::from_secs(hours as Seconds * Self::SECONDS_IN_HOUR)
    }

    pub const fn from_days(days: u16) -> Self {
        Self::from_nanos(days as Units * Self::SECONDS_IN_DAY as Units * Self::UNITS_IN_SECOND)
    }

    #[track_caller]
    pub fn between(start: &Timestamp, end: &Timestamp) -> Self {
        debug_assert!(start <= end);
        Self(end.nanos() - start.nanos())
    }

    /// The time from `start` to `end`, `None` if `end` precedes `start`
    pub fn checked_between(start: &Timestamp, end: &Timestamp) -> Option<Self> {
        end.nanos().checked_sub(start.nanos()).map(Self::from_nanos)
    }

    pub const fn nanos(&self) -> Units {
        self.0
    }

    pub const fn secs(&self) -> Units {
        self.nanos() / Self::UNITS_IN_SECOND
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Duration) -> Self::Output {
        (&self).add(rhs)
    }
}

impl Add<Duration> for &Timestamp {
    type Output = Timestamp;

    #[track_caller]
    fn add(self, rhs: Duration) -> Self::Output {
        self.plus_nanos(rhs.nanos())
    }
}

impl AddAssign<Duration> for Timestamp {
    #[track_caller]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.add(rhs);
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Duration) -> Self::Output {
        Self::from_nanos(self.nanos() + rhs.nanos())
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.minus_nanos(rhs.nanos())
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Duration) -> Self::Output {
        Self::from_nanos(self.nanos() - rhs.nanos())
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_fmt(format_args!("{} nanos", self.nanos()))
    }
}
