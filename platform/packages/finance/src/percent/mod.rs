use std::{
    fmt::{Display, Formatter, Result as FmtResult, Write},
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

use crate::{coin::Amount, fractionable, ratio::Ratio, zero::Zero};

pub type Units = u32;

/// A ratio expressed in permilles
///
/// Unlike a percent of a whole, this one is not capped at 100% so it may
/// represent loan-to-value ratios of under-collateralized positions too.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Percent(Units);

impl Percent {
    const UNITS_IN_PERCENT: Units = 10;

    pub const ZERO: Self = Self::from_permille(0);
    pub const HUNDRED: Self = Self::from_percent(100);

    pub const fn from_percent(percent: u16) -> Self {
        Self::from_permille(percent as Units * Self::UNITS_IN_PERCENT)
    }

    pub const fn from_permille(permille: Units) -> Self {
        Self(permille)
    }

    /// Compute `parts / total` rounded down
    ///
    /// Return `None` if `total` is zero or the ratio does not fit.
    pub fn from_ratio<P>(parts: P, total: P) -> Option<Self>
    where
        P: Into<Amount>,
    {
        fractionable::checked_mul_div(
            parts.into(),
            Self::HUNDRED.units().into(),
            total.into(),
        )
        .and_then(|permilles| Units::try_from(permilles).ok())
        .map(Self::from_permille)
    }

    pub const fn units(&self) -> Units {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == Units::ZERO
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self::from_permille)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self::from_permille)
    }
}

impl Ratio<Units> for Percent {
    fn parts(&self) -> Units {
        self.units()
    }

    fn total(&self) -> Units {
        Self::HUNDRED.units()
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let whole = self.0 / Self::UNITS_IN_PERCENT;
        let fractional = self.0 % Self::UNITS_IN_PERCENT;

        f.write_fmt(format_args!("{}", whole))?;
        if fractional != Units::ZERO {
            f.write_fmt(format_args!(".{}", fractional))?;
        }
        f.write_char('%')
    }
}

impl Add<Percent> for Percent {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Percent) -> Self::Output {
        Self::from_permille(self.0 + rhs.0)
    }
}

impl Sub<Percent> for Percent {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Percent) -> Self::Output {
        Self::from_permille(self.0 - rhs.0)
    }
}
