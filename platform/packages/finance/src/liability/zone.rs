use serde::{Deserialize, Serialize};

use crate::percent::Percent;

use super::Level;

/// Liability zone is an interval a lease LTV belongs to.
///
/// Zones cover only the leases that are not pending a liquidation.
///
/// A zone is defined as a right-open interval of LTVs between two Levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Zone {
    low: Option<Level>,
    high: Level,
}

impl Zone {
    pub const fn no_warnings(up_to: Percent) -> Self {
        Self {
            low: None,
            high: Level::First(up_to),
        }
    }

    pub fn first(low: Percent, high: Percent) -> Self {
        debug_assert!(low < high);
        Self {
            low: Some(Level::First(low)),
            high: Level::Second(high),
        }
    }

    pub fn second(low: Percent, high: Percent) -> Self {
        debug_assert!(low < high);
        Self {
            low: Some(Level::Second(low)),
            high: Level::Third(high),
        }
    }

    pub fn third(low: Percent, high: Percent) -> Self {
        debug_assert!(low < high);
        Self {
            low: Some(Level::Third(low)),
            high: Level::Max(high),
        }
    }

    pub const fn low(&self) -> Option<Level> {
        self.low
    }

    pub const fn high(&self) -> Level {
        self.high
    }

    pub fn contains(&self, ltv: Percent) -> bool {
        self.low.is_none_or(|low| low.ltv() <= ltv) && ltv < self.high.ltv()
    }
}

#[cfg(test)]
mod test {
    use crate::{liability::Zone, percent::Percent};

    #[test]
    fn ord() {
        assert!(
            Zone::no_warnings(Percent::HUNDRED)
                < Zone::first(Percent::from_percent(0), Percent::from_percent(10))
        );
        assert!(
            Zone::first(Percent::from_percent(0), Percent::from_percent(10))
                < Zone::first(Percent::from_percent(0), Percent::from_percent(11))
        );
        assert!(
            Zone::first(Percent::from_percent(0), Percent::from_percent(10))
                < Zone::first(Percent::from_percent(5), Percent::from_percent(6))
        );
        assert!(
            Zone::first(Percent::from_percent(23), Percent::from_percent(24))
                < Zone::second(Percent::from_percent(0), Percent::from_percent(10))
        );
    }

    #[test]
    fn contains() {
        let above = Percent::from_percent(23);
        let below = Percent::from_percent(34);
        let no_warnings = Zone::no_warnings(below);
        assert!(no_warnings.contains(Percent::ZERO));
        assert!(no_warnings.contains(above));
        assert!(!no_warnings.contains(below));

        let second = Zone::second(above, below);
        assert!(!second.contains(Percent::from_permille(229)));
        assert!(second.contains(above));
        assert!(!second.contains(below));
    }
}
