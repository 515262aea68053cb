use finance::{duration::Duration, percent::Percent};
use sdk::cosmwasm_std::Timestamp;

use crate::finance::LpnCoin;

/// A snapshot of a loan projected to a point in time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    pub annual_interest: Percent,
    pub annual_margin: Percent,
    pub principal_due: LpnCoin,
    pub previous_interest_due: LpnCoin,
    pub previous_margin_due: LpnCoin,
    pub current_interest_due: LpnCoin,
    pub current_margin_due: LpnCoin,
    /// The time left until the overdue amount becomes collectable
    ///
    /// Zero if it is collectable now.
    pub overdue_collect_in: Duration,
    pub last_paid: Timestamp,
}

impl State {
    /// The interest and margin carried over from elapsed due periods
    pub fn overdue(&self) -> LpnCoin {
        self.previous_interest_due + self.previous_margin_due
    }

    pub fn interest_due(&self) -> LpnCoin {
        self.overdue() + self.current_interest_due + self.current_margin_due
    }

    pub fn total_due(&self) -> LpnCoin {
        self.principal_due + self.interest_due()
    }

    pub fn overdue_collectable(&self) -> bool {
        !self.overdue().is_zero() && self.overdue_collect_in.is_zero()
    }
}
