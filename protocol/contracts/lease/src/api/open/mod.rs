use serde::{Deserialize, Serialize};

use finance::{coin::CoinDTO, duration::Duration, liability::Liability};
use sdk::schemars::{self, JsonSchema};

use crate::error::{ContractError, ContractResult};

mod unchecked;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(
    deny_unknown_fields,
    rename_all = "snake_case",
    try_from = "unchecked::PositionSpecDTO"
)]
pub struct PositionSpecDTO {
    /// Liability constraints
    liability: Liability,
    ///  The minimum amount that a lease asset should be evaluated past any
    ///  partial liquidation or close. If not, a full liquidation is performed
    min_asset: CoinDTO,
    /// The minimum amount to liquidate or close. Any liquidation of a smaller
    /// amount is increased up to this limit
    min_sell_asset: CoinDTO,
}

impl PositionSpecDTO {
    pub fn try_new(
        liability: Liability,
        min_asset: CoinDTO,
        min_sell_asset: CoinDTO,
    ) -> ContractResult<Self> {
        let obj = Self {
            liability,
            min_asset,
            min_sell_asset,
        };
        obj.invariant_held().map(|()| obj)
    }

    pub const fn liability(&self) -> &Liability {
        &self.liability
    }

    pub const fn min_asset(&self) -> &CoinDTO {
        &self.min_asset
    }

    pub const fn min_sell_asset(&self) -> &CoinDTO {
        &self.min_sell_asset
    }

    fn invariant_held(&self) -> ContractResult<()> {
        Self::check(
            !self.min_asset.is_zero(),
            "Min asset amount should be positive",
        )
        .and(Self::check(
            !self.min_sell_asset.is_zero(),
            "Min sell asset amount should be positive",
        ))
        .and(Self::check(
            self.min_asset.currency() == self.min_sell_asset.currency(),
            "The currency of min asset should be the same as the currency of min sell asset",
        ))
    }

    fn check(invariant: bool, msg: &str) -> ContractResult<()> {
        ContractError::broken_invariant_if::<Self>(!invariant, msg)
    }
}

/// The schedule of interest payments
///
/// The interest accrued during a due period becomes overdue at its end. An overdue amount
/// left unpaid for longer than the grace period is collected by a partial liquidation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(
    deny_unknown_fields,
    rename_all = "snake_case",
    try_from = "unchecked::InterestPaymentSpec"
)]
pub struct InterestPaymentSpec {
    due_period: Duration,
    grace_period: Duration,
}

impl InterestPaymentSpec {
    pub fn try_new(due_period: Duration, grace_period: Duration) -> ContractResult<Self> {
        let obj = Self {
            due_period,
            grace_period,
        };
        obj.invariant_held().map(|()| obj)
    }

    pub const fn due_period(&self) -> Duration {
        self.due_period
    }

    pub const fn grace_period(&self) -> Duration {
        self.grace_period
    }

    fn invariant_held(&self) -> ContractResult<()> {
        ContractError::broken_invariant_if::<Self>(
            self.due_period.is_zero(),
            "The due period should be longer than zero",
        )
        .and(ContractError::broken_invariant_if::<Self>(
            self.grace_period >= self.due_period,
            "The grace period should be shorter than the due period",
        ))
    }
}
