use serde::{Deserialize, Serialize};

use currency::{CurrencyDTO, Group};
use finance::percent::Percent;
use sdk::{
    cosmwasm_std::Addr,
    schemars::{self, JsonSchema},
};

use crate::error::{ContractError, ContractResult};

use super::open::{InterestPaymentSpec, PositionSpecDTO};

/// The parameters new leases are opened with
///
/// The configuration is validated on construction and on deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(
    deny_unknown_fields,
    rename_all = "snake_case",
    try_from = "unchecked::LeaserConfig"
)]
pub struct LeaserConfig {
    lpn: CurrencyDTO,
    lease_currencies: Group,
    /// The Liquidity Provider Pool, LPP, that lends the loan amounts
    lpp: Addr,
    /// The account the margin interest is paid to
    profit: Addr,
    /// The annual interest rate charged on new loans
    loan_annual_interest_rate: Percent,
    /// The delta added on top of the loan interest rate
    lease_interest_rate_margin: Percent,
    lease_position_spec: PositionSpecDTO,
    lease_interest_payment: InterestPaymentSpec,
}

impl LeaserConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        lpn: CurrencyDTO,
        lease_currencies: Group,
        lpp: Addr,
        profit: Addr,
        loan_annual_interest_rate: Percent,
        lease_interest_rate_margin: Percent,
        lease_position_spec: PositionSpecDTO,
        lease_interest_payment: InterestPaymentSpec,
    ) -> ContractResult<Self> {
        let obj = Self {
            lpn,
            lease_currencies,
            lpp,
            profit,
            loan_annual_interest_rate,
            lease_interest_rate_margin,
            lease_position_spec,
            lease_interest_payment,
        };
        obj.invariant_held().map(|()| obj)
    }

    pub const fn lpn(&self) -> &CurrencyDTO {
        &self.lpn
    }

    pub const fn lease_currencies(&self) -> &Group {
        &self.lease_currencies
    }

    pub const fn lpp(&self) -> &Addr {
        &self.lpp
    }

    pub const fn profit(&self) -> &Addr {
        &self.profit
    }

    pub const fn loan_annual_interest_rate(&self) -> Percent {
        self.loan_annual_interest_rate
    }

    pub const fn lease_interest_rate_margin(&self) -> Percent {
        self.lease_interest_rate_margin
    }

    pub const fn lease_position_spec(&self) -> &PositionSpecDTO {
        &self.lease_position_spec
    }

    pub const fn lease_interest_payment(&self) -> InterestPaymentSpec {
        self.lease_interest_payment
    }

    fn invariant_held(&self) -> ContractResult<()> {
        Self::check(
            !self.lease_currencies.contains(&self.lpn),
            "The LPN should not be a lease currency",
        )?;
        Self::check(
            self.lease_currencies.members().next().is_some(),
            "There should be at least one lease currency",
        )?;
        Self::check(
            self.lease_position_spec.min_asset().currency() == &self.lpn,
            "The position limits should be in the LPN",
        )?;
        Self::check(self.lpp != self.profit, "The LPP and the Profit should differ")
    }

    fn check(invariant: bool, msg: &str) -> ContractResult<()> {
        ContractError::broken_invariant_if::<Self>(!invariant, msg)
    }
}

mod unchecked {
    use serde::Deserialize;

    use currency::{CurrencyDTO, Group};
    use finance::percent::Percent;
    use sdk::cosmwasm_std::Addr;

    use crate::{
        api::open::{InterestPaymentSpec, PositionSpecDTO},
        error::ContractError,
    };

    /// Brings invariant checking as a step in deserializing a LeaserConfig
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "snake_case")]
    pub(super) struct LeaserConfig {
        lpn: CurrencyDTO,
        lease_currencies: Group,
        lpp: Addr,
        profit: Addr,
        loan_annual_interest_rate: Percent,
        lease_interest_rate_margin: Percent,
        lease_position_spec: PositionSpecDTO,
        lease_interest_payment: InterestPaymentSpec,
    }

    impl TryFrom<LeaserConfig> for super::LeaserConfig {
        type Error = ContractError;

        fn try_from(dto: LeaserConfig) -> Result<Self, Self::Error> {
            Self::try_new(
                dto.lpn,
                dto.lease_currencies,
                dto.lpp,
                dto.profit,
                dto.loan_annual_interest_rate,
                dto.lease_interest_rate_margin,
                dto.lease_position_spec,
                dto.lease_interest_payment,
            )
        }
    }
}
