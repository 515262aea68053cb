use serde::{Deserialize, Serialize};

use finance::{coin::CoinDTO, duration::Duration, percent::Percent};
use sdk::{
    cosmwasm_std::Timestamp,
    schemars::{self, JsonSchema},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum StatusResponse {
    Opened {
        amount: CoinDTO,
        loan_interest_rate: Percent,
        margin_interest_rate: Percent,
        principal_due: CoinDTO,
        /// Amounts accrued in past due periods
        previous_margin_due: CoinDTO,
        previous_interest_due: CoinDTO,
        /// Time left until the previous amounts get collected by a liquidation
        ///
        /// If there are no previous amounts it is the earliest time it may happen.
        overdue_collect_in: Duration,
        /// Amounts accrued in the current due period
        current_margin_due: CoinDTO,
        current_interest_due: CoinDTO,
        last_paid: Timestamp,
        /// The time the amounts are estimated at
        validity: Timestamp,
    },
    Paid {
        amount: CoinDTO,
        /// Payments above the loan obligations, returned on close
        excess: CoinDTO,
    },
    Closed(),
    Liquidated {
        /// The proceeds left after covering the loan, paid to the owner
        remaining: Option<CoinDTO>,
    },
}

/// A data transfer version of [`finance::price::Price`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct PriceDTO {
    pub amount: CoinDTO,
    pub amount_quote: CoinDTO,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct PriceQuoteResponse {
    pub min: PriceDTO,
    pub exact: PriceDTO,
    pub max: PriceDTO,
}
