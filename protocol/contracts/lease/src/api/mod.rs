use serde::{Deserialize, Serialize};

use currency::CurrencyDTO;
use finance::{coin::CoinDTO, percent::Percent};
use sdk::schemars::{self, JsonSchema};

pub use self::{
    config::LeaserConfig,
    open::{InterestPaymentSpec, PositionSpecDTO},
};

pub mod config;
pub mod open;
pub mod query;
pub mod receipt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Open a new lease
    ///
    /// The downpayment, in the LPN, is transferred from the issuer who becomes the lease owner.
    /// The loan amount is determined by the liability initial percent, optionally capped by
    /// the maximum Loan-to-Downpayment percentage.
    Open {
        /// Ticker of the currency this lease will be about
        currency: CurrencyDTO,
        downpayment: CoinDTO,
        #[serde(default)]
        max_ltd: Option<Percent>,
    },

    /// Repayment
    ///
    /// The payment, in the LPN, is transferred from the issuer. Anyone may repay.
    Repay(CoinDTO),

    /// Customer initiated position close
    ///
    /// Return `error::ContractError::BelowMinSellAsset` when a partial close is requested
    /// with amount worth less than the minimum sell asset position parameter.
    ///
    /// Return `error::ContractError::BelowMinAsset` when a partial close is requested
    /// with amount that would decrease a position below the minimum asset parameter.
    ///
    /// Note that these checks are not performed on the total position amount if
    /// a `PositionClose::FullClose` is requested.
    ClosePosition(PositionClose),

    /// Close of a fully paid lease
    ///
    /// The remaining position and any excess payment are returned to the owner.
    Close(),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum PositionClose {
    PartialClose(PartialClose),
    FullClose(FullClose),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct PartialClose {
    /// The amount of the lease position to sell
    pub amount: CoinDTO,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct FullClose {}

impl ExecuteMsg {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Repay(_) => "repay",
            Self::ClosePosition(_) => "close position",
            Self::Close() => "close",
        }
    }
}
