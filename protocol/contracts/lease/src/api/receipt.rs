use serde::{Deserialize, Serialize};

use finance::{coin::CoinDTO, percent::Percent};
use sdk::schemars::{self, JsonSchema};

/// The outcome of a command, or an evaluation, of a lease
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum Receipt {
    Opened {
        downpayment: CoinDTO,
        loan: CoinDTO,
        amount: CoinDTO,
    },
    Repaid(RepayReceipt),
    PositionClosed {
        /// The amount of the lease currency sold
        amount: CoinDTO,
        proceeds: CoinDTO,
        payment: RepayReceipt,
    },
    Closed {
        amount: CoinDTO,
        excess: CoinDTO,
    },
    LiquidationWarning {
        /// 1, 2, or 3
        level: u8,
        ltv: Percent,
    },
    Liquidated {
        cause: Cause,
        /// The amount of the lease currency sold
        amount: CoinDTO,
        proceeds: CoinDTO,
        payment: RepayReceipt,
        /// The obligations left uncovered by a full liquidation
        written_off: CoinDTO,
    },
    NoChange(),
}

/// How a payment has been distributed over the loan obligations
///
/// `previous_interest + previous_margin + current_interest + current_margin + principal + excess`
/// equals the payment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct RepayReceipt {
    pub previous_interest: CoinDTO,
    pub previous_margin: CoinDTO,
    pub current_interest: CoinDTO,
    pub current_margin: CoinDTO,
    pub principal: CoinDTO,
    pub excess: CoinDTO,
    /// Whether the loan is fully repaid
    pub paid: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum Cause {
    Overdue,
    Liability,
}
