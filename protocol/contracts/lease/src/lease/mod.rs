use serde::{Deserialize, Serialize};

use currency::CurrencyDTO;
use finance::{coin::Coin, liability::Zone};
use platform::batch::{Batch, Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Event, Timestamp};

use crate::{
    api::receipt::Receipt,
    error::{ContractError, ContractResult},
    finance::{AssetCoin, LpnCoin, into_dto},
    loan::{Loan, RepayReceipt},
    position::Position,
};

pub(crate) use self::open::OpenForm;

mod close;
mod liquidation;
mod open;
mod repay;
mod state;

/// A leveraged position in a lease currency backed by a loan in the LPN
///
/// The lease address identifies it and is its bank account too. The position and any excess
/// payment are kept there until returned to the customer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Lease {
    addr: Addr,
    customer: Addr,
    currency: CurrencyDTO,
    lpn: CurrencyDTO,
    lpp: Addr,
    profit: Addr,
    state: State,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
enum State {
    Opened {
        loan: Loan,
        position: Position,
        /// The liability zone the last warning, if any, was issued for
        zone: Zone,
    },
    Paid {
        amount: AssetCoin,
        excess: LpnCoin,
    },
    Closed {},
    Liquidated {
        remaining: Option<LpnCoin>,
    },
}

/// The outcome of a lease command
///
/// The lease changes take effect only if the batch is executed.
#[derive(Debug)]
pub(crate) struct LeaseResult {
    pub receipt: Receipt,
    pub events: Vec<Event>,
    pub batch: Batch,
}

impl LeaseResult {
    fn new(receipt: Receipt, emitter: Emitter, batch: Batch) -> Self {
        Self {
            receipt,
            events: vec![emitter.into()],
            batch,
        }
    }

    fn no_change() -> Self {
        Self {
            receipt: Receipt::NoChange(),
            events: vec![],
            batch: Batch::default(),
        }
    }
}

impl Lease {
    pub fn addr(&self) -> &Addr {
        &self.addr
    }

    pub fn customer(&self) -> &Addr {
        &self.customer
    }

    pub fn currency(&self) -> &CurrencyDTO {
        &self.currency
    }

    fn ensure_owner(&self, issuer: &Addr) -> ContractResult<()> {
        if issuer == &self.customer {
            Ok(())
        } else {
            Err(ContractError::unauthorized(issuer))
        }
    }

    fn loan_closed(&self) -> ContractError {
        ContractError::loan_closed(&self.addr)
    }

    /// Forward a payment from the lease account to the loan parties
    ///
    /// The excess, if any, stays in the account.
    fn pay(&self, receipt: &RepayReceipt) -> Batch {
        Batch::default()
            .schedule_send(
                &self.addr,
                &self.lpp,
                into_dto(receipt.interest_and_principal(), &self.lpn),
            )
            .schedule_send(
                &self.addr,
                &self.profit,
                into_dto(receipt.margin(), &self.lpn),
            )
    }

    /// Sell `amount` of the position in exchange of `proceeds`
    fn sell(&self, amount: AssetCoin, proceeds: LpnCoin) -> Batch {
        Batch::default().schedule_swap(
            &self.addr,
            into_dto(amount, &self.currency),
            into_dto(proceeds, &self.lpn),
        )
    }

    fn return_to_customer<C>(&self, amount: Coin<C>, currency: &CurrencyDTO) -> Batch {
        Batch::default().schedule_send(
            &self.addr,
            &self.customer,
            into_dto(amount, currency),
        )
    }

    fn emit_lease(&self, emitter: Emitter, now: &Timestamp) -> Emitter {
        emitter
            .emit("id", self.addr.as_str())
            .emit("customer", self.customer.as_str())
            .emit_currency_symbol("lease-asset", self.currency.ticker())
            .emit_timestamp("at", now)
    }

    fn emit_payment(&self, emitter: Emitter, receipt: &RepayReceipt) -> Emitter {
        emitter
            .emit_currency_symbol("payment-symbol", self.lpn.ticker())
            .emit_coin_amount("prev-margin-interest", receipt.previous_margin_paid())
            .emit_coin_amount("prev-loan-interest", receipt.previous_interest_paid())
            .emit_coin_amount("curr-margin-interest", receipt.current_margin_paid())
            .emit_coin_amount("curr-loan-interest", receipt.current_interest_paid())
            .emit_coin_amount("principal", receipt.principal_paid())
            .emit_coin_amount("excess", receipt.excess())
            .emit_to_string_value("loan-close", receipt.close())
    }
}
