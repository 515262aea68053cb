use finance::coin::CoinDTO;
use platform::batch::{Batch, Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Timestamp};

use crate::{
    api::receipt::Receipt,
    error::{ContractError, ContractResult},
    event::Type,
    finance::{LpnCoin, into_coin},
};

use super::{Lease, LeaseResult, State};

impl Lease {
    /// Pay the loan obligations, anyone may do it
    pub(crate) fn repay(
        &mut self,
        issuer: &Addr,
        payment: &CoinDTO,
        now: Timestamp,
    ) -> ContractResult<LeaseResult> {
        let State::Opened { loan, position, .. } = &mut self.state else {
            return Err(ContractError::loan_closed(&self.addr));
        };

        let amount: LpnCoin = into_coin(payment, &self.lpn)?;
        if amount.is_zero() {
            return Err(ContractError::InvalidAmount(payment.clone()));
        }

        let receipt = loan.repay(amount, now)?;
        if receipt.close() {
            self.state = State::Paid {
                amount: position.amount(),
                excess: receipt.excess(),
            };
        }

        let batch = Batch::default()
            .schedule_send(issuer, &self.addr, payment.clone())
            .merge(self.pay(&receipt));
        let emitter = self
            .emit_payment(self.emit_lease(Emitter::of_type(Type::Repay), &now), &receipt)
            .emit("payer", issuer.as_str())
            .emit_coin_dto("payment", payment);

        Ok(LeaseResult::new(
            Receipt::Repaid(receipt.into_dto(&self.lpn)),
            emitter,
            batch,
        ))
    }
}
