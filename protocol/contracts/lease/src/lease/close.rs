use finance::coin::CoinDTO;
use platform::batch::{Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Timestamp};

use crate::{
    api::{PositionClose, receipt::Receipt},
    error::{ContractError, ContractResult},
    event::Type,
    finance::{AssetCoin, into_coin, into_dto, to_lpn},
    oracle::PriceOracle,
};

use super::{Lease, LeaseResult, State};

impl Lease {
    /// Sell a part, or all, of the position and repay the loan with the proceeds
    pub(crate) fn close_position<Oracle>(
        &mut self,
        issuer: &Addr,
        close: &PositionClose,
        oracle: &Oracle,
        now: Timestamp,
    ) -> ContractResult<LeaseResult>
    where
        Oracle: PriceOracle,
    {
        self.ensure_owner(issuer)?;
        if !matches!(self.state, State::Opened { .. }) {
            return Err(self.loan_closed());
        }

        match close {
            PositionClose::PartialClose(spec) => self.close_partial(&spec.amount, oracle, now),
            PositionClose::FullClose(_) => self.close_full(oracle, now),
        }
    }

    /// Return the position and the excess to the owner of a paid lease
    pub(crate) fn close(&mut self, issuer: &Addr, now: Timestamp) -> ContractResult<LeaseResult> {
        self.ensure_owner(issuer)?;

        match self.state {
            State::Opened { ref loan, .. } => Err(ContractError::LoanNotFullyRepaid(into_dto(
                loan.state(now)?.total_due(),
                &self.lpn,
            ))),
            State::Paid { amount, excess } => {
                self.state = State::Closed {};

                let batch = self
                    .return_to_customer(amount, &self.currency)
                    .merge(self.return_to_customer(excess, &self.lpn));
                let emitter = self
                    .emit_lease(Emitter::of_type(Type::Close), &now)
                    .emit_coin("amount", amount, &self.currency)
                    .emit_coin("excess", excess, &self.lpn);
                let receipt = Receipt::Closed {
                    amount: into_dto(amount, &self.currency),
                    excess: into_dto(excess, &self.lpn),
                };
                Ok(LeaseResult::new(receipt, emitter, batch))
            }
            State::Closed {} | State::Liquidated { .. } => Err(self.loan_closed()),
        }
    }

    fn close_partial<Oracle>(
        &mut self,
        amount: &CoinDTO,
        oracle: &Oracle,
        now: Timestamp,
    ) -> ContractResult<LeaseResult>
    where
        Oracle: PriceOracle,
    {
        oracle.price_of(amount.currency())?;
        let close_amount: AssetCoin = into_coin(amount, &self.currency)?;
        let quote = oracle.lease_quote(&self.currency)?;

        let State::Opened { loan, position, .. } = &mut self.state else {
            return Err(ContractError::loan_closed(&self.addr));
        };
        position.validate_close(close_amount, &quote, &self.lpn)?;
        let proceeds = to_lpn(close_amount, quote.exact())?;
        let receipt = loan.repay(proceeds, now)?;
        position.close(close_amount);
        if receipt.close() {
            self.state = State::Paid {
                amount: position.amount(),
                excess: receipt.excess(),
            };
        }

        let batch = self.sell(close_amount, proceeds).merge(self.pay(&receipt));
        let emitter = self
            .emit_payment(
                self.emit_lease(Emitter::of_type(Type::ClosePosition), &now),
                &receipt,
            )
            .emit_coin("amount", close_amount, &self.currency)
            .emit_coin("proceeds", proceeds, &self.lpn);
        let receipt = Receipt::PositionClosed {
            amount: into_dto(close_amount, &self.currency),
            proceeds: into_dto(proceeds, &self.lpn),
            payment: receipt.into_dto(&self.lpn),
        };
        Ok(LeaseResult::new(receipt, emitter, batch))
    }

    fn close_full<Oracle>(&mut self, oracle: &Oracle, now: Timestamp) -> ContractResult<LeaseResult>
    where
        Oracle: PriceOracle,
    {
        let quote = oracle.lease_quote(&self.currency)?;

        let State::Opened { loan, position, .. } = &mut self.state else {
            return Err(ContractError::loan_closed(&self.addr));
        };
        let amount = position.amount();
        let proceeds = to_lpn(amount, quote.exact())?;
        let due = loan.state(now)?.total_due();
        if proceeds < due {
            return Err(ContractError::InsufficientCloseProceeds {
                proceeds: into_dto(proceeds, &self.lpn),
                due: into_dto(due, &self.lpn),
            });
        }
        let receipt = loan.repay(proceeds, now)?;
        debug_assert!(receipt.close());
        self.state = State::Closed {};

        let batch = self
            .sell(amount, proceeds)
            .merge(self.pay(&receipt))
            .merge(self.return_to_customer(receipt.excess(), &self.lpn));
        let emitter = self
            .emit_payment(
                self.emit_lease(Emitter::of_type(Type::ClosePosition), &now),
                &receipt,
            )
            .emit_coin("amount", amount, &self.currency)
            .emit_coin("proceeds", proceeds, &self.lpn);
        let receipt = Receipt::PositionClosed {
            amount: into_dto(amount, &self.currency),
            proceeds: into_dto(proceeds, &self.lpn),
            payment: receipt.into_dto(&self.lpn),
        };
        Ok(LeaseResult::new(receipt, emitter, batch))
    }
}
