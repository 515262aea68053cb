use finance::{liability::Zone, percent::Percent};
use platform::batch::{Batch, Emit, Emitter};
use sdk::cosmwasm_std::Timestamp;

use crate::{
    api::receipt::Receipt,
    error::ContractResult,
    event::Type,
    finance::{LpnCoin, LpnQuote, into_dto, to_lpn},
    oracle::PriceOracle,
    position::{Cause, Debt, Liquidation},
};

use super::{Lease, LeaseResult, State};

impl Lease {
    /// Check the lease against the current prices and time
    ///
    /// Issue a warning on entering a liability zone of a higher risk, or liquidate a part, or
    /// all, of the position if either the liability is at its maximum or there is an overdue
    /// amount past the grace period. Non-open leases are not affected.
    pub(crate) fn evaluate<Oracle>(
        &mut self,
        oracle: &Oracle,
        now: Timestamp,
    ) -> ContractResult<LeaseResult>
    where
        Oracle: PriceOracle,
    {
        if !matches!(self.state, State::Opened { .. }) {
            return Ok(LeaseResult::no_change());
        }
        let quote = oracle.lease_quote(&self.currency)?;

        let State::Opened {
            loan,
            position,
            zone,
        } = &mut self.state
        else {
            return Ok(LeaseResult::no_change());
        };
        loan.accrue(now)?;
        let healthy_zone = Zone::no_warnings(position.spec().liability().first_liq_warn());

        match position.debt(&loan.state(now)?, &quote)? {
            Debt::No => {
                *zone = healthy_zone;
                Ok(LeaseResult::no_change())
            }
            Debt::Ok { zone: current, ltv } => {
                let warning = current.low().filter(|_| current > *zone);
                *zone = current;
                Ok(warning.map_or_else(LeaseResult::no_change, |level| {
                    self.warn(level.ordinal(), ltv, &now)
                }))
            }
            Debt::Bad(liquidation) => {
                *zone = healthy_zone;
                self.liquidate(liquidation, quote, now)
            }
        }
    }

    fn warn(&self, level: u8, ltv: Percent, now: &Timestamp) -> LeaseResult {
        let emitter = self
            .emit_lease(Emitter::of_type(Type::LiquidationWarning), now)
            .emit_percent_amount("ltv", ltv)
            .emit_to_string_value("level", level);
        LeaseResult::new(
            Receipt::LiquidationWarning { level, ltv },
            emitter,
            Batch::default(),
        )
    }

    fn liquidate(
        &mut self,
        liquidation: Liquidation,
        quote: LpnQuote,
        now: Timestamp,
    ) -> ContractResult<LeaseResult> {
        let State::Opened { loan, position, .. } = &mut self.state else {
            return Ok(LeaseResult::no_change());
        };

        let (amount, cause) = match liquidation {
            Liquidation::Partial { amount, cause } => (amount, cause),
            Liquidation::Full(cause) => (position.amount(), cause),
        };
        let proceeds = to_lpn(amount, quote.exact())?;
        let payment = loan.repay(proceeds, now)?;

        let mut written_off = LpnCoin::default();
        let mut surplus = LpnCoin::default();
        match liquidation {
            Liquidation::Partial { .. } => {
                position.close(amount);
                if payment.close() {
                    self.state = State::Paid {
                        amount: position.amount(),
                        excess: payment.excess(),
                    };
                }
            }
            Liquidation::Full(_) => {
                written_off = loan.state(now)?.total_due();
                surplus = payment.excess();
                self.state = State::Liquidated {
                    remaining: Some(surplus).filter(|remaining| !remaining.is_zero()),
                };
            }
        }

        let batch = self
            .sell(amount, proceeds)
            .merge(self.pay(&payment))
            .merge(self.return_to_customer(surplus, &self.lpn));
        let emitter = self.emit_payment(
            emit_cause(
                self.emit_lease(Emitter::of_type(Type::Liquidation), &now),
                &cause,
            )
            .emit_coin("amount", amount, &self.currency)
            .emit_coin("proceeds", proceeds, &self.lpn)
            .emit_coin("written-off", written_off, &self.lpn),
            &payment,
        );
        let receipt = Receipt::Liquidated {
            cause: cause.into(),
            amount: into_dto(amount, &self.currency),
            proceeds: into_dto(proceeds, &self.lpn),
            payment: payment.into_dto(&self.lpn),
            written_off: into_dto(written_off, &self.lpn),
        };
        Ok(LeaseResult::new(receipt, emitter, batch))
    }
}

fn emit_cause(emitter: Emitter, cause: &Cause) -> Emitter {
    match cause {
        Cause::Liability { ltv, healthy_ltv } => emitter
            .emit("cause", "high liability")
            .emit_percent_amount("ltv", *ltv)
            .emit_percent_amount("ltv-healthy", *healthy_ltv),
        Cause::Overdue() => emitter.emit("cause", "overdue interest"),
    }
}

