use serde::{Deserialize, Serialize};

use finance::{duration::Duration, interest, percent::Percent, period::Period};
use sdk::cosmwasm_std::Timestamp;

use crate::{
    api::InterestPaymentSpec,
    error::{ContractError, ContractResult},
    finance::{LpnCoin, overflow},
};

pub(crate) use self::{repay::Receipt as RepayReceipt, state::State};

mod repay;
mod state;

/// Interest and margin accrued and not paid yet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
struct Dues {
    interest: LpnCoin,
    margin: LpnCoin,
}

impl Dues {
    fn is_zero(&self) -> bool {
        self.interest.is_zero() && self.margin.is_zero()
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        self.interest
            .checked_add(other.interest)
            .zip(self.margin.checked_add(other.margin))
            .map(|(interest, margin)| Self { interest, margin })
    }
}

/// A loan in the LPN backing a lease position
///
/// Interest and margin accrue on the principal and are collected in due periods. The amounts
/// accrued within the active period are 'current'. At the end of a period any unpaid current
/// amounts become 'previous', i.e. overdue, and are collectable by a liquidation once the
/// grace period elapses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(crate) struct Loan {
    principal_due: LpnCoin,
    annual_interest: Percent,
    annual_margin: Percent,
    payment_spec: InterestPaymentSpec,
    period: Period,
    accrued_till: Timestamp,
    last_paid: Timestamp,
    overdue_since: Option<Timestamp>,
    previous: Dues,
    current: Dues,
}

impl Loan {
    pub fn new(
        principal: LpnCoin,
        annual_interest: Percent,
        annual_margin: Percent,
        payment_spec: InterestPaymentSpec,
        now: Timestamp,
    ) -> Self {
        debug_assert!(!principal.is_zero());
        Self {
            principal_due: principal,
            annual_interest,
            annual_margin,
            payment_spec,
            period: Period::from_length(now, payment_spec.due_period()),
            accrued_till: now,
            last_paid: now,
            overdue_since: None,
            previous: Dues::default(),
            current: Dues::default(),
        }
    }

    pub fn principal_due(&self) -> LpnCoin {
        self.principal_due
    }

    /// Bring the dues up to `now`
    ///
    /// Every due period elapsed till `now` is closed in turn, moving its unpaid amounts to the
    /// overdue ones.
    pub fn accrue(&mut self, now: Timestamp) -> ContractResult<()> {
        if now < self.accrued_till {
            return Err(ContractError::InputValidation(format!(
                "the time {now} precedes the last accrual at {at}",
                at = self.accrued_till
            )));
        }

        while self.period.till() <= now {
            self.accrue_till(self.period.till())?;
            self.close_period();
        }
        self.accrue_till(now)
    }

    /// Distribute a payment over the loan obligations
    ///
    /// The order is previous interest, previous margin, current interest, current margin,
    /// and principal. Whatever is left is an excess.
    pub fn repay(&mut self, payment: LpnCoin, now: Timestamp) -> ContractResult<RepayReceipt> {
        self.accrue(now)?;

        let mut remaining = payment;
        let previous_interest = pay(&mut self.previous.interest, &mut remaining);
        let previous_margin = pay(&mut self.previous.margin, &mut remaining);
        if self.previous.is_zero() {
            self.overdue_since = None;
        }
        let current_interest = pay(&mut self.current.interest, &mut remaining);
        let current_margin = pay(&mut self.current.margin, &mut remaining);
        let principal_due = self.principal_due;
        let principal = pay(&mut self.principal_due, &mut remaining);
        self.last_paid = now;

        Ok(RepayReceipt::new(
            previous_interest,
            previous_margin,
            current_interest,
            current_margin,
            principal_due,
            principal,
            remaining,
        ))
    }

    /// Project the loan to `now` without altering it
    pub fn state(&self, now: Timestamp) -> ContractResult<State> {
        let mut projected = self.clone();
        projected.accrue(now)?;

        let grace_period = self.payment_spec.grace_period();
        let overdue_collect_in = match projected.overdue_since {
            Some(since) => Duration::checked_between(&now, &(since + grace_period)),
            None => Duration::checked_between(&now, &(projected.period.till() + grace_period)),
        }
        .unwrap_or_default();

        Ok(State {
            annual_interest: projected.annual_interest,
            annual_margin: projected.annual_margin,
            principal_due: projected.principal_due,
            previous_interest_due: projected.previous.interest,
            previous_margin_due: projected.previous.margin,
            current_interest_due: projected.current.interest,
            current_margin_due: projected.current.margin,
            overdue_collect_in,
            last_paid: projected.last_paid,
        })
    }

    fn accrue_till(&mut self, till: Timestamp) -> ContractResult<()> {
        debug_assert!(self.accrued_till <= till);
        debug_assert!(self.period.move_within(till) == till);

        let window = Duration::between(&self.accrued_till, &till);
        let accrued = Dues {
            interest: self.interest_for(self.annual_interest, window)?,
            margin: self.interest_for(self.annual_margin, window)?,
        };
        self.current = self
            .current
            .checked_add(accrued)
            .ok_or_else(|| overflow(self.current, accrued))?;
        self.accrued_till = till;
        Ok(())
    }

    fn interest_for(&self, annual_rate: Percent, window: Duration) -> ContractResult<LpnCoin> {
        interest::interest(annual_rate, self.principal_due, window)
            .ok_or_else(|| overflow(self.principal_due, annual_rate))
    }

    fn close_period(&mut self) {
        debug_assert_eq!(self.accrued_till, self.period.till());

        if !self.current.is_zero() {
            // the sum of all dues never exceeds what has been accrued so far
            self.previous = Dues {
                interest: self.previous.interest + self.current.interest,
                margin: self.previous.margin + self.current.margin,
            };
            self.current = Dues::default();
            self.overdue_since.get_or_insert(self.period.till());
        }
        self.period = self.period.next();
    }
}

fn pay(due: &mut LpnCoin, payment: &mut LpnCoin) -> LpnCoin {
    let paid = (*due).min(*payment);
    *due -= paid;
    *payment -= paid;
    paid
}
