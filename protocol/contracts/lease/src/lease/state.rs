use sdk::cosmwasm_std::Timestamp;

use crate::{api::query::StatusResponse, error::ContractResult, finance::into_dto};

use super::{Lease, State};

impl Lease {
    /// Project the lease to `now` without altering it
    pub(crate) fn state(&self, now: Timestamp) -> ContractResult<StatusResponse> {
        match &self.state {
            State::Opened { loan, position, .. } => loan.state(now).map(|due| {
                StatusResponse::Opened {
                    amount: into_dto(position.amount(), &self.currency),
                    loan_interest_rate: due.annual_interest,
                    margin_interest_rate: due.annual_margin,
                    principal_due: into_dto(due.principal_due, &self.lpn),
                    previous_margin_due: into_dto(due.previous_margin_due, &self.lpn),
                    previous_interest_due: into_dto(due.previous_interest_due, &self.lpn),
                    overdue_collect_in: due.overdue_collect_in,
                    current_margin_due: into_dto(due.current_margin_due, &self.lpn),
                    current_interest_due: into_dto(due.current_interest_due, &self.lpn),
                    last_paid: due.last_paid,
                    validity: now,
                }
            }),
            State::Paid { amount, excess } => Ok(StatusResponse::Paid {
                amount: into_dto(*amount, &self.currency),
                excess: into_dto(*excess, &self.lpn),
            }),
            State::Closed {} => Ok(StatusResponse::Closed()),
            State::Liquidated { remaining } => Ok(StatusResponse::Liquidated {
                remaining: remaining.map(|remaining| into_dto(remaining, &self.lpn)),
            }),
        }
    }
}
