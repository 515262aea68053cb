use currency::{CurrencyDTO, error::Error as CurrencyError};
use finance::{coin::CoinDTO, liability::Zone, percent::Percent};
use platform::batch::{Batch, Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Timestamp};

use crate::{
    api::{LeaserConfig, receipt::Receipt},
    error::{ContractError, ContractResult},
    event::Type,
    finance::{AssetCoin, LpnCoin, into_coin, into_dto, overflow, to_asset},
    loan::Loan,
    oracle::PriceOracle,
    position::{Position, Spec},
};

use super::{Lease, LeaseResult, State};

/// The terms of a new lease
pub(crate) struct OpenForm<'a> {
    pub currency: &'a CurrencyDTO,
    pub downpayment: &'a CoinDTO,
    pub max_ltd: Option<Percent>,
}

impl Lease {
    /// Open a lease at `addr` on behalf of `customer`
    ///
    /// The downpayment and the loan are exchanged at the exact price for the lease currency.
    pub(crate) fn open<Oracle>(
        addr: Addr,
        customer: Addr,
        form: OpenForm<'_>,
        config: &LeaserConfig,
        oracle: &Oracle,
        now: Timestamp,
    ) -> ContractResult<(Self, LeaseResult)>
    where
        Oracle: PriceOracle,
    {
        let lpn = config.lpn();
        let currencies = config.lease_currencies();
        if !currencies.contains(form.currency) {
            return Err(CurrencyError::not_in_currency_group(
                form.currency.ticker(),
                currencies.descr(),
            )
            .into());
        }

        let downpayment: LpnCoin = into_coin(form.downpayment, lpn)?;
        if downpayment.is_zero() {
            return Err(ContractError::InvalidAmount(form.downpayment.clone()));
        }

        let spec = Spec::try_from_dto(config.lease_position_spec(), lpn)?;
        spec.validate_downpayment(downpayment, lpn)?;

        let quote = oracle.lease_quote(form.currency)?;
        let borrow = spec.borrow_amount(downpayment, form.max_ltd)?;
        if borrow.is_zero() {
            return Err(ContractError::InvalidAmount(into_dto(borrow, lpn)));
        }

        let total = downpayment
            .checked_add(borrow)
            .ok_or_else(|| overflow(downpayment, borrow))?;
        let amount = to_asset(total, quote.exact())?;
        spec.validate_asset(amount, &quote, lpn)?;

        let loan = Loan::new(
            borrow,
            config.loan_annual_interest_rate(),
            config.lease_interest_rate_margin(),
            config.lease_interest_payment(),
            now,
        );
        let lease = Self {
            addr,
            customer,
            currency: form.currency.clone(),
            lpn: lpn.clone(),
            lpp: config.lpp().clone(),
            profit: config.profit().clone(),
            state: State::Opened {
                loan,
                position: Position::new(amount, spec),
                zone: Zone::no_warnings(spec.liability().first_liq_warn()),
            },
        };

        let batch = Batch::default()
            .schedule_send(&lease.customer, &lease.addr, form.downpayment.clone())
            .schedule_send(&lease.lpp, &lease.addr, into_dto(borrow, lpn))
            .merge(lease.buy(total, amount));

        let emitter = lease
            .emit_lease(Emitter::of_type(Type::Open), &now)
            .emit_percent_amount("air", config.loan_annual_interest_rate())
            .emit_percent_amount("margin-interest", config.lease_interest_rate_margin())
            .emit_coin_dto("downpayment", form.downpayment)
            .emit_coin("loan", borrow, lpn)
            .emit_coin("amount", amount, &lease.currency);

        let receipt = Receipt::Opened {
            downpayment: form.downpayment.clone(),
            loan: into_dto(borrow, lpn),
            amount: into_dto(amount, &lease.currency),
        };

        Ok((lease, LeaseResult::new(receipt, emitter, batch)))
    }

    fn buy(&self, lpn_amount: LpnCoin, amount: AssetCoin) -> Batch {
        Batch::default().schedule_swap(
            &self.addr,
            into_dto(lpn_amount, &self.lpn),
            into_dto(amount, &self.currency),
        )
    }
}
