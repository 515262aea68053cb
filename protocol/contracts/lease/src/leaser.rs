use std::collections::BTreeMap;

use currency::CurrencyDTO;
use finance::{coin::CoinDTO, price::Price};
use platform::bank::Bank;
use sdk::cosmwasm_std::{Addr, Event, Timestamp};

use crate::{
    api::{
        ExecuteMsg, LeaserConfig,
        query::{PriceDTO, PriceQuoteResponse, StatusResponse},
        receipt::Receipt,
    },
    error::{ContractError, ContractResult},
    finance::Asset,
    lease::{Lease, LeaseResult, OpenForm},
    oracle::PriceOracle,
};

/// The result of a successful command
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub receipt: Receipt,
    pub events: Vec<Event>,
}

/// Keeps leases and drives them through their lifecycle
///
/// A command is run against a copy of its lease. The copy replaces the lease only if the
/// transfers the command results in are executed by the bank.
pub struct Leaser<Oracle, B> {
    config: LeaserConfig,
    oracle: Oracle,
    bank: B,
    leases: BTreeMap<Addr, Lease>,
}

impl<Oracle, B> Leaser<Oracle, B>
where
    Oracle: PriceOracle,
    B: Bank,
{
    pub fn new(config: LeaserConfig, oracle: Oracle, bank: B) -> ContractResult<Self> {
        if config.lpn() != oracle.lpn() {
            return Err(ContractError::currency_mismatch(config.lpn(), oracle.lpn()));
        }

        Ok(Self {
            config,
            oracle,
            bank,
            leases: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &LeaserConfig {
        &self.config
    }

    pub fn oracle_mut(&mut self) -> &mut Oracle {
        &mut self.oracle
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    pub fn lease(&self, lease: &Addr) -> Option<&Lease> {
        self.leases.get(lease)
    }

    /// Run a command `issuer` submits against `lease`
    ///
    /// An `Open` creates the lease under the given address, the others expect it present.
    pub fn submit(
        &mut self,
        lease: &Addr,
        issuer: &Addr,
        msg: ExecuteMsg,
        now: Timestamp,
    ) -> ContractResult<Response> {
        let (updated, result) = match &msg {
            ExecuteMsg::Open {
                currency,
                downpayment,
                max_ltd,
            } => {
                if self.leases.contains_key(lease) {
                    return Err(ContractError::unsupported_operation(msg.name()));
                }
                Lease::open(
                    lease.clone(),
                    issuer.clone(),
                    OpenForm {
                        currency,
                        downpayment,
                        max_ltd: *max_ltd,
                    },
                    &self.config,
                    &self.oracle,
                    now,
                )?
            }
            ExecuteMsg::Repay(payment) => {
                self.with_lease(lease, |lease| lease.repay(issuer, payment, now))?
            }
            ExecuteMsg::ClosePosition(close) => self.with_lease(lease, |lease| {
                lease.close_position(issuer, close, &self.oracle, now)
            })?,
            ExecuteMsg::Close() => self.with_lease(lease, |lease| lease.close(issuer, now))?,
        };
        self.commit(updated, result)
    }

    /// Check `lease` against the current prices and time
    pub fn evaluate(&mut self, lease: &Addr, now: Timestamp) -> ContractResult<Response> {
        self.with_lease(lease, |lease| lease.evaluate(&self.oracle, now))
            .and_then(|(updated, result)| self.commit(updated, result))
    }

    pub fn query_status(&self, lease: &Addr, now: Timestamp) -> ContractResult<StatusResponse> {
        self.leases
            .get(lease)
            .ok_or_else(|| ContractError::lease_not_found(lease))
            .and_then(|lease| lease.state(now))
    }

    pub fn query_price(
        &self,
        base: &CurrencyDTO,
        quote: &CurrencyDTO,
    ) -> ContractResult<PriceQuoteResponse> {
        self.oracle.price(base, quote).map(|price| {
            let to_dto = |price: Price<Asset, Asset>| PriceDTO {
                amount: CoinDTO::from_coin(price.amount(), base.clone()),
                amount_quote: CoinDTO::from_coin(price.amount_quote(), quote.clone()),
            };
            PriceQuoteResponse {
                min: to_dto(price.min()),
                exact: to_dto(price.exact()),
                max: to_dto(price.max()),
            }
        })
    }

    fn with_lease<Cmd>(&self, lease: &Addr, cmd: Cmd) -> ContractResult<(Lease, LeaseResult)>
    where
        Cmd: FnOnce(&mut Lease) -> ContractResult<LeaseResult>,
    {
        let mut updated = self
            .leases
            .get(lease)
            .cloned()
            .ok_or_else(|| ContractError::lease_not_found(lease))?;
        cmd(&mut updated).map(|result| (updated, result))
    }

    fn commit(&mut self, lease: Lease, result: LeaseResult) -> ContractResult<Response> {
        self.bank.execute(result.batch)?;
        self.leases.insert(lease.addr().clone(), lease);
        Ok(Response {
            receipt: result.receipt,
            events: result.events,
        })
    }
}
