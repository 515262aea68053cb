#![allow(dead_code)]

use currency::{CurrencyDTO, test as currencies};
use finance::{
    coin::{Amount, CoinDTO},
    duration::Duration,
    liability::Liability,
    percent::Percent,
};
use lease::{
    api::{
        ExecuteMsg, InterestPaymentSpec, LeaserConfig, PositionSpecDTO, query::StatusResponse,
    },
    leaser::{Leaser, Response},
    oracle::FeedOracle,
};
use platform::bank::{BankView, Ledger};
use sdk::cosmwasm_std::{Addr, Timestamp};

pub const START: Timestamp = Timestamp::from_seconds(1_700_000_000);

pub const CUSTOMER_FUNDS: Amount = 1_000;
pub const LPP_FUNDS: Amount = 10_000;
pub const DOWNPAYMENT: Amount = 100;
pub const LOAN: Amount = 185;
pub const LEASE_AMOUNT: Amount = 570;

pub type TestLeaser = Leaser<FeedOracle, Ledger>;

pub fn at(days: u16) -> Timestamp {
    START + Duration::from_days(days)
}

pub fn lease_addr() -> Addr {
    Addr::unchecked("lease1")
}

pub fn customer() -> Addr {
    Addr::unchecked("customer")
}

pub fn lpp() -> Addr {
    Addr::unchecked("lpp")
}

pub fn profit() -> Addr {
    Addr::unchecked("profit")
}

pub fn lpn() -> CurrencyDTO {
    currencies::dto(currencies::LPN)
}

pub fn asset() -> CurrencyDTO {
    currencies::dto(currencies::ASSET_A)
}

pub fn lpn_coin(amount: Amount) -> CoinDTO {
    CoinDTO::new(amount, lpn())
}

pub fn asset_coin(amount: Amount) -> CoinDTO {
    CoinDTO::new(amount, asset())
}

pub fn config() -> LeaserConfig {
    LeaserConfig::try_new(
        lpn(),
        currencies::lease_group(),
        lpp(),
        profit(),
        Percent::from_percent(10),
        Percent::from_percent(3),
        PositionSpecDTO::try_new(
            Liability::new(
                Percent::from_percent(65),
                Percent::from_percent(70),
                Percent::from_percent(73),
                Percent::from_percent(75),
                Percent::from_percent(78),
                Percent::from_percent(80),
            ),
            lpn_coin(50),
            lpn_coin(10),
        )
        .unwrap(),
        InterestPaymentSpec::try_new(Duration::from_days(100), Duration::from_days(10)).unwrap(),
    )
    .unwrap()
}

/// 1 LPN buys 2 units of [`currencies::ASSET_A`], 1 unit of [`currencies::ASSET_B`] costs 5 LPN
pub fn oracle() -> FeedOracle {
    let mut oracle = FeedOracle::new(lpn(), Percent::ZERO).unwrap();
    oracle.feed(asset(), 2, 1).unwrap();
    oracle
        .feed(currencies::dto(currencies::ASSET_B), 1, 5)
        .unwrap();
    oracle
}

pub fn leaser() -> TestLeaser {
    let mut bank = Ledger::default();
    bank.fund(&customer(), &lpn_coin(CUSTOMER_FUNDS)).unwrap();
    bank.fund(&lpp(), &lpn_coin(LPP_FUNDS)).unwrap();
    Leaser::new(config(), oracle(), bank).unwrap()
}

pub fn open_msg(downpayment: Amount) -> ExecuteMsg {
    ExecuteMsg::Open {
        currency: asset(),
        downpayment: lpn_coin(downpayment),
        max_ltd: None,
    }
}

/// A leaser with a lease opened by [`customer`] at [`START`]
#[track_caller]
pub fn opened() -> TestLeaser {
    let mut leaser = leaser();
    leaser
        .submit(&lease_addr(), &customer(), open_msg(DOWNPAYMENT), START)
        .unwrap();
    leaser
}

#[track_caller]
pub fn submit(leaser: &mut TestLeaser, issuer: &Addr, msg: ExecuteMsg, now: Timestamp) -> Response {
    leaser.submit(&lease_addr(), issuer, msg, now).unwrap()
}

#[track_caller]
pub fn feed_price(leaser: &mut TestLeaser, amount: Amount, amount_quote: Amount) {
    leaser
        .oracle_mut()
        .feed(asset(), amount, amount_quote)
        .unwrap();
}

#[track_caller]
pub fn status(leaser: &TestLeaser, now: Timestamp) -> StatusResponse {
    leaser.query_status(&lease_addr(), now).unwrap()
}

#[track_caller]
pub fn principal_due(leaser: &TestLeaser, now: Timestamp) -> CoinDTO {
    match status(leaser, now) {
        StatusResponse::Opened { principal_due, .. } => principal_due,
        other => panic!("the lease should be open, found {other:?}"),
    }
}

#[track_caller]
pub fn position(leaser: &TestLeaser, now: Timestamp) -> CoinDTO {
    match status(leaser, now) {
        StatusResponse::Opened { amount, .. } => amount,
        other => panic!("the lease should be open, found {other:?}"),
    }
}

pub fn balance(leaser: &TestLeaser, account: &Addr, currency: &CurrencyDTO) -> Amount {
    leaser.bank().balance(account, currency)
}
