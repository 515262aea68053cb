use currency::CurrencyDTO;
use finance::{
    coin::{Coin, CoinDTO},
    error::Error as FinanceError,
    price::{self, Price, PriceQuote},
};

use crate::error::{ContractError, ContractResult};

/// The currency loans are denominated in
///
/// A marker type; the actual ticker is part of the configuration.
#[derive(Debug)]
pub enum Lpn {}

/// The currency of a lease position
///
/// A marker type; the actual ticker is kept with the lease.
#[derive(Debug)]
pub enum Asset {}

pub type LpnCoin = Coin<Lpn>;
pub type AssetCoin = Coin<Asset>;

/// The price of the LPN expressed in the lease currency
pub type LpnPrice = Price<Lpn, Asset>;

/// A quote of [`LpnPrice`] with its tolerance band
///
/// The higher the price, the lower the value of the position. The maximum is therefore the
/// conservative choice when valuing collateral.
pub type LpnQuote = PriceQuote<Lpn, Asset>;

/// The value of `amount` in LPN
pub(crate) fn to_lpn(amount: AssetCoin, price: LpnPrice) -> ContractResult<LpnCoin> {
    price::total(amount, price.inv())
        .ok_or_else(|| FinanceError::multiplication_overflow(amount, price.inv()).into())
}

/// The amount of the lease currency `amount` LPN would buy
pub(crate) fn to_asset(amount: LpnCoin, price: LpnPrice) -> ContractResult<AssetCoin> {
    price::total(amount, price)
        .ok_or_else(|| FinanceError::multiplication_overflow(amount, price).into())
}

pub(crate) fn overflow<L, R>(lhs: L, rhs: R) -> ContractError
where
    L: std::fmt::Debug,
    R: std::fmt::Debug,
{
    FinanceError::multiplication_overflow(lhs, rhs).into()
}

/// Obtain a typed coin of a dto, checking it is of the `expected` currency
pub(crate) fn into_coin<C>(coin: &CoinDTO, expected: &CurrencyDTO) -> ContractResult<Coin<C>> {
    coin.try_into_coin(expected)
        .map_err(|_| ContractError::currency_mismatch(expected, coin.currency()))
}

pub(crate) fn into_dto<C>(coin: Coin<C>, currency: &CurrencyDTO) -> CoinDTO {
    CoinDTO::from_coin(coin, currency.clone())
}
