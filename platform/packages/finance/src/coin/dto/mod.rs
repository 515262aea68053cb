use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use currency::CurrencyDTO;
use sdk::schemars::{self, JsonSchema};

use crate::{coin::Amount, error::Result};

use super::Coin;

pub(super) mod amount_serde;

/// A type designed to be used in the incoming messages, the responses,
/// and everywhere the exact currency is unknown at compile time.
///
/// This is a non-currency-parameterized version of finance::coin::Coin<C> that
/// carries also the currency ticker.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct CoinDTO {
    #[serde(with = "amount_serde")]
    #[schemars(with = "String")]
    amount: Amount,
    #[serde(rename = "ticker")] // it is more descriptive on the wire than currency
    currency: CurrencyDTO,
}

impl CoinDTO {
    pub const fn new(amount: Amount, currency: CurrencyDTO) -> Self {
        Self { amount, currency }
    }

    // pre-condition: the dto represents the C
    pub fn from_coin<C>(coin: Coin<C>, currency: CurrencyDTO) -> Self {
        Self::new(coin.amount(), currency)
    }

    pub const fn amount(&self) -> Amount {
        self.amount
    }

    pub const fn currency(&self) -> &CurrencyDTO {
        &self.currency
    }

    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Obtain the typed coin provided this dto is of the `expected` currency
    pub fn try_into_coin<C>(&self, expected: &CurrencyDTO) -> Result<Coin<C>> {
        expected
            .of_currency(&self.currency)
            .map(|()| Coin::new(self.amount))
            .map_err(Into::into)
    }
}

impl Display for CoinDTO {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_fmt(format_args!("{} {}", self.amount, self.currency))
    }
}
