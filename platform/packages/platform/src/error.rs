use thiserror::Error;

use currency::{SymbolOwned, error::Error as CurrencyError};
use finance::{coin::Amount, duration::Duration, error::Error as FinanceError};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error(
        "[Platform] Insufficient funds at '{account}', requested {requested} {ticker} but {available} {ticker} available"
    )]
    InsufficientFunds {
        account: String,
        ticker: SymbolOwned,
        requested: Amount,
        available: Amount,
    },

    #[error("[Platform] The balance of {ticker} at '{account}' would overflow")]
    BalanceOverflow { account: String, ticker: SymbolOwned },

    #[error("[Platform] The condition has not been met within {0}")]
    Timeout(Duration),

    #[error("[Platform] {0}")]
    Currency(#[from] CurrencyError),

    #[error("[Platform] {0}")]
    Finance(#[from] FinanceError),
}

pub type Result<T> = core::result::Result<T, Error>;
