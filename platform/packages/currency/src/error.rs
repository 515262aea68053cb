use thiserror::Error;

use crate::{SymbolOwned, SymbolSlice};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Currency] Found an invalid ticker '{0}'")]
    InvalidTicker(SymbolOwned),

    #[error(
        "[Currency] Found a symbol '{0}' pretending to be ticker of a currency pertaining to the {1} group"
    )]
    NotInCurrencyGroup(SymbolOwned, String),

    #[error("[Currency] Expected currency {expected}, found {found}")]
    CurrencyMismatch {
        expected: SymbolOwned,
        found: SymbolOwned,
    },
}

impl Error {
    pub fn not_in_currency_group<S>(symbol: S, group: &SymbolSlice) -> Self
    where
        S: Into<SymbolOwned>,
    {
        Self::NotInCurrencyGroup(symbol.into(), group.into())
    }

    pub fn currency_mismatch<E, F>(expected: E, found: F) -> Self
    where
        E: Into<SymbolOwned>,
        F: Into<SymbolOwned>,
    {
        Self::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
