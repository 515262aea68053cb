use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use sdk::schemars::{JsonSchema, r#gen::SchemaGenerator, schema::Schema};

use crate::{
    SymbolOwned, SymbolSlice,
    error::{Error, Result},
};

mod unchecked;

/// Data-Transferable currency identified by its ticker
///
/// This is a value type designed for efficient representation, data transfer and storage.
/// The ticker is validated on construction and deserialization.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "unchecked::TickerDTO", into = "unchecked::TickerDTO")]
pub struct CurrencyDTO {
    ticker: SymbolOwned,
}

impl CurrencyDTO {
    pub fn try_new<S>(ticker: S) -> Result<Self>
    where
        S: Into<SymbolOwned>,
    {
        let ticker = ticker.into();
        if ticker.is_empty() || ticker.chars().any(char::is_whitespace) {
            Err(Error::InvalidTicker(ticker))
        } else {
            Ok(Self { ticker })
        }
    }

    pub fn ticker(&self) -> &SymbolSlice {
        &self.ticker
    }

    pub fn is(&self, ticker: &SymbolSlice) -> bool {
        self.ticker == ticker
    }

    /// Check that `found` denotes this very currency
    pub fn of_currency(&self, found: &Self) -> Result<()> {
        if self == found {
            Ok(())
        } else {
            Err(Error::currency_mismatch(
                self.ticker.clone(),
                found.ticker.clone(),
            ))
        }
    }
}

impl Display for CurrencyDTO {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.ticker)
    }
}

impl From<CurrencyDTO> for SymbolOwned {
    fn from(dto: CurrencyDTO) -> Self {
        dto.ticker
    }
}

impl JsonSchema for CurrencyDTO {
    fn schema_name() -> String {
        "CurrencyDTO".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}
