use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

use crate::{
    CurrencyDTO, SymbolSlice,
    error::{Error, Result},
};

/// A named set of currencies
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Group {
    descr: String,
    members: BTreeSet<CurrencyDTO>,
}

impl Group {
    pub fn new<Members>(descr: &str, members: Members) -> Self
    where
        Members: IntoIterator<Item = CurrencyDTO>,
    {
        Self {
            descr: descr.into(),
            members: members.into_iter().collect(),
        }
    }

    pub fn descr(&self) -> &str {
        &self.descr
    }

    pub fn contains(&self, currency: &CurrencyDTO) -> bool {
        self.members.contains(currency)
    }

    /// Resolve a ticker to a member of this group
    pub fn find(&self, ticker: &SymbolSlice) -> Result<CurrencyDTO> {
        self.members
            .iter()
            .find(|member| member.is(ticker))
            .cloned()
            .ok_or_else(|| Error::not_in_currency_group(ticker, &self.descr))
    }

    pub fn members(&self) -> impl Iterator<Item = &CurrencyDTO> {
        self.members.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        error::Error,
        test::{self, ASSET_A, ASSET_B, LPN},
    };

    #[test]
    fn find() {
        let group = test::lease_group();

        assert!(group.find(ASSET_A).unwrap().is(ASSET_A));
        assert!(group.find(ASSET_B).unwrap().is(ASSET_B));
        assert_eq!(
            Err(Error::not_in_currency_group(LPN, group.descr())),
            group.find(LPN)
        );
    }

    #[test]
    fn contains() {
        let group = test::lease_group();

        assert!(group.contains(&test::dto(ASSET_A)));
        assert!(!group.contains(&test::dto(LPN)));
    }
}
