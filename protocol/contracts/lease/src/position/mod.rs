use serde::{Deserialize, Serialize};

use currency::CurrencyDTO;

use crate::{
    error::ContractResult,
    finance::{AssetCoin, LpnQuote},
    loan::State as DueState,
};

pub(crate) use self::{
    spec::Spec,
    status::{Cause, Debt, Liquidation},
};

mod spec;
mod status;

/// The lease collateral held within the limits of its spec
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(crate) struct Position {
    amount: AssetCoin,
    spec: Spec,
}

impl Position {
    pub fn new(amount: AssetCoin, spec: Spec) -> Self {
        debug_assert!(!amount.is_zero());
        Self { amount, spec }
    }

    pub fn amount(&self) -> AssetCoin {
        self.amount
    }

    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    pub fn debt(&self, due: &DueState, quote: &LpnQuote) -> ContractResult<Debt> {
        self.spec.debt(self.amount, due, quote)
    }

    pub fn validate_close(
        &self,
        amount: AssetCoin,
        quote: &LpnQuote,
        lpn: &CurrencyDTO,
    ) -> ContractResult<()> {
        self.spec.validate_close(self.amount, amount, quote, lpn)
    }

    /// Take out `amount`, the rest stays
    pub fn close(&mut self, amount: AssetCoin) {
        debug_assert!(amount < self.amount, "A partial close of the whole position!");
        self.amount -= amount;
    }
}

#[cfg(test)]
mod test {
    use finance::coin::Coin;

    use super::{Position, spec::test as spec_test};

    #[test]
    fn close() {
        let mut position = Position::new(Coin::new(570), spec_test::spec());
        position.close(Coin::new(20));
        assert_eq!(Coin::new(550), position.amount());
        assert_eq!(
            Ok(()),
            position.validate_close(Coin::new(20), &spec_test::exact_quote(), &spec_test::lpn())
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = "A partial close of the whole position!"]
    fn close_all() {
        let mut position = Position::new(Coin::new(570), spec_test::spec());
        position.close(Coin::new(570));
    }
}
