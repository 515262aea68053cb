use std::collections::BTreeMap;

use currency::CurrencyDTO;
use finance::coin::{Amount, CoinDTO};
use sdk::cosmwasm_std::Addr;

use crate::{
    batch::{Batch, Transfer},
    error::{Error, Result},
};

pub trait BankView {
    fn balance(&self, account: &Addr, currency: &CurrencyDTO) -> Amount;
}

pub trait Bank
where
    Self: BankView,
{
    /// Execute all transfers or none of them
    fn execute(&mut self, batch: Batch) -> Result<()>;
}

/// An in-memory book of the account balances
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    balances: BTreeMap<(Addr, CurrencyDTO), Amount>,
}

impl Ledger {
    /// Credit funds coming from outside the ledger
    pub fn fund(&mut self, account: &Addr, amount: &CoinDTO) -> Result<()> {
        credit(&mut self.balances, account, amount)
    }
}

impl BankView for Ledger {
    fn balance(&self, account: &Addr, currency: &CurrencyDTO) -> Amount {
        self.balances
            .get(&(account.clone(), currency.clone()))
            .copied()
            .unwrap_or_default()
    }
}

impl Bank for Ledger {
    fn execute(&mut self, batch: Batch) -> Result<()> {
        let mut staged = self.balances.clone();
        batch
            .into_iter()
            .try_for_each(|transfer| apply(&mut staged, transfer))
            .map(|()| self.balances = staged)
    }
}

type Balances = BTreeMap<(Addr, CurrencyDTO), Amount>;

fn apply(balances: &mut Balances, transfer: Transfer) -> Result<()> {
    match transfer {
        Transfer::Send { from, to, amount } => {
            debit(balances, &from, &amount).and_then(|()| credit(balances, &to, &amount))
        }
        Transfer::Swap { account, sell, buy } => {
            debit(balances, &account, &sell).and_then(|()| credit(balances, &account, &buy))
        }
    }
}

fn debit(balances: &mut Balances, account: &Addr, amount: &CoinDTO) -> Result<()> {
    let key = (account.clone(), amount.currency().clone());
    let available = balances.get(&key).copied().unwrap_or_default();
    available
        .checked_sub(amount.amount())
        .ok_or_else(|| Error::InsufficientFunds {
            account: account.to_string(),
            ticker: amount.currency().ticker().into(),
            requested: amount.amount(),
            available,
        })
        .map(|left| {
            if left == 0 {
                balances.remove(&key);
            } else {
                balances.insert(key, left);
            }
        })
}

fn credit(balances: &mut Balances, account: &Addr, amount: &CoinDTO) -> Result<()> {
    let balance = balances
        .entry((account.clone(), amount.currency().clone()))
        .or_default();
    balance
        .checked_add(amount.amount())
        .ok_or_else(|| Error::BalanceOverflow {
            account: account.to_string(),
            ticker: amount.currency().ticker().into(),
        })
        .map(|total| *balance = total)
}
