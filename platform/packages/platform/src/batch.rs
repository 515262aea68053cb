use std::vec;

use finance::coin::CoinDTO;
use sdk::cosmwasm_std::Addr;

pub use crate::emit::{Emit, Emitter};

/// A movement of funds scheduled for execution against a [`Bank`](crate::bank::Bank)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    Send {
        from: Addr,
        to: Addr,
        amount: CoinDTO,
    },
    /// An exchange of funds of an account with a market outside the bank
    Swap {
        account: Addr,
        sell: CoinDTO,
        buy: CoinDTO,
    },
}

/// An ordered list of transfers executed all or none
#[must_use]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Batch {
    transfers: Vec<Transfer>,
}

impl Batch {
    /// Zero amounts are not scheduled
    pub fn schedule_send(mut self, from: &Addr, to: &Addr, amount: CoinDTO) -> Self {
        if !amount.is_zero() {
            self.transfers.push(Transfer::Send {
                from: from.clone(),
                to: to.clone(),
                amount,
            });
        }
        self
    }

    pub fn schedule_swap(mut self, account: &Addr, sell: CoinDTO, buy: CoinDTO) -> Self {
        debug_assert!(sell.currency() != buy.currency());

        if !sell.is_zero() {
            self.transfers.push(Transfer::Swap {
                account: account.clone(),
                sell,
                buy,
            });
        }
        self
    }

    pub fn merge(mut self, mut other: Self) -> Self {
        self.transfers.append(&mut other.transfers);
        self
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}

impl IntoIterator for Batch {
    type Item = Transfer;

    type IntoIter = vec::IntoIter<Transfer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.into_iter()
    }
}

#[cfg(test)]
mod test {
    use currency::test as currencies;
    use finance::coin::CoinDTO;
    use sdk::cosmwasm_std::Addr;

    use super::{Batch, Transfer};

    #[test]
    fn skip_zero() {
        let from = Addr::unchecked("from");
        let to = Addr::unchecked("to");
        let lpn = currencies::dto(currencies::LPN);

        let batch = Batch::default()
            .schedule_send(&from, &to, CoinDTO::new(0, lpn.clone()))
            .schedule_swap(
                &from,
                CoinDTO::new(0, lpn.clone()),
                CoinDTO::new(10, currencies::dto(currencies::ASSET_A)),
            );
        assert!(batch.is_empty());

        let batch = batch.schedule_send(&from, &to, CoinDTO::new(3, lpn.clone()));
        assert_eq!(1, batch.len());
        assert_eq!(
            vec![Transfer::Send {
                from,
                to,
                amount: CoinDTO::new(3, lpn)
            }],
            batch.into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn merge_keeps_order() {
        let a = Addr::unchecked("a");
        let b = Addr::unchecked("b");
        let lpn = currencies::dto(currencies::LPN);

        let first = Batch::default().schedule_send(&a, &b, CoinDTO::new(1, lpn.clone()));
        let second = Batch::default().schedule_send(&b, &a, CoinDTO::new(2, lpn.clone()));
        let amounts: Vec<_> = first
            .merge(second)
            .into_iter()
            .map(|transfer| match transfer {
                Transfer::Send { amount, .. } => amount.amount(),
                Transfer::Swap { sell, .. } => sell.amount(),
            })
            .collect();
        assert_eq!(vec![1, 2], amounts);
    }
}
