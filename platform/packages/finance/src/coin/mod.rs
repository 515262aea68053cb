use std::{
    any,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use crate::{
    fractionable::{self, Fractionable},
    ratio::Ratio,
    zero::Zero,
};

pub use self::dto::CoinDTO;

mod dto;

pub type Amount = u128;

/// An amount of a currency known at compile time
///
/// The currency type parameter is a marker. It does not need to implement
/// any trait and it is never instantiated.
#[derive(Serialize, Deserialize)]
pub struct Coin<C> {
    #[serde(with = "dto::amount_serde")]
    amount: Amount,
    #[serde(skip)]
    currency: PhantomData<C>,
}

impl<C> Coin<C> {
    pub const fn new(amount: Amount) -> Self {
        Self {
            amount,
            currency: PhantomData,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.amount == Zero::ZERO
    }

    pub const fn amount(&self) -> Amount {
        self.amount
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.amount.checked_add(rhs.amount).map(Self::new)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.amount.checked_sub(rhs.amount).map(Self::new)
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::new(self.amount.saturating_sub(rhs.amount))
    }
}

impl<C> Add for Coin<C> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, rhs: Coin<C>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<C> AddAssign for Coin<C> {
    #[track_caller]
    fn add_assign(&mut self, rhs: Coin<C>) {
        self.amount += rhs.amount;
    }
}

impl<C> Clone for Coin<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Coin<C> {}

impl<C> Debug for Coin<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coin")
            .field("amount", &self.amount)
            .field("currency", &any::type_name::<C>())
            .finish()
    }
}

impl<C> Default for Coin<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C> Display for Coin<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} {}", self.amount, any::type_name::<C>()))
    }
}

impl<C> Eq for Coin<C> {}

impl<C, U> Fractionable<U> for Coin<C>
where
    U: Into<u128>,
{
    fn safe_mul<R>(self, ratio: &R) -> Option<Self>
    where
        R: Ratio<U>,
    {
        fractionable::checked_mul_div(self.amount, ratio.parts().into(), ratio.total().into())
            .map(Self::new)
    }
}

impl<C> From<Amount> for Coin<C> {
    fn from(amount: Amount) -> Self {
        Self::new(amount)
    }
}

impl<C> From<Coin<C>> for Amount {
    fn from(coin: Coin<C>) -> Self {
        coin.amount
    }
}

impl<C> Ord for Coin<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl<C> PartialEq for Coin<C> {
    fn eq(&self, other: &Self) -> bool {
        self.amount.eq(&other.amount)
    }
}

impl<C> PartialOrd for Coin<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Sub for Coin<C> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, rhs: Coin<C>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<C> SubAssign for Coin<C> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Coin<C>) {
        self.amount -= rhs.amount;
    }
}

impl<C> Sum for Coin<C> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<C> Zero for Coin<C> {
    const ZERO: Self = Self::new(Zero::ZERO);
}

#[cfg(test)]
mod test {
    use crate::{
        fraction::Fraction,
        percent::Percent,
        ratio::Rational,
        test::{Lpn, Nls},
        zero::Zero,
    };

    use super::Coin;

    #[test]
    fn add_sub() {
        assert_eq!(Coin::<Lpn>::new(7), Coin::new(3) + Coin::new(4));
        assert_eq!(Coin::<Lpn>::new(3), Coin::new(7) - Coin::new(4));
        assert_eq!(None, Coin::<Lpn>::new(3).checked_sub(Coin::new(4)));
        assert_eq!(Coin::<Lpn>::ZERO, Coin::new(3).saturating_sub(Coin::new(4)));
        assert_eq!(None, Coin::<Lpn>::new(u128::MAX).checked_add(Coin::new(1)));
    }

    #[test]
    fn sum() {
        assert_eq!(
            Coin::<Nls>::new(10),
            [1, 2, 3, 4].into_iter().map(Coin::<Nls>::new).sum()
        );
    }

    #[test]
    fn fraction() {
        assert_eq!(
            Some(Coin::<Lpn>::new(25)),
            Percent::from_percent(25).of(Coin::<Lpn>::new(100))
        );
        assert_eq!(
            Some(Coin::<Lpn>::new(33)),
            Rational::<u32>::new(1, 3).of(Coin::<Lpn>::new(100))
        );
    }

    #[test]
    fn display() {
        assert!(format!("{}", Coin::<Lpn>::new(12)).starts_with("12 "));
    }
}
