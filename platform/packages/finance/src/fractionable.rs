use sdk::cosmwasm_std::{Uint128, Uint256};

use crate::{coin::Amount, ratio::Ratio};

/// A value that may be scaled by a ratio
pub trait Fractionable<U>
where
    Self: Sized,
{
    fn safe_mul<R>(self, ratio: &R) -> Option<Self>
    where
        R: Ratio<U>;
}

impl<U> Fractionable<U> for Amount
where
    U: Into<u128>,
{
    fn safe_mul<R>(self, ratio: &R) -> Option<Self>
    where
        R: Ratio<U>,
    {
        checked_mul_div(self, ratio.parts().into(), ratio.total().into())
    }
}

/// Compute `floor(value * parts / total)` with a double width product
///
/// Return `None` if `total` is zero or the result does not fit in an [`Amount`].
pub(crate) fn checked_mul_div(value: Amount, parts: Amount, total: Amount) -> Option<Amount> {
    wide_product(value, parts)
        .checked_div(total.into())
        .ok()
        .and_then(|quotient| Uint128::try_from(quotient).ok())
        .map(Amount::from)
}

/// The exact product of two amounts
///
/// It never overflows since `u128::MAX * u128::MAX < Uint256::MAX`.
pub(crate) fn wide_product(lhs: Amount, rhs: Amount) -> Uint256 {
    Uint256::from(lhs) * Uint256::from(rhs)
}

#[cfg(test)]
mod test {
    use sdk::cosmwasm_std::Uint256;

    use super::{checked_mul_div, wide_product};

    #[test]
    fn small() {
        assert_eq!(Some(0), checked_mul_div(0, 7, 3));
        assert_eq!(Some(4), checked_mul_div(2, 7, 3));
        assert_eq!(Some(14), checked_mul_div(2, 7, 1));
        assert_eq!(Some(1), checked_mul_div(999, 1, 999));
        assert_eq!(Some(0), checked_mul_div(998, 1, 999));
    }

    #[test]
    fn zero_total() {
        assert_eq!(None, checked_mul_div(10, 7, 0));
    }

    #[test]
    fn wide_intermediate() {
        assert_eq!(
            Some(u128::MAX),
            checked_mul_div(u128::MAX, u128::MAX, u128::MAX)
        );
        assert_eq!(
            Some(u128::MAX / 2),
            checked_mul_div(u128::MAX, 1 << 100, 1 << 101)
        );
        assert_eq!(Some(u128::MAX / 3), checked_mul_div(u128::MAX, 1000, 3000));
    }

    #[test]
    fn result_overflow() {
        assert_eq!(None, checked_mul_div(u128::MAX, 2, 1));
        assert_eq!(None, checked_mul_div(u128::MAX, 1001, 1000));
    }

    #[test]
    fn product() {
        assert_eq!(Uint256::from(6u8), wide_product(2, 3));
        assert_eq!(
            Uint256::from(u128::MAX) * Uint256::from(u128::MAX),
            wide_product(u128::MAX, u128::MAX)
        );
        assert!(wide_product(u128::MAX, 2) > Uint256::from(u128::MAX));
    }
}
