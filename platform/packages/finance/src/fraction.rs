use crate::{fractionable::Fractionable, ratio::Ratio};

/// A fraction applied to `whole` returns a part of `whole`, rounded down.
///
/// Returns `None` if the result does not fit.
pub trait Fraction<U> {
    fn of<A>(&self, whole: A) -> Option<A>
    where
        A: Fractionable<U>;
}

impl<U, R> Fraction<U> for R
where
    R: Ratio<U>,
{
    fn of<A>(&self, whole: A) -> Option<A>
    where
        A: Fractionable<U>,
    {
        whole.safe_mul(self)
    }
}

#[cfg(test)]
mod test {
    use crate::{coin::Amount, fraction::Fraction, ratio::Rational};

    #[test]
    fn of() {
        assert_eq!(Some(3), Rational::<u32>::new(1, 3).of(10 as Amount));
        assert_eq!(Some(30), Rational::<u32>::new(3, 1).of(10 as Amount));
        assert_eq!(Some(0), Rational::<u32>::new(0, 5).of(10 as Amount));
    }

    #[test]
    fn of_overflow() {
        assert_eq!(None, Rational::<u32>::new(2, 1).of(Amount::MAX));
    }
}
