use crate::{
    duration::Duration, fraction::Fraction, fractionable::Fractionable, percent::Percent,
    ratio::Rational,
};

/// Computes how much interest is accrued
///
/// Simple, non-compounding interest `principal * rate * period / (100% * year)`,
/// rounded down once, to the smallest unit.
pub fn interest<P>(annual_rate: Percent, principal: P, period: Duration) -> Option<P>
where
    P: Fractionable<u128>,
{
    let slice = Rational::new(
        u128::from(annual_rate.units()) * u128::from(period.nanos()),
        u128::from(Percent::HUNDRED.units()) * u128::from(Duration::YEAR.nanos()),
    );
    slice.of(principal)
}
