use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    error::{Error, Result},
    percent::Percent,
};

use super::Price;

/// A price observation widened by the allowed deviation of its feed
///
/// Invariant: `min <= exact <= max`.
pub struct PriceQuote<C, QuoteC> {
    min: Price<C, QuoteC>,
    exact: Price<C, QuoteC>,
    max: Price<C, QuoteC>,
}

impl<C, QuoteC> PriceQuote<C, QuoteC> {
    /// Build a quote `exact * (100% - tolerance) <= exact <= exact * (100% + tolerance)`
    pub fn with_tolerance(exact: Price<C, QuoteC>, tolerance: Percent) -> Result<Self> {
        Error::broken_invariant_if::<Self>(
            tolerance >= Percent::HUNDRED,
            "The price tolerance should be less than 100%",
        )?;

        let scale = |factor| {
            exact
                .scale(factor)
                .ok_or_else(|| Error::multiplication_overflow(exact, factor))
        };
        let min = scale(Percent::HUNDRED - tolerance)?;
        let max = scale(Percent::HUNDRED + tolerance)?;

        debug_assert!(min <= exact && exact <= max);
        Ok(Self { min, exact, max })
    }

    pub fn exact_only(exact: Price<C, QuoteC>) -> Self {
        Self {
            min: exact,
            exact,
            max: exact,
        }
    }

    /// The lowest price within the tolerance band
    pub fn min(&self) -> Price<C, QuoteC> {
        self.min
    }

    pub fn exact(&self) -> Price<C, QuoteC> {
        self.exact
    }

    /// The highest price within the tolerance band
    pub fn max(&self) -> Price<C, QuoteC> {
        self.max
    }
}

impl<C, QuoteC> Clone for PriceQuote<C, QuoteC> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, QuoteC> Copy for PriceQuote<C, QuoteC> {}

impl<C, QuoteC> Debug for PriceQuote<C, QuoteC> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PriceQuote")
            .field("min", &self.min)
            .field("exact", &self.exact)
            .field("max", &self.max)
            .finish()
    }
}

impl<C, QuoteC> PartialEq for PriceQuote<C, QuoteC> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.exact == other.exact && self.max == other.max
    }
}

impl<C, QuoteC> Eq for PriceQuote<C, QuoteC> {}
