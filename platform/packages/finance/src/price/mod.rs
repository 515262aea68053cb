use std::{
    cmp::Ordering,
    fmt::{Debug, Formatter, Result as FmtResult},
};

use gcd::Gcd;

use crate::{
    coin::{Amount, Coin},
    error::{Error, Result},
    fractionable,
    percent::Percent,
};

pub use self::quote::PriceQuote;

mod quote;

pub fn total_of<C>(amount: Coin<C>) -> PriceBuilder<C> {
    PriceBuilder(amount)
}

pub struct PriceBuilder<C>(Coin<C>);

impl<C> PriceBuilder<C> {
    #[track_caller]
    pub fn is<QuoteC>(self, to: Coin<QuoteC>) -> Price<C, QuoteC> {
        Price::new(self.0, to)
    }
}

/// Represents the price of a currency in a quote currency, ref: <https://en.wikipedia.org/wiki/Currency_pair>
///
/// The price is always kept in a canonical form of the smallest integer coefficients.
pub struct Price<C, QuoteC> {
    amount: Coin<C>,
    amount_quote: Coin<QuoteC>,
}

impl<C, QuoteC> Price<C, QuoteC> {
    #[track_caller]
    fn new(amount: Coin<C>, amount_quote: Coin<QuoteC>) -> Self {
        debug_assert!(!amount.is_zero(), "The price amount should not be zero");
        debug_assert!(!amount_quote.is_zero(), "The price quote should not be zero");

        let factor = Amount::from(amount).gcd(Amount::from(amount_quote));
        Self {
            amount: Coin::new(Amount::from(amount) / factor),
            amount_quote: Coin::new(Amount::from(amount_quote) / factor),
        }
    }

    pub fn try_new(amount: Coin<C>, amount_quote: Coin<QuoteC>) -> Result<Self> {
        Error::broken_invariant_if::<Self>(amount.is_zero(), "The amount should not be zero")
            .and_then(|()| {
                Error::broken_invariant_if::<Self>(
                    amount_quote.is_zero(),
                    "The quote amount should not be zero",
                )
            })
            .map(|()| Self::new(amount, amount_quote))
    }

    pub const fn amount(&self) -> Coin<C> {
        self.amount
    }

    pub const fn amount_quote(&self) -> Coin<QuoteC> {
        self.amount_quote
    }

    pub fn inv(self) -> Price<QuoteC, C> {
        Price {
            amount: self.amount_quote,
            amount_quote: self.amount,
        }
    }

    /// Multiply the price by `factor`
    ///
    /// Return `None` if the coefficients of the result do not fit.
    pub fn scale(self, factor: Percent) -> Option<Self> {
        debug_assert!(!factor.is_zero());

        let factor_parts = Amount::from(factor.units());
        let factor_total = Amount::from(Percent::HUNDRED.units());
        let common = factor_parts.gcd(factor_total);

        Amount::from(self.amount)
            .checked_mul(factor_total / common)
            .zip(Amount::from(self.amount_quote).checked_mul(factor_parts / common))
            .map(|(amount, amount_quote)| Self::new(amount.into(), amount_quote.into()))
    }
}

impl<C, QuoteC> Price<C, QuoteC> {
    /// Chain this price with a price of its quote currency
    ///
    /// `C/QuoteC * QuoteC/QuoteQuoteC = C/QuoteQuoteC`. Return `None` if the coefficients of the
    /// result do not fit.
    pub fn checked_mul<QuoteQuoteC>(
        self,
        rhs: Price<QuoteC, QuoteQuoteC>,
    ) -> Option<Price<C, QuoteQuoteC>> {
        let amount = Amount::from(self.amount);
        let amount_quote = Amount::from(self.amount_quote);
        let rhs_amount = Amount::from(rhs.amount);
        let rhs_amount_quote = Amount::from(rhs.amount_quote);

        let quote_factor = amount_quote.gcd(rhs_amount);
        let amount_factor = amount.gcd(rhs_amount_quote);

        (amount / amount_factor)
            .checked_mul(rhs_amount / quote_factor)
            .zip((amount_quote / quote_factor).checked_mul(rhs_amount_quote / amount_factor))
            .map(|(amount, amount_quote)| Price::new(amount.into(), amount_quote.into()))
    }
}

impl<C> Price<C, C> {
    pub fn identity() -> Self {
        Self::new(Coin::new(1), Coin::new(1))
    }
}

/// Calculates the amount of given coins in another currency, referred here as `quote currency`
///
/// Rounds down. Returns `None` if the result does not fit.
pub fn total<C, QuoteC>(of: Coin<C>, price: Price<C, QuoteC>) -> Option<Coin<QuoteC>> {
    fractionable::checked_mul_div(
        of.into(),
        price.amount_quote.into(),
        price.amount.into(),
    )
    .map(Coin::new)
}

impl<C, QuoteC> Clone for Price<C, QuoteC> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, QuoteC> Copy for Price<C, QuoteC> {}

impl<C, QuoteC> Debug for Price<C, QuoteC> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Price")
            .field("amount", &self.amount)
            .field("amount_quote", &self.amount_quote)
            .finish()
    }
}

impl<C, QuoteC> PartialEq for Price<C, QuoteC> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.amount_quote == other.amount_quote
    }
}

impl<C, QuoteC> Eq for Price<C, QuoteC> {}

impl<C, QuoteC> PartialOrd for Price<C, QuoteC> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C, QuoteC> Ord for Price<C, QuoteC> {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b < c/d if and only if a * d < c * b, the products are taken with double width
        let lhs = fractionable::wide_product(self.amount_quote.into(), other.amount.into());
        let rhs = fractionable::wide_product(other.amount_quote.into(), self.amount.into());
        lhs.cmp(&rhs)
    }
}
