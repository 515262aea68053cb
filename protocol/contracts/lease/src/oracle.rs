use std::collections::BTreeMap;

use currency::CurrencyDTO;
use finance::{
    coin::{Amount, Coin},
    percent::Percent,
    price::{Price, PriceQuote},
};

use crate::{
    error::{ContractError, ContractResult},
    finance::{Asset, Lpn, LpnQuote, overflow},
};

/// A source of current prices in the LPN
pub trait PriceOracle {
    fn lpn(&self) -> &CurrencyDTO;

    /// The exact price of `currency` in the LPN
    ///
    /// Fail with [`ContractError::UnsupportedCurrency`] if there is no price feed of it.
    fn price_of(&self, currency: &CurrencyDTO) -> ContractResult<Price<Asset, Lpn>>;

    /// The allowed deviation from the exact prices
    fn tolerance(&self) -> Percent;

    /// The price of the LPN in `currency` with its tolerance band
    fn lease_quote(&self, currency: &CurrencyDTO) -> ContractResult<LpnQuote> {
        self.price_of(currency).and_then(|price| {
            PriceQuote::with_tolerance(price.inv(), self.tolerance()).map_err(Into::into)
        })
    }

    /// The price of `base` in `quote` with its tolerance band
    fn price(
        &self,
        base: &CurrencyDTO,
        quote: &CurrencyDTO,
    ) -> ContractResult<PriceQuote<Asset, Asset>> {
        let base_in_lpn = self.price_of(base)?;
        let lpn_in_quote = self.price_of(quote)?.inv();
        base_in_lpn
            .checked_mul(lpn_in_quote)
            .ok_or_else(|| overflow(base_in_lpn, lpn_in_quote))
            .and_then(|exact| {
                PriceQuote::with_tolerance(exact, self.tolerance()).map_err(Into::into)
            })
    }
}

/// An oracle serving the last fed prices
#[derive(Clone, Debug)]
pub struct FeedOracle {
    lpn: CurrencyDTO,
    tolerance: Percent,
    feeds: BTreeMap<CurrencyDTO, Price<Asset, Lpn>>,
}

impl FeedOracle {
    pub fn new(lpn: CurrencyDTO, tolerance: Percent) -> ContractResult<Self> {
        ContractError::broken_invariant_if::<Self>(
            tolerance >= Percent::HUNDRED,
            "The price tolerance should be less than 100%",
        )
        .map(|()| Self {
            lpn,
            tolerance,
            feeds: BTreeMap::new(),
        })
    }

    /// Set the price of `currency` to `amount_quote` LPN per `amount`
    pub fn feed(
        &mut self,
        currency: CurrencyDTO,
        amount: Amount,
        amount_quote: Amount,
    ) -> ContractResult<()> {
        ContractError::broken_invariant_if::<Self>(
            currency == self.lpn,
            "The LPN price is fixed",
        )?;

        Price::try_new(Coin::new(amount), Coin::new(amount_quote))
            .map(|price| {
                self.feeds.insert(currency, price);
            })
            .map_err(Into::into)
    }

    pub fn remove(&mut self, currency: &CurrencyDTO) {
        self.feeds.remove(currency);
    }
}

impl PriceOracle for FeedOracle {
    fn lpn(&self) -> &CurrencyDTO {
        &self.lpn
    }

    fn price_of(&self, currency: &CurrencyDTO) -> ContractResult<Price<Asset, Lpn>> {
        if currency == &self.lpn {
            Price::try_new(Coin::new(1), Coin::new(1)).map_err(Into::into)
        } else {
            self.feeds
                .get(currency)
                .copied()
                .ok_or_else(|| ContractError::unsupported_currency(currency))
        }
    }

    fn tolerance(&self) -> Percent {
        self.tolerance
    }
}
