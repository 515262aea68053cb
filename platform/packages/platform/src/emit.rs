use currency::{CurrencyDTO, SymbolSlice};
use finance::{
    coin::{Amount, Coin, CoinDTO},
    percent::Percent,
};
use sdk::cosmwasm_std::{Event, Timestamp};

pub trait Emit
where
    Self: Sized,
{
    fn emit<K, V>(self, event_key: K, event_value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>;

    /// Specialization of [`emit`](Self::emit) for [`Timestamp`].
    fn emit_timestamp<K>(self, event_key: K, timestamp: &Timestamp) -> Self
    where
        K: Into<String>,
    {
        self.emit_to_string_value(event_key, timestamp.nanos())
    }

    /// Specialization of [`emit`](Self::emit) for values implementing [`ToString`].
    fn emit_to_string_value<K, V>(self, event_key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.emit(event_key, value.to_string())
    }

    /// Specialization of [`emit`](Self::emit) for [`Coin`]'s amount.
    fn emit_coin_amount<K, A>(self, event_key: K, coin_amount: A) -> Self
    where
        K: Into<String>,
        A: Into<Amount>,
    {
        self.emit_to_string_value(event_key, coin_amount.into())
    }

    /// Specialization of [`emit`](Self::emit) for a currency ticker.
    fn emit_currency_symbol<K>(self, event_key: K, currency_symbol: &SymbolSlice) -> Self
    where
        K: Into<String>,
    {
        self.emit(event_key, currency_symbol)
    }

    /// Specialization of [`emit`](Self::emit) for [`Percent`]'s amount in [`Units`](finance::percent::Units).
    fn emit_percent_amount<K>(self, event_key: K, percent: Percent) -> Self
    where
        K: Into<String>,
    {
        self.emit_to_string_value(event_key, percent.units())
    }

    fn emit_coin<K, C>(self, event_key: K, coin: Coin<C>, currency: &CurrencyDTO) -> Self
    where
        K: Into<String>,
    {
        emit_coinable(self, event_key, coin.into(), currency.ticker())
    }

    fn emit_coin_dto<K>(self, event_key: K, coin: &CoinDTO) -> Self
    where
        K: Into<String>,
    {
        emit_coinable(self, event_key, coin.amount(), coin.currency().ticker())
    }
}

#[derive(Debug)]
pub struct Emitter {
    event: Event,
}

impl Emitter {
    pub fn of_type<T>(event_type: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            event: Event::new(event_type.into()),
        }
    }
}

impl From<Emitter> for Event {
    fn from(emitter: Emitter) -> Self {
        emitter.event
    }
}

impl Emit for Emitter {
    fn emit<K, V>(mut self, event_key: K, event_value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.event = self.event.add_attribute(event_key, event_value);

        self
    }
}

fn emit_coinable<E, K>(emitter: E, event_key: K, amount: Amount, ticker: &SymbolSlice) -> E
where
    E: Emit,
    K: Into<String>,
{
    let key = event_key.into();
    let amount_key = key.clone() + "-amount";
    let symbol_key = key + "-symbol";

    emitter
        .emit_coin_amount(amount_key, amount)
        .emit_currency_symbol(symbol_key, ticker)
}

#[cfg(test)]
mod test {
    use currency::test as currencies;
    use finance::{
        coin::{Coin, CoinDTO},
        percent::Percent,
        test::Lpn,
    };
    use sdk::cosmwasm_std::{Event, Timestamp};

    use super::{Emit, Emitter};

    #[test]
    fn attributes() {
        let event: Event = Emitter::of_type("ls-test")
            .emit("id", "lease1")
            .emit_timestamp("at", &Timestamp::from_seconds(2))
            .emit_percent_amount("ltv", Percent::from_permille(735))
            .into();

        assert_eq!(
            Event::new("ls-test")
                .add_attribute("id", "lease1")
                .add_attribute("at", "2000000000")
                .add_attribute("ltv", "735"),
            event
        );
    }

    #[test]
    fn coins() {
        let lpn = currencies::dto(currencies::LPN);
        let event: Event = Emitter::of_type("ls-test")
            .emit_coin("payment", Coin::<Lpn>::new(25), &lpn)
            .emit_coin_dto("amount", &CoinDTO::new(7, currencies::dto(currencies::ASSET_A)))
            .into();

        assert_eq!(
            Event::new("ls-test")
                .add_attribute("payment-amount", "25")
                .add_attribute("payment-symbol", "USDC")
                .add_attribute("amount-amount", "7")
                .add_attribute("amount-symbol", "OSMO"),
            event
        );
    }
}
