pub use crate::{dto::CurrencyDTO, group::Group};

mod dto;
pub mod error;
mod group;
#[cfg(any(test, feature = "testing"))]
pub mod test;

pub type SymbolSlice = str;
pub type SymbolOwned = String;
