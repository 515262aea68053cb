use crate::{CurrencyDTO, Group, SymbolSlice};

pub const LPN: &SymbolSlice = "USDC";
pub const ASSET_A: &SymbolSlice = "OSMO";
pub const ASSET_B: &SymbolSlice = "ATOM";
pub const NOT_PRICED: &SymbolSlice = "WBTC";

pub const LEASE_GROUP: &SymbolSlice = "lease";

pub fn dto(ticker: &SymbolSlice) -> CurrencyDTO {
    CurrencyDTO::try_new(ticker).expect("valid test ticker")
}

pub fn lease_group() -> Group {
    Group::new(
        LEASE_GROUP,
        [ASSET_A, ASSET_B, NOT_PRICED].into_iter().map(dto),
    )
}
