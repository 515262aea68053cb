use serde::{Deserialize, Serialize};

use crate::{SymbolOwned, error::Error};

use super::CurrencyDTO;

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub(super) struct TickerDTO(SymbolOwned);

impl TryFrom<TickerDTO> for CurrencyDTO {
    type Error = Error;

    fn try_from(dto: TickerDTO) -> Result<Self, Self::Error> {
        Self::try_new(dto.0)
    }
}

impl From<CurrencyDTO> for TickerDTO {
    fn from(dto: CurrencyDTO) -> Self {
        Self(dto.into())
    }
}
