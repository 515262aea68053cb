use serde::Deserialize;

use finance::{coin::CoinDTO, duration::Duration, liability::Liability};

use crate::error::ContractError;

/// Brings invariant checking as a step in deserializing a PositionSpecDTO
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(super) struct PositionSpecDTO {
    liability: Liability,
    min_asset: CoinDTO,
    min_sell_asset: CoinDTO,
}

impl TryFrom<PositionSpecDTO> for super::PositionSpecDTO {
    type Error = ContractError;

    fn try_from(dto: PositionSpecDTO) -> Result<Self, Self::Error> {
        Self::try_new(dto.liability, dto.min_asset, dto.min_sell_asset)
    }
}

/// Brings invariant checking as a step in deserializing an InterestPaymentSpec
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(super) struct InterestPaymentSpec {
    due_period: Duration,
    grace_period: Duration,
}

impl TryFrom<InterestPaymentSpec> for super::InterestPaymentSpec {
    type Error = ContractError;

    fn try_from(dto: InterestPaymentSpec) -> Result<Self, Self::Error> {
        Self::try_new(dto.due_period, dto.grace_period)
    }
}
