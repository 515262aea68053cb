use serde::Deserialize;

use crate::{error::Error, percent::Percent};

use super::Liability as ValidatedLiability;

/// Brings invariant checking as a step in deserializing a Liability
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(super) struct Liability {
    initial: Percent,
    healthy: Percent,
    first_liq_warn: Percent,
    second_liq_warn: Percent,
    third_liq_warn: Percent,
    max: Percent,
}

impl TryFrom<Liability> for ValidatedLiability {
    type Error = Error;

    fn try_from(dto: Liability) -> Result<Self, Self::Error> {
        let res = Self {
            initial: dto.initial,
            healthy: dto.healthy,
            first_liq_warn: dto.first_liq_warn,
            second_liq_warn: dto.second_liq_warn,
            third_liq_warn: dto.third_liq_warn,
            max: dto.max,
        };
        res.invariant_held().map(|()| res)
    }
}
