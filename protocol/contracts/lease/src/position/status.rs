use finance::{liability::Zone, percent::Percent};

use crate::{api::receipt::Cause as CauseDTO, finance::AssetCoin};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum Cause {
    Overdue(),
    Liability { ltv: Percent, healthy_ltv: Percent },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum Liquidation {
    Partial { amount: AssetCoin, cause: Cause },
    Full(Cause),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Debt {
    No,
    /// Represent an open position with no immediate close required
    Ok {
        /// The position's debt results to an LTV% within the `liability` zone
        zone: Zone,
        ltv: Percent,
    },
    Bad(Liquidation),
}

impl From<Cause> for CauseDTO {
    fn from(cause: Cause) -> Self {
        match cause {
            Cause::Overdue() => Self::Overdue,
            Cause::Liability { .. } => Self::Liability,
        }
    }
}
