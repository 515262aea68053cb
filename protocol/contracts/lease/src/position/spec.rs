use serde::{Deserialize, Serialize};

use currency::CurrencyDTO;
use finance::{
    liability::Liability,
    percent::{Percent, Units},
    zero::Zero,
};

use crate::{
    api::PositionSpecDTO,
    error::{ContractError, ContractResult},
    finance::{AssetCoin, LpnCoin, LpnQuote, into_coin, into_dto, overflow, to_asset, to_lpn},
    loan::State as DueState,
};

use super::status::{Cause, Debt, Liquidation};

/// The limits a position is kept within
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(crate) struct Spec {
    liability: Liability,
    min_asset: LpnCoin,
    min_sell_asset: LpnCoin,
}

impl Spec {
    pub fn try_from_dto(spec: &PositionSpecDTO, lpn: &CurrencyDTO) -> ContractResult<Self> {
        into_coin(spec.min_asset(), lpn)
            .and_then(|min_asset| {
                into_coin(spec.min_sell_asset(), lpn)
                    .map(|min_sell_asset| (min_asset, min_sell_asset))
            })
            .map(|(min_asset, min_sell_asset)| Self {
                liability: *spec.liability(),
                min_asset,
                min_sell_asset,
            })
    }

    pub const fn liability(&self) -> &Liability {
        &self.liability
    }

    /// Compute how much to lend against a downpayment
    pub fn borrow_amount(
        &self,
        downpayment: LpnCoin,
        max_ltd: Option<Percent>,
    ) -> ContractResult<LpnCoin> {
        self.liability
            .init_borrow_amount(downpayment, max_ltd)
            .ok_or_else(|| overflow(downpayment, self.liability))
    }

    pub fn validate_downpayment(
        &self,
        downpayment: LpnCoin,
        lpn: &CurrencyDTO,
    ) -> ContractResult<()> {
        self.validate_sell_amount(downpayment, lpn)
    }

    /// Check a new position is worth enough
    pub fn validate_asset(
        &self,
        asset: AssetCoin,
        quote: &LpnQuote,
        lpn: &CurrencyDTO,
    ) -> ContractResult<()> {
        to_lpn(asset, quote.max()).and_then(|worth| self.validate_worth(worth, lpn))
    }

    /// Check whether `close_amount` of `asset` may be sold
    ///
    /// The amount is valued at the lowest price of the LPN so it must be worth at least the
    /// minimum sell asset even then. The rest is valued at the highest price of the LPN and must
    /// stay worth at least the minimum asset. A close of all or more than the position is not
    /// a partial one.
    pub fn validate_close(
        &self,
        asset: AssetCoin,
        close_amount: AssetCoin,
        quote: &LpnQuote,
        lpn: &CurrencyDTO,
    ) -> ContractResult<()> {
        if close_amount >= asset {
            return self.validate_worth(LpnCoin::ZERO, lpn);
        }

        to_lpn(close_amount, quote.min())
            .and_then(|worth| self.validate_sell_amount(worth, lpn))
            .and_then(|()| to_lpn(asset - close_amount, quote.max()))
            .and_then(|worth| self.validate_worth(worth, lpn))
    }

    /// Determine the debt status of a position
    pub fn debt(&self, asset: AssetCoin, due: &DueState, quote: &LpnQuote) -> ContractResult<Debt> {
        let total_due = due.total_due();
        if total_due.is_zero() {
            return Ok(Debt::No);
        }

        let asset_in_lpn = to_lpn(asset, quote.max())?;
        let ltv = Self::ltv(total_due, asset_in_lpn);

        let liability = if ltv < self.liability.max() {
            None
        } else {
            self.may_ask_liquidation_liability(asset, asset_in_lpn, total_due, ltv, quote)
                .map(Some)?
        };
        let overdue = if due.overdue_collectable() {
            self.may_liquidate(asset, due.overdue(), Cause::Overdue(), quote)
                .map(Some)?
        } else {
            None
        };

        Ok(liability.max(overdue).map(Debt::Bad).unwrap_or_else(|| Debt::Ok {
            zone: self.liability.zone_of(ltv),
            ltv,
        }))
    }

    /// Size a liquidation covering `amount` LPN
    ///
    /// A liquidation of less than the minimum sell asset is increased up to it. If the rest of
    /// the position would be worth less than the minimum asset then all of it is liquidated.
    pub fn may_liquidate(
        &self,
        asset: AssetCoin,
        amount: LpnCoin,
        cause: Cause,
        quote: &LpnQuote,
    ) -> ContractResult<Liquidation> {
        let to_sell = to_asset(amount.max(self.min_sell_asset), quote.max())?;
        if to_sell >= asset {
            return Ok(Liquidation::Full(cause));
        }

        to_lpn(asset - to_sell, quote.max()).map(|rest| {
            if rest < self.min_asset {
                Liquidation::Full(cause)
            } else {
                Liquidation::Partial {
                    amount: to_sell,
                    cause,
                }
            }
        })
    }

    fn may_ask_liquidation_liability(
        &self,
        asset: AssetCoin,
        asset_in_lpn: LpnCoin,
        total_due: LpnCoin,
        ltv: Percent,
        quote: &LpnQuote,
    ) -> ContractResult<Liquidation> {
        self.liability
            .amount_to_liquidate(asset_in_lpn, total_due)
            .ok_or_else(|| overflow(asset_in_lpn, total_due))
            .and_then(|to_liquidate| {
                self.may_liquidate(
                    asset,
                    to_liquidate,
                    Cause::Liability {
                        ltv,
                        healthy_ltv: self.liability.healthy_percent(),
                    },
                    quote,
                )
            })
    }

    fn validate_sell_amount(&self, worth: LpnCoin, lpn: &CurrencyDTO) -> ContractResult<()> {
        if worth < self.min_sell_asset {
            Err(ContractError::BelowMinSellAsset {
                worth: into_dto(worth, lpn),
                min: into_dto(self.min_sell_asset, lpn),
            })
        } else {
            Ok(())
        }
    }

    fn validate_worth(&self, worth: LpnCoin, lpn: &CurrencyDTO) -> ContractResult<()> {
        if worth < self.min_asset {
            Err(ContractError::BelowMinAsset {
                worth: into_dto(worth, lpn),
                min: into_dto(self.min_asset, lpn),
            })
        } else {
            Ok(())
        }
    }

    // a worthless position is at an LTV above any limit
    fn ltv(total_due: LpnCoin, asset_in_lpn: LpnCoin) -> Percent {
        Percent::from_ratio(total_due, asset_in_lpn)
            .unwrap_or(Percent::from_permille(Units::MAX))
    }
}

#[cfg(test)]
pub(super) mod test {
    use currency::{CurrencyDTO, test as currencies};
    use finance::{
        coin::{Coin, CoinDTO},
        duration::Duration,
        liability::{Liability, Zone},
        percent::Percent,
        price::{self, PriceQuote},
    };
    use sdk::cosmwasm_std::Timestamp;

    use crate::{
        api::PositionSpecDTO,
        error::ContractError,
        finance::{AssetCoin, LpnCoin, LpnQuote},
        loan::State as DueState,
        position::{Cause, Debt, Liquidation},
    };

    use super::Spec;

    pub fn lpn() -> CurrencyDTO {
        currencies::dto(currencies::LPN)
    }

    pub fn spec() -> Spec {
        Spec::try_from_dto(
            &PositionSpecDTO::try_new(
                Liability::new(
                    Percent::from_percent(65),
                    Percent::from_percent(70),
                    Percent::from_percent(73),
                    Percent::from_percent(75),
                    Percent::from_percent(78),
                    Percent::from_percent(80),
                ),
                CoinDTO::new(50, lpn()),
                CoinDTO::new(10, lpn()),
            )
            .unwrap(),
            &lpn(),
        )
        .unwrap()
    }

    /// 1 LPN buys 2 asset units
    pub fn exact_quote() -> LpnQuote {
        PriceQuote::exact_only(price::total_of(Coin::new(1)).is(Coin::new(2)))
    }

    fn asset(amount: u128) -> AssetCoin {
        Coin::new(amount)
    }

    fn lpn_coin(amount: u128) -> LpnCoin {
        Coin::new(amount)
    }

    fn due(principal: u128, overdue: u128, collectable: bool) -> DueState {
        DueState {
            annual_interest: Percent::from_percent(10),
            annual_margin: Percent::from_percent(3),
            principal_due: lpn_coin(principal),
            previous_interest_due: lpn_coin(overdue),
            previous_margin_due: LpnCoin::default(),
            current_interest_due: LpnCoin::default(),
            current_margin_due: LpnCoin::default(),
            overdue_collect_in: if collectable {
                Duration::default()
            } else {
                Duration::HOUR
            },
            last_paid: Timestamp::from_seconds(10),
        }
    }

    #[test]
    fn from_dto_other_currency() {
        let dto = PositionSpecDTO::try_new(
            *spec().liability(),
            CoinDTO::new(50, lpn()),
            CoinDTO::new(10, lpn()),
        )
        .unwrap();
        let other = currencies::dto(currencies::ASSET_A);
        assert_eq!(
            Err(ContractError::currency_mismatch(&other, &lpn())),
            Spec::try_from_dto(&dto, &other)
        );
    }

    #[test]
    fn borrow() {
        assert_eq!(Ok(lpn_coin(185)), spec().borrow_amount(lpn_coin(100), None));
        assert_eq!(
            Ok(lpn_coin(50)),
            spec().borrow_amount(lpn_coin(100), Some(Percent::from_percent(50)))
        );
    }

    #[test]
    fn no_debt() {
        assert_eq!(
            Ok(Debt::No),
            spec().debt(asset(570), &due(0, 0, false), &exact_quote())
        );
    }

    #[test]
    fn healthy_debt() {
        let spec = spec();
        // 185 / 285
        assert_eq!(
            Ok(Debt::Ok {
                zone: Zone::no_warnings(Percent::from_percent(73)),
                ltv: Percent::from_permille(649),
            }),
            spec.debt(asset(570), &due(185, 0, false), &exact_quote())
        );
        // 210 / 285
        assert_eq!(
            Ok(Debt::Ok {
                zone: Zone::first(Percent::from_percent(73), Percent::from_percent(75)),
                ltv: Percent::from_permille(736),
            }),
            spec.debt(asset(570), &due(210, 0, false), &exact_quote())
        );
        // the overdue is not collectable yet
        assert!(matches!(
            spec.debt(asset(570), &due(200, 7, false), &exact_quote()),
            Ok(Debt::Ok { .. })
        ));
    }

    #[test]
    fn liability_partial() {
        // ltv = 230 / 285 = 80.7%, liquidation = (230 - 70% of 285) / 30% = 103 LPN
        assert_eq!(
            Ok(Debt::Bad(Liquidation::Partial {
                amount: asset(206),
                cause: Cause::Liability {
                    ltv: Percent::from_permille(807),
                    healthy_ltv: Percent::from_percent(70),
                },
            })),
            spec().debt(asset(570), &due(230, 0, false), &exact_quote())
        );
    }

    #[test]
    fn liability_full() {
        // liquidation = (280 - 199) / 30% = 270 LPN, the rest is worth 15 LPN only
        assert_eq!(
            Ok(Debt::Bad(Liquidation::Full(Cause::Liability {
                ltv: Percent::from_permille(982),
                healthy_ltv: Percent::from_percent(70),
            }))),
            spec().debt(asset(570), &due(280, 0, false), &exact_quote())
        );
    }

    #[test]
    fn worthless() {
        assert!(matches!(
            spec().debt(asset(1), &due(100, 0, false), &exact_quote()),
            Ok(Debt::Bad(Liquidation::Full(Cause::Liability { .. })))
        ));
    }

    #[test]
    fn overdue_min_sell() {
        // 7 LPN overdue, increased up to the minimum sell asset
        assert_eq!(
            Ok(Debt::Bad(Liquidation::Partial {
                amount: asset(20),
                cause: Cause::Overdue(),
            })),
            spec().debt(asset(570), &due(150, 7, true), &exact_quote())
        );
    }

    #[test]
    fn overdue_and_liability() {
        let spec = spec();
        // the liability liquidation is the bigger one
        assert!(matches!(
            spec.debt(asset(570), &due(225, 5, true), &exact_quote()),
            Ok(Debt::Bad(Liquidation::Partial {
                cause: Cause::Liability { .. },
                ..
            }))
        ));
        // the overdue liquidation is the bigger one
        assert_eq!(
            Ok(Debt::Bad(Liquidation::Partial {
                amount: asset(260),
                cause: Cause::Overdue(),
            })),
            spec.debt(asset(570), &due(100, 130, true), &exact_quote())
        );
    }

    #[test]
    fn close_too_small() {
        assert_eq!(
            Err(ContractError::BelowMinSellAsset {
                worth: CoinDTO::new(9, lpn()),
                min: CoinDTO::new(10, lpn()),
            }),
            spec().validate_close(asset(570), asset(19), &exact_quote(), &lpn())
        );
        assert_eq!(
            Ok(()),
            spec().validate_close(asset(570), asset(20), &exact_quote(), &lpn())
        );
    }

    #[test]
    fn close_too_big() {
        assert_eq!(
            Err(ContractError::BelowMinAsset {
                worth: CoinDTO::new(45, lpn()),
                min: CoinDTO::new(50, lpn()),
            }),
            spec().validate_close(asset(570), asset(480), &exact_quote(), &lpn())
        );
        assert_eq!(
            Err(ContractError::BelowMinAsset {
                worth: CoinDTO::new(0, lpn()),
                min: CoinDTO::new(50, lpn()),
            }),
            spec().validate_close(asset(570), asset(570), &exact_quote(), &lpn())
        );
        assert!(
            spec()
                .validate_close(asset(570), asset(571), &exact_quote(), &lpn())
                .is_err()
        );
    }

    #[test]
    fn close_with_tolerance() {
        // the LPN at 1.8 to 2.2 asset units
        let quote = PriceQuote::with_tolerance(
            price::total_of(Coin::new(1)).is(Coin::new(2)),
            Percent::from_percent(10),
        )
        .unwrap();
        assert_eq!(
            Ok(()),
            spec().validate_close(asset(570), asset(19), &quote, &lpn())
        );
        // the rest is 90 units, worth 40 LPN at the highest price
        assert_eq!(
            Err(ContractError::BelowMinAsset {
                worth: CoinDTO::new(40, lpn()),
                min: CoinDTO::new(50, lpn()),
            }),
            spec().validate_close(asset(570), asset(480), &quote, &lpn())
        );
    }

    #[test]
    fn open_limits() {
        let spec = spec();
        assert_eq!(
            Err(ContractError::BelowMinSellAsset {
                worth: CoinDTO::new(9, lpn()),
                min: CoinDTO::new(10, lpn()),
            }),
            spec.validate_downpayment(lpn_coin(9), &lpn())
        );
        assert_eq!(Ok(()), spec.validate_downpayment(lpn_coin(10), &lpn()));
        assert_eq!(
            Err(ContractError::BelowMinAsset {
                worth: CoinDTO::new(49, lpn()),
                min: CoinDTO::new(50, lpn()),
            }),
            spec.validate_asset(asset(99), &exact_quote(), &lpn())
        );
    }
}
