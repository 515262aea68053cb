use std::ops::Sub;

use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

use crate::{
    error::{Error, Result},
    fraction::Fraction,
    fractionable::Fractionable,
    percent::{Percent, Units},
    ratio::Rational,
    zero::Zero,
};

pub use self::{level::Level, zone::Zone};

mod level;
mod unchecked;
mod zone;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, JsonSchema)]
#[serde(
    deny_unknown_fields,
    rename_all = "snake_case",
    try_from = "unchecked::Liability"
)]
pub struct Liability {
    /// The initial percentage of the amount due versus the locked collateral
    /// initial > 0
    initial: Percent,
    /// The healty percentage of the amount due versus the locked collateral
    /// healthy >= initial
    healthy: Percent,
    /// The percentage above which the first liquidity warning is issued.
    first_liq_warn: Percent,
    /// The percentage above which the second liquidity warning is issued.
    second_liq_warn: Percent,
    /// The percentage above which the third liquidity warning is issued.
    third_liq_warn: Percent,
    /// The maximum percentage of the amount due versus the locked collateral
    /// max > healthy
    max: Percent,
}

impl Liability {
    #[track_caller]
    #[cfg(any(test, feature = "testing"))]
    pub fn new(
        initial: Percent,
        healthy: Percent,
        first_liq_warn: Percent,
        second_liq_warn: Percent,
        third_liq_warn: Percent,
        max: Percent,
    ) -> Self {
        let obj = Self {
            initial,
            healthy,
            first_liq_warn,
            second_liq_warn,
            third_liq_warn,
            max,
        };
        debug_assert_eq!(Ok(()), obj.invariant_held());
        obj
    }

    pub const fn healthy_percent(&self) -> Percent {
        self.healthy
    }

    pub const fn first_liq_warn(&self) -> Percent {
        self.first_liq_warn
    }

    pub const fn second_liq_warn(&self) -> Percent {
        self.second_liq_warn
    }

    pub const fn third_liq_warn(&self) -> Percent {
        self.third_liq_warn
    }

    pub const fn max(&self) -> Percent {
        self.max
    }

    pub fn zone_of(&self, ltv: Percent) -> Zone {
        debug_assert!(ltv < self.max, "Ltv >= max is outside any liability zone!");

        if ltv < self.first_liq_warn {
            Zone::no_warnings(self.first_liq_warn)
        } else if ltv < self.second_liq_warn {
            Zone::first(self.first_liq_warn, self.second_liq_warn)
        } else if ltv < self.third_liq_warn {
            Zone::second(self.second_liq_warn, self.third_liq_warn)
        } else {
            Zone::third(self.third_liq_warn, self.max)
        }
    }

    /// Compute how much may be borrowed against `downpayment`
    ///
    /// `initial / (100% - initial)` of the downpayment, capped by the optional maximum
    /// loan-to-downpayment ratio.
    pub fn init_borrow_amount<P>(&self, downpayment: P, may_max_ltd: Option<Percent>) -> Option<P>
    where
        P: Fractionable<Units> + Ord + Copy,
    {
        debug_assert!(self.initial > Percent::ZERO);
        debug_assert!(self.initial < Percent::HUNDRED);

        let default_ltd = Rational::new(
            self.initial.units(),
            (Percent::HUNDRED - self.initial).units(),
        );
        default_ltd.of(downpayment).and_then(|default_borrow| {
            may_max_ltd.map_or(Some(default_borrow), |max_ltd| {
                max_ltd
                    .of(downpayment)
                    .map(|requested_borrow| requested_borrow.min(default_borrow))
            })
        })
    }

    /// Post-assert: (total_due - amount_to_liquidate) / (lease_amount - amount_to_liquidate) ~= self.healthy_percent(), if total_due < lease_amount.
    /// Otherwise, amount_to_liquidate == lease_amount
    pub fn amount_to_liquidate<P>(&self, lease_amount: P, total_due: P) -> Option<P>
    where
        P: Fractionable<Units> + Copy + Ord + Sub<Output = P> + Zero,
    {
        self.max.of(lease_amount).and_then(|max_lease| {
            if total_due < max_lease {
                Some(P::ZERO)
            } else if lease_amount <= total_due {
                Some(lease_amount)
            } else {
                // from 'due - liquidation = healthy% of (lease - liquidation)' follows
                // liquidation = 100% / (100% - healthy%) of (due - healthy% of lease)
                let multiplier = Rational::new(
                    Percent::HUNDRED.units(),
                    (Percent::HUNDRED - self.healthy).units(),
                );
                self.healthy.of(lease_amount).and_then(|healthy_lease| {
                    let extra_liability = total_due - total_due.min(healthy_lease);
                    multiplier
                        .of(extra_liability)
                        .map(|liquidation| liquidation.min(lease_amount))
                })
            }
        })
    }

    fn invariant_held(&self) -> Result<()> {
        check(self.initial > Percent::ZERO, "Initial % should not be zero")?;

        check(
            self.initial <= self.healthy,
            "Initial % should be <= healthy %",
        )?;

        check(
            self.healthy < self.first_liq_warn,
            "Healthy % should be < first liquidation %",
        )?;
        check(
            self.first_liq_warn < self.second_liq_warn,
            "First liquidation % should be < second liquidation %",
        )?;
        check(
            self.second_liq_warn < self.third_liq_warn,
            "Second liquidation % should be < third liquidation %",
        )?;
        check(
            self.third_liq_warn < self.max,
            "Third liquidation % should be < max %",
        )?;
        check(self.max <= Percent::HUNDRED, "Max % should be <= 100%")
    }
}

fn check(invariant: bool, msg: &str) -> Result<()> {
    Error::broken_invariant_if::<Liability>(!invariant, msg)
}

#[cfg(test)]
mod test {
    use crate::{
        coin::{Amount, Coin},
        fraction::Fraction,
        percent::{Percent, Units},
        test::Lpn,
        zero::Zero,
    };

    use super::{Liability, Zone};

    #[test]
    fn invariant() {
        assert_eq!(Ok(()), liability([10, 10, 11, 12, 13, 14]).invariant_held());
        assert_eq!(Ok(()), liability([10, 50, 60, 70, 80, 1000]).invariant_held());

        assert!(liability([0, 10, 11, 12, 13, 14]).invariant_held().is_err());
        assert!(liability([10, 9, 11, 12, 13, 14]).invariant_held().is_err());
        assert!(liability([10, 10, 10, 12, 13, 14]).invariant_held().is_err());
        assert!(liability([10, 10, 11, 11, 13, 14]).invariant_held().is_err());
        assert!(liability([10, 10, 11, 12, 12, 14]).invariant_held().is_err());
        assert!(liability([10, 10, 11, 12, 13, 13]).invariant_held().is_err());
        assert!(liability([10, 10, 11, 12, 13, 1001]).invariant_held().is_err());
    }

    #[test]
    fn test_zone_of() {
        let first_liquidation_warn = Percent::from_permille(792);
        let second_liquidation_warn = Percent::from_permille(815);
        let third_liquidation_warn = Percent::from_permille(826);
        let max = Percent::from_percent(85);
        let l = Liability {
            initial: Percent::from_percent(60),
            healthy: Percent::from_percent(65),
            first_liq_warn: first_liquidation_warn,
            second_liq_warn: second_liquidation_warn,
            third_liq_warn: third_liquidation_warn,
            max,
        };
        assert_eq!(zone_of(&l, 0), Zone::no_warnings(first_liquidation_warn));
        assert_eq!(zone_of(&l, 791), Zone::no_warnings(first_liquidation_warn));
        assert_eq!(
            zone_of(&l, 792),
            Zone::first(first_liquidation_warn, second_liquidation_warn)
        );
        assert_eq!(
            zone_of(&l, 814),
            Zone::first(first_liquidation_warn, second_liquidation_warn)
        );
        assert_eq!(
            zone_of(&l, 815),
            Zone::second(second_liquidation_warn, third_liquidation_warn)
        );
        assert_eq!(zone_of(&l, 826), Zone::third(third_liquidation_warn, max));
        assert_eq!(zone_of(&l, 849), Zone::third(third_liquidation_warn, max));
    }

    #[test]
    fn init_borrow() {
        test_init_borrow_amount(1000, 50, 1000, None);
        test_init_borrow_amount(1, 10, 0, None);
        test_init_borrow_amount(1000, 99, 990 * 100, None);
        test_init_borrow_amount(10, 65, 18, None);
        test_init_borrow_amount(100, 60, 150, None);
        test_init_borrow_amount(250, 59, 359, None);
        test_init_borrow_amount(70, 5, 3, None);
        test_init_borrow_amount(90, 25, 30, None);
    }

    #[test]
    fn init_borrow_max_ltd() {
        test_init_borrow_amount(50000, 60, 25000, Some(Percent::from_percent(50)));
        test_init_borrow_amount(1000, 10, 100, Some(Percent::from_percent(10)));
        test_init_borrow_amount(1, 10, 0, Some(Percent::from_percent(5)));
        test_init_borrow_amount(1000, 60, 1500, Some(Percent::from_percent(190)));
        test_init_borrow_amount(4000, 55, 4800, Some(Percent::from_percent(120)));
        test_init_borrow_amount(1000, 65, 0, Some(Percent::ZERO));
    }

    #[test]
    fn amount_to_liquidate() {
        let healthy = 85;
        let max = 90;
        let liability = Liability {
            initial: Percent::from_percent(60),
            healthy: Percent::from_percent(healthy),
            max: Percent::from_percent(max),
            first_liq_warn: Percent::from_permille(860),
            second_liq_warn: Percent::from_permille(865),
            third_liq_warn: Percent::from_permille(870),
        };
        let lease_amount: Amount = 100;
        let healthy_amount = Percent::from_percent(healthy).of(lease_amount).unwrap();
        let max_amount = Percent::from_percent(max).of(lease_amount).unwrap();
        amount_to_liquidate_int(liability, lease_amount, Amount::ZERO, Amount::ZERO);
        amount_to_liquidate_int(liability, lease_amount, healthy_amount - 10, Amount::ZERO);
        amount_to_liquidate_int(liability, lease_amount, healthy_amount, Amount::ZERO);
        amount_to_liquidate_int(liability, lease_amount, max_amount - 1, Amount::ZERO);
        amount_to_liquidate_int(liability, lease_amount, max_amount, 33);
        amount_to_liquidate_int(liability, lease_amount, max_amount + 1, 40);
        amount_to_liquidate_int(liability, lease_amount, max_amount + 8, 86);
        amount_to_liquidate_int(liability, lease_amount, lease_amount - 1, 93);
        amount_to_liquidate_int(liability, lease_amount, lease_amount, lease_amount);
        amount_to_liquidate_int(liability, lease_amount, lease_amount + 10, lease_amount);
    }

    #[track_caller]
    fn amount_to_liquidate_int(liability: Liability, lease: Amount, due: Amount, exp: Amount) {
        let liq = liability.amount_to_liquidate(lease, due).unwrap();
        assert_eq!(exp, liq);
        if due.clamp(liability.max.of(lease).unwrap(), lease) == due {
            assert!(
                liability
                    .healthy
                    .of(lease - exp)
                    .unwrap()
                    .abs_diff(due - exp)
                    <= 1,
                "Lease = {lease}, due = {due}, exp = {exp}"
            );
        }
    }

    fn liability([initial, healthy, first, second, third, max]: [Units; 6]) -> Liability {
        Liability {
            initial: Percent::from_permille(initial),
            healthy: Percent::from_permille(healthy),
            first_liq_warn: Percent::from_permille(first),
            second_liq_warn: Percent::from_permille(second),
            third_liq_warn: Percent::from_permille(third),
            max: Percent::from_permille(max),
        }
    }

    fn zone_of(l: &Liability, permilles: Units) -> Zone {
        l.zone_of(Percent::from_permille(permilles))
    }

    #[track_caller]
    fn test_init_borrow_amount(d: u128, p: u16, exp: u128, max_p: Option<Percent>) {
        let downpayment = Coin::<Lpn>::new(d);
        let percent = Percent::from_percent(p);
        let calculated = Liability {
            initial: percent,
            healthy: Percent::from_percent(99),
            max: Percent::from_percent(100),
            first_liq_warn: Percent::from_permille(992),
            second_liq_warn: Percent::from_permille(995),
            third_liq_warn: Percent::from_permille(998),
        }
        .init_borrow_amount(downpayment, max_p)
        .unwrap();

        assert_eq!(calculated, Coin::<Lpn>::new(exp));
    }
}
