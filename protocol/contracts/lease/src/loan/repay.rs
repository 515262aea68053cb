use currency::CurrencyDTO;

use crate::{
    api::receipt::RepayReceipt,
    finance::{LpnCoin, into_dto},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Receipt {
    previous_interest_paid: LpnCoin,
    previous_margin_paid: LpnCoin,
    current_interest_paid: LpnCoin,
    current_margin_paid: LpnCoin,
    principal_paid: LpnCoin,
    excess: LpnCoin,
    close: bool,
}

impl Receipt {
    pub fn new(
        previous_interest: LpnCoin,
        previous_margin: LpnCoin,
        current_interest: LpnCoin,
        current_margin: LpnCoin,
        principal_due: LpnCoin,
        principal_paid: LpnCoin,
        excess: LpnCoin,
    ) -> Self {
        debug_assert!(
            principal_paid <= principal_due,
            "Payment exceeds principal!"
        );
        debug_assert!(
            excess.is_zero() || principal_paid == principal_due,
            "Excess before the principal is paid!"
        );

        Self {
            previous_interest_paid: previous_interest,
            previous_margin_paid: previous_margin,
            current_interest_paid: current_interest,
            current_margin_paid: current_margin,
            principal_paid,
            excess,
            close: principal_due == principal_paid,
        }
    }

    pub fn previous_interest_paid(&self) -> LpnCoin {
        self.previous_interest_paid
    }

    pub fn previous_margin_paid(&self) -> LpnCoin {
        self.previous_margin_paid
    }

    pub fn current_interest_paid(&self) -> LpnCoin {
        self.current_interest_paid
    }

    pub fn current_margin_paid(&self) -> LpnCoin {
        self.current_margin_paid
    }

    pub fn principal_paid(&self) -> LpnCoin {
        self.principal_paid
    }

    pub fn excess(&self) -> LpnCoin {
        self.excess
    }

    pub fn close(&self) -> bool {
        self.close
    }

    /// The part going to the lender
    pub fn interest_and_principal(&self) -> LpnCoin {
        self.previous_interest_paid + self.current_interest_paid + self.principal_paid
    }

    /// The part going to the protocol profit
    pub fn margin(&self) -> LpnCoin {
        self.previous_margin_paid + self.current_margin_paid
    }

    pub fn total(&self) -> LpnCoin {
        self.interest_and_principal() + self.margin() + self.excess
    }

    pub fn into_dto(self, lpn: &CurrencyDTO) -> RepayReceipt {
        RepayReceipt {
            previous_interest: into_dto(self.previous_interest_paid, lpn),
            previous_margin: into_dto(self.previous_margin_paid, lpn),
            current_interest: into_dto(self.current_interest_paid, lpn),
            current_margin: into_dto(self.current_margin_paid, lpn),
            principal: into_dto(self.principal_paid, lpn),
            excess: into_dto(self.excess, lpn),
            paid: self.close,
        }
    }
}
