use std::any::type_name;

use thiserror::Error;

use currency::{CurrencyDTO, SymbolOwned, error::Error as CurrencyError};
use finance::{coin::CoinDTO, error::Error as FinanceError};
use platform::error::Error as PlatformError;
use sdk::cosmwasm_std::Addr;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Lease] {0}")]
    CurrencyError(#[from] CurrencyError),

    #[error("[Lease] {0}")]
    FinanceError(#[from] FinanceError),

    #[error("[Lease] {0}")]
    PlatformError(#[from] PlatformError),

    #[error("[Lease] Unauthorized access! '{0}' is not the lease owner")]
    Unauthorized(String),

    #[error("[Lease] The underlying loan is not fully repaid, {0} is still due")]
    LoanNotFullyRepaid(CoinDTO),

    #[error("[Lease] The underlying loan of '{0}' is closed")]
    LoanClosed(String),

    #[error("[Lease] Expected currency {expected}, found {found}")]
    CurrencyMismatch {
        expected: SymbolOwned,
        found: SymbolOwned,
    },

    #[error("[Lease] No price is available for currency {0}")]
    UnsupportedCurrency(SymbolOwned),

    #[error("[Lease] The amount to sell is worth {worth}, less than the minimum sell asset of {min}")]
    BelowMinSellAsset { worth: CoinDTO, min: CoinDTO },

    #[error("[Lease] The remaining position is worth {worth}, less than the minimum asset of {min}")]
    BelowMinAsset { worth: CoinDTO, min: CoinDTO },

    #[error("[Lease] The amount {0} is invalid, it should be positive")]
    InvalidAmount(CoinDTO),

    #[error("[Lease] Invalid input, {0}")]
    InputValidation(String),

    #[error("[Lease] The position close proceeds of {proceeds} do not cover the due amount of {due}")]
    InsufficientCloseProceeds { proceeds: CoinDTO, due: CoinDTO },

    #[error("[Lease] The lease '{0}' is not found")]
    LeaseNotFound(String),

    #[error("[Lease] The operation '{0}' is not supported in the current state")]
    UnsupportedOperation(String),

    #[error("[Lease] Programming error or invalid serialized object of '{0}' type, cause '{1}'")]
    BrokenInvariant(String, String),
}

impl ContractError {
    pub fn unauthorized(issuer: &Addr) -> Self {
        Self::Unauthorized(issuer.to_string())
    }

    pub fn loan_closed(lease: &Addr) -> Self {
        Self::LoanClosed(lease.to_string())
    }

    pub fn currency_mismatch(expected: &CurrencyDTO, found: &CurrencyDTO) -> Self {
        Self::CurrencyMismatch {
            expected: expected.ticker().into(),
            found: found.ticker().into(),
        }
    }

    pub fn unsupported_currency(currency: &CurrencyDTO) -> Self {
        Self::UnsupportedCurrency(currency.ticker().into())
    }

    pub fn lease_not_found(lease: &Addr) -> Self {
        Self::LeaseNotFound(lease.to_string())
    }

    pub fn unsupported_operation<Op>(op: Op) -> Self
    where
        Op: Into<String>,
    {
        Self::UnsupportedOperation(op.into())
    }

    pub fn broken_invariant_if<T>(check: bool, msg: &str) -> ContractResult<()> {
        if check {
            Err(Self::BrokenInvariant(type_name::<T>().into(), msg.into()))
        } else {
            Ok(())
        }
    }
}

pub type ContractResult<T> = Result<T, ContractError>;
