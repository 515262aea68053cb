pub(crate) enum Type {
    Open,
    Repay,
    ClosePosition,
    Close,
    LiquidationWarning,
    Liquidation,
}

impl Type {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "ls-open",
            Self::Repay => "ls-repay",
            Self::ClosePosition => "ls-close-position",
            Self::Close => "ls-close",
            Self::LiquidationWarning => "ls-liquidation-warning",
            Self::Liquidation => "ls-liquidation",
        }
    }
}

impl From<Type> for String {
    fn from(ty: Type) -> Self {
        String::from(ty.as_str())
    }
}
