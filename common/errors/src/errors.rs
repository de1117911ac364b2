use core::fmt;

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &str = "Amount must be greater than zero.";

pub static ERROR_TOKEN_NOT_FOUND: &str = "Token not found in reserves.";

pub static ERROR_ADDRESS_NOT_FOUND: &str = "Address has no entry for this token.";

pub static ERROR_INSUFFICIENT_RESERVES: &str = "Insufficient reserves.";

pub static ERROR_INSUFFICIENT_DEBT: &str = "Insufficient debts to repay.";

pub static ERROR_INSUFFICIENT_CREDIT: &str = "Insufficient minted tokens to redeem.";

pub static ERROR_HEALTH_FACTOR_BECOME_LOW: &str = "Health factor will be too low.";

pub static ERROR_HEALTH_FACTOR: &str = "Health not low enough for liquidation.";

pub static ERROR_OVER_LIQUIDATION: &str =
    "Liquidation would push the health factor above the threshold.";

pub static ERROR_INVALID_PRICE: &str = "Price must be greater than zero.";

pub static ERROR_INVALID_LIQUIDATION_THRESHOLD: &str =
    "Liquidation threshold must be between 0 and 1.";

pub static ERROR_INVALID_LIQUIDATION_REWARD_FACTOR: &str =
    "Liquidation reward factor must be at least 1.";

pub static ERROR_INVALID_INTEREST_RATE: &str =
    "Interest rate parameters must not be negative.";

pub static ERROR_INSUFFICIENT_WALLET_BALANCE: &str = "Insufficient wallet balance.";

/// Reason a pool operation reverted.
///
/// A revert is an ordinary outcome: the pool state is left exactly as it was
/// before the call and the caller may keep submitting operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolError {
    /// Amount is zero or negative.
    InvalidAmount,
    /// Token has never been deposited.
    UnknownToken,
    /// Address holds no entry for the referenced token.
    UnknownAddressEntry,
    InsufficientReserve,
    InsufficientDebt,
    InsufficientCredit,
    /// Borrow or redeem would leave the caller with health below 1.
    BelowHealthThreshold,
    /// Liquidation attempted on a healthy debtor.
    NotUndercollateralized,
    /// Liquidation would leave the debtor with health above 1.
    OverLiquidated,
    /// Risk parameter or price out of its admissible range.
    InvalidParameter(ParameterKind),
}

/// Which setter rejected its argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Price,
    LiquidationThreshold,
    LiquidationRewardFactor,
    InterestRate,
}

impl PoolError {
    pub fn message(&self) -> &'static str {
        match self {
            PoolError::InvalidAmount => ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO,
            PoolError::UnknownToken => ERROR_TOKEN_NOT_FOUND,
            PoolError::UnknownAddressEntry => ERROR_ADDRESS_NOT_FOUND,
            PoolError::InsufficientReserve => ERROR_INSUFFICIENT_RESERVES,
            PoolError::InsufficientDebt => ERROR_INSUFFICIENT_DEBT,
            PoolError::InsufficientCredit => ERROR_INSUFFICIENT_CREDIT,
            PoolError::BelowHealthThreshold => ERROR_HEALTH_FACTOR_BECOME_LOW,
            PoolError::NotUndercollateralized => ERROR_HEALTH_FACTOR,
            PoolError::OverLiquidated => ERROR_OVER_LIQUIDATION,
            PoolError::InvalidParameter(kind) => kind.message(),
        }
    }
}

impl ParameterKind {
    pub fn message(&self) -> &'static str {
        match self {
            ParameterKind::Price => ERROR_INVALID_PRICE,
            ParameterKind::LiquidationThreshold => ERROR_INVALID_LIQUIDATION_THRESHOLD,
            ParameterKind::LiquidationRewardFactor => ERROR_INVALID_LIQUIDATION_REWARD_FACTOR,
            ParameterKind::InterestRate => ERROR_INVALID_INTEREST_RATE,
        }
    }
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PoolError {}

/// Reason a wallet-level call reverted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// The caller's wallet does not cover the amount it wants to move into the pool.
    InsufficientBalance,
    /// The pool itself reverted.
    Pool(PoolError),
}

impl LedgerError {
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::InsufficientBalance => ERROR_INSUFFICIENT_WALLET_BALANCE,
            LedgerError::Pool(err) => err.message(),
        }
    }
}

impl From<PoolError> for LedgerError {
    fn from(err: PoolError) -> Self {
        LedgerError::Pool(err)
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::InsufficientBalance => None,
            LedgerError::Pool(err) => Some(err),
        }
    }
}
