use common_errors::PoolError;
use common_math::{is_strictly_positive, Rational};
use common_structs::{AccountId, TokenId};

use crate::{storage::PoolStorage, views::health_threshold};

/// Ensures an operation moves a strictly positive amount.
///
/// # Errors
/// - `InvalidAmount`: If the amount is zero or negative.
pub fn require_amount_greater_than_zero(amount: &Rational) -> Result<(), PoolError> {
    if !is_strictly_positive(amount) {
        return Err(PoolError::InvalidAmount);
    }
    Ok(())
}

/// Ensures the token has a market, i.e. received at least one deposit.
///
/// # Errors
/// - `UnknownToken`: If the token was never deposited.
pub fn require_token_listed(storage: &PoolStorage, token: &TokenId) -> Result<(), PoolError> {
    if !storage.is_listed(token) {
        return Err(PoolError::UnknownToken);
    }
    Ok(())
}

pub fn require_debt_entry(
    storage: &PoolStorage,
    token: &TokenId,
    account: &AccountId,
) -> Result<(), PoolError> {
    if !storage.has_debt_entry(token, account) {
        return Err(PoolError::UnknownAddressEntry);
    }
    Ok(())
}

pub fn require_credit_entry(
    storage: &PoolStorage,
    token: &TokenId,
    account: &AccountId,
) -> Result<(), PoolError> {
    if !storage.has_credit_entry(token, account) {
        return Err(PoolError::UnknownAddressEntry);
    }
    Ok(())
}

/// Fails with `err` when `amount` exceeds `available`.
pub fn require_at_most(
    amount: &Rational,
    available: &Rational,
    err: PoolError,
) -> Result<(), PoolError> {
    if amount > available {
        return Err(err);
    }
    Ok(())
}

/// Post-condition of borrow and redeem: the caller keeps a health factor of at least 1.
///
/// # Errors
/// - `BelowHealthThreshold`: If the health factor dropped below 1.
pub fn require_healthy(storage: &PoolStorage, account: &AccountId) -> Result<(), PoolError> {
    if storage.health_factor(account) < health_threshold() {
        return Err(PoolError::BelowHealthThreshold);
    }
    Ok(())
}

/// Pre-condition of liquidation: the debtor's health factor is strictly below 1.
///
/// # Errors
/// - `NotUndercollateralized`: If the debtor is at or above the threshold.
pub fn require_undercollateralized(
    storage: &PoolStorage,
    debtor: &AccountId,
) -> Result<(), PoolError> {
    if !storage.is_undercollateralized(debtor) {
        return Err(PoolError::NotUndercollateralized);
    }
    Ok(())
}

/// Post-condition of liquidation: the debtor must not end above the threshold.
/// Landing exactly on 1 is accepted.
///
/// # Errors
/// - `OverLiquidated`: If the debtor's health factor ends above 1.
pub fn require_not_over_liquidated(
    storage: &PoolStorage,
    debtor: &AccountId,
) -> Result<(), PoolError> {
    if storage.health_factor(debtor) > health_threshold() {
        return Err(PoolError::OverLiquidated);
    }
    Ok(())
}
