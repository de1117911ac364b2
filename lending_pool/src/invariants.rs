use core::fmt;

use common_events::{AccountId, TokenId};
use num_traits::{One, Signed};

use crate::{storage::PoolStorage, LendingPool};

/// First broken invariant found by [`LendingPool::check_invariants`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    NegativeReserve(TokenId),
    NegativeDebt(TokenId, AccountId),
    NegativeCredit(TokenId, AccountId),
    ExchangeRateBelowOne(TokenId),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::NegativeReserve(token) => {
                write!(f, "negative reserve of {}", token)
            }
            InvariantViolation::NegativeDebt(token, account) => {
                write!(f, "negative debt of {} in {}", account, token)
            }
            InvariantViolation::NegativeCredit(token, account) => {
                write!(f, "negative credit of {} in {}", account, token)
            }
            InvariantViolation::ExchangeRateBelowOne(token) => {
                write!(f, "exchange rate of {} below 1", token)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl LendingPool {
    /// Checks that no balance is negative and that every exchange rate is at least 1.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (token, market) in &self.storage.markets {
            if market.reserve.is_negative() {
                return Err(InvariantViolation::NegativeReserve(token.clone()));
            }
            if let Some((account, _)) = market.debts.iter().find(|(_, v)| v.is_negative()) {
                return Err(InvariantViolation::NegativeDebt(
                    token.clone(),
                    account.clone(),
                ));
            }
            if let Some((account, _)) = market.credits.iter().find(|(_, v)| v.is_negative()) {
                return Err(InvariantViolation::NegativeCredit(
                    token.clone(),
                    account.clone(),
                ));
            }
            if self.storage.exchange_rate(token) < common_math::Rational::one() {
                return Err(InvariantViolation::ExchangeRateBelowOne(token.clone()));
            }
        }
        Ok(())
    }

    /// A copy of the full state, comparable with `==`.
    pub fn snapshot(&self) -> PoolStorage {
        self.storage.clone()
    }
}
