use std::collections::BTreeMap;

use common_math::Rational;
pub use common_structs::*;

/// A committed state change of the pool.
///
/// Reverted calls never produce an event, so replaying the log from a fresh
/// pool reproduces the sequence of committed operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolEvent {
    /// `amount` underlying deposited, `minted` credit units issued.
    Deposit {
        account: AccountId,
        token: TokenId,
        amount: Rational,
        minted: Rational,
    },
    Borrow {
        account: AccountId,
        token: TokenId,
        amount: Rational,
    },
    Repay {
        account: AccountId,
        token: TokenId,
        amount: Rational,
    },
    /// `amount` credit units burned, `underlying` paid out of the reserve.
    Redeem {
        account: AccountId,
        token: TokenId,
        amount: Rational,
        underlying: Rational,
    },
    Liquidate {
        liquidator: AccountId,
        debtor: AccountId,
        token_debt: TokenId,
        token_minted: TokenId,
        repaid: Rational,
        seized: Rational,
    },
    // The rate applied to every debt of each token during this accrual
    AccrueInterest {
        rates: BTreeMap<TokenId, Rational>,
    },
    PriceUpdated {
        token: TokenId,
        price: Rational,
    },
    RiskParamsUpdated {
        params: RiskParams,
    },
}

/// Append-only list of events emitted by committed operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<PoolEvent>,
}

impl EventLog {
    pub fn emit(&mut self, event: PoolEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns every event emitted so far and clears the log.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }
}
