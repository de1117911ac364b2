//! Wallet layer on top of the lending pool.
//!
//! A [`Ledger`] owns the pool and the token balances addresses hold outside of
//! it. Tokens only enter the pool from a wallet that covers them and only land
//! in a wallet when the pool call succeeded.

use std::collections::BTreeMap;

use common_errors::{LedgerError, PoolError};
use common_math::Rational;
use common_structs::{AccountId, TokenId};
use lending_pool::LendingPool;
use log::warn;

pub mod display;
pub mod operations;
pub mod router;
pub mod wallet;

pub use display::LedgerDisplay;
pub use router::LedgerCommand;

pub type Wallets = BTreeMap<TokenId, BTreeMap<AccountId, Rational>>;

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    pool: LendingPool,
    wallets: Wallets,
    last_reverted: bool,
    last_error: Option<LedgerError>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Wraps an existing pool, for instance one built from a config file.
    pub fn from_pool(pool: LendingPool) -> Self {
        Ledger {
            pool,
            ..Ledger::default()
        }
    }

    pub fn pool(&self) -> &LendingPool {
        &self.pool
    }

    pub fn wallets(&self) -> &Wallets {
        &self.wallets
    }

    pub fn last_reverted(&self) -> bool {
        self.last_reverted
    }

    pub fn last_error(&self) -> Option<&LedgerError> {
        self.last_error.as_ref()
    }

    pub(crate) fn record<T>(
        &mut self,
        operation: &str,
        result: Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        match &result {
            Ok(_) => {
                self.last_reverted = false;
                self.last_error = None;
            }
            Err(err) => {
                warn!("{} failed: {}", operation, err);
                self.last_reverted = true;
                self.last_error = Some(err.clone());
            }
        }
        result
    }

    pub(crate) fn record_pool<T>(
        &mut self,
        operation: &str,
        result: Result<T, PoolError>,
    ) -> Result<T, LedgerError> {
        self.record(operation, result.map_err(LedgerError::from))
    }
}
