//! Exact model of a collateralized lending pool.
//!
//! The pool holds one reserve per token, tracks per-address credit (pool
//! shares) and debt, and exposes atomic operations that either apply in full or
//! leave the state untouched. All arithmetic is exact.

use log::warn;

pub mod cache;
pub mod config;
pub mod display;
pub mod invariants;
pub mod positions;
pub mod router;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_events::*;
pub use common_math::{format_rational, parse_rational, ratio, to_rational, Rational};

pub use config::{ConfigError, PoolConfig};
pub use display::StateDisplay;
pub use invariants::InvariantViolation;
pub use positions::liquidation::LiquidationCall;
pub use router::Command;
pub use storage::{Market, PoolStorage};

/// The lending pool state machine.
///
/// Every mutating call takes `&mut self` and runs to completion, rollback
/// included, before returning.
#[derive(Clone, Debug)]
pub struct LendingPool {
    storage: PoolStorage,
    events: EventLog,
    last_reverted: bool,
    last_error: Option<PoolError>,
}

impl Default for LendingPool {
    fn default() -> Self {
        LendingPool::new()
    }
}

impl LendingPool {
    /// A pool with no markets and the default risk parameters.
    pub fn new() -> Self {
        LendingPool::from_storage(PoolStorage::new(RiskParams::default()))
    }

    /// A pool with no markets and the given risk parameters.
    ///
    /// # Errors
    /// - `InvalidParameter`: If any parameter is outside the range its setter accepts.
    pub fn with_params(params: RiskParams) -> Result<Self, PoolError> {
        params.validate()?;
        Ok(LendingPool::from_storage(PoolStorage::new(params)))
    }

    pub(crate) fn from_storage(storage: PoolStorage) -> Self {
        LendingPool {
            storage,
            events: EventLog::default(),
            last_reverted: false,
            last_error: None,
        }
    }

    /// Whether the most recent mutating call reverted.
    pub fn last_reverted(&self) -> bool {
        self.last_reverted
    }

    /// The reason of the most recent revert, cleared by the next successful call.
    pub fn last_error(&self) -> Option<PoolError> {
        self.last_error
    }

    pub fn storage(&self) -> &PoolStorage {
        &self.storage
    }

    pub fn events(&self) -> &[PoolEvent] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        self.events.drain()
    }

    /// Updates the revert indicator from the outcome of `operation`.
    pub(crate) fn record<T>(
        &mut self,
        operation: &str,
        result: Result<T, PoolError>,
    ) -> Result<T, PoolError> {
        match &result {
            Ok(_) => {
                self.last_reverted = false;
                self.last_error = None;
            }
            Err(err) => {
                warn!("{} reverted: {}", operation, err);
                self.last_reverted = true;
                self.last_error = Some(*err);
            }
        }
        result
    }
}
