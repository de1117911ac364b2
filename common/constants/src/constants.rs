//! Default risk parameters and shared constants of the lending pool model.
//!
//! Fractions are stored as `(numerator, denominator)` pairs so they can be
//! turned into exact rationals without going through floating point.

/// Liquidation threshold applied when none is configured (2/3).
pub const DEFAULT_LIQUIDATION_THRESHOLD: (u64, u64) = (2, 3);

/// Liquidation reward factor applied when none is configured (110%).
pub const DEFAULT_LIQUIDATION_REWARD_FACTOR: (u64, u64) = (11, 10);

/// Slope of the interest curve over utilization.
pub const DEFAULT_INTEREST_RATE_ALPHA: (u64, u64) = (0, 1);

/// Base interest rate per accrual (12%).
pub const DEFAULT_INTEREST_RATE_BETA: (u64, u64) = (12, 100);

/// Price of a token that never had one set.
pub const DEFAULT_PRICE: u64 = 1;

/// Health factor at which a position is exactly at the liquidation boundary.
pub const HEALTH_FACTOR_THRESHOLD: u64 = 1;

/// Significant digits used when rendering rationals approximately.
pub const DISPLAY_SIGNIFICANT_DIGITS: usize = 6;
