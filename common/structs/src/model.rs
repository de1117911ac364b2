use core::fmt;

use common_constants::{
    DEFAULT_INTEREST_RATE_ALPHA, DEFAULT_INTEREST_RATE_BETA, DEFAULT_LIQUIDATION_REWARD_FACTOR,
    DEFAULT_LIQUIDATION_THRESHOLD,
};
use common_errors::{ParameterKind, PoolError};
use common_math::{from_pair, rational_str, Rational};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

pub use common_math::ExtendedRational;

/// Identifier of a token listed in the pool.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

/// Identifier of an address holding credit, debt or wallet balances.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

macro_rules! string_identifier {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_identifier!(TokenId);
string_identifier!(AccountId);

/// Pool-wide risk parameters.
///
/// - `tliq`: liquidation threshold, scales the collateral ratio into the health factor.
/// - `rliq`: liquidation reward factor, bonus paid to liquidators.
/// - `ir_alpha`, `ir_beta`: interest curve `ir_alpha * utilization + ir_beta`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskParams {
    #[serde(rename = "liquidation_threshold", with = "rational_str")]
    pub tliq: Rational,
    #[serde(rename = "liquidation_reward_factor", with = "rational_str")]
    pub rliq: Rational,
    #[serde(rename = "interest_rate_alpha", with = "rational_str")]
    pub ir_alpha: Rational,
    #[serde(rename = "interest_rate_beta", with = "rational_str")]
    pub ir_beta: Rational,
}

impl Default for RiskParams {
    fn default() -> Self {
        RiskParams {
            tliq: from_pair(DEFAULT_LIQUIDATION_THRESHOLD),
            rliq: from_pair(DEFAULT_LIQUIDATION_REWARD_FACTOR),
            ir_alpha: from_pair(DEFAULT_INTEREST_RATE_ALPHA),
            ir_beta: from_pair(DEFAULT_INTEREST_RATE_BETA),
        }
    }
}

impl RiskParams {
    /// Checks every parameter against the range its setter enforces.
    pub fn validate(&self) -> Result<(), PoolError> {
        validate_liquidation_threshold(&self.tliq)?;
        validate_liquidation_reward_factor(&self.rliq)?;
        validate_interest_rate(&self.ir_alpha, &self.ir_beta)
    }
}

/// Prices must be strictly positive.
pub fn validate_price(price: &Rational) -> Result<(), PoolError> {
    if !common_math::is_strictly_positive(price) {
        return Err(PoolError::InvalidParameter(ParameterKind::Price));
    }
    Ok(())
}

/// The liquidation threshold must lie in `[0, 1]`.
pub fn validate_liquidation_threshold(tliq: &Rational) -> Result<(), PoolError> {
    if *tliq < Rational::zero() || *tliq > Rational::one() {
        return Err(PoolError::InvalidParameter(
            ParameterKind::LiquidationThreshold,
        ));
    }
    Ok(())
}

/// The liquidation reward factor must be at least 1.
pub fn validate_liquidation_reward_factor(rliq: &Rational) -> Result<(), PoolError> {
    if *rliq < Rational::one() {
        return Err(PoolError::InvalidParameter(
            ParameterKind::LiquidationRewardFactor,
        ));
    }
    Ok(())
}

pub fn validate_interest_rate(alpha: &Rational, beta: &Rational) -> Result<(), PoolError> {
    if *alpha < Rational::zero() || *beta < Rational::zero() {
        return Err(PoolError::InvalidParameter(ParameterKind::InterestRate));
    }
    Ok(())
}
