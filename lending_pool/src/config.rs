use std::{collections::BTreeMap, fmt, fs, path::Path};

use common_errors::PoolError;
use common_events::{
    validate_interest_rate, validate_liquidation_reward_factor, validate_liquidation_threshold,
    validate_price, PoolEvent, RiskParams, TokenId,
};
use common_math::{rational_map, Rational};
use log::info;
use serde::{Deserialize, Serialize};

use crate::{storage::PoolStorage, LendingPool};

/// Initial configuration of a pool.
///
/// ```toml
/// [risk]
/// liquidation_threshold = "2/3"
/// liquidation_reward_factor = "1.1"
///
/// [prices]
/// ETH = "2000"
/// ```
///
/// Missing sections fall back to the default risk parameters and the default
/// price.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    #[serde(default)]
    pub risk: RiskParams,
    #[serde(default, with = "rational_map")]
    pub prices: BTreeMap<TokenId, Rational>,
}

impl PoolConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: PoolConfig = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(ConfigError::Io)?;
        PoolConfig::from_toml_str(&raw)
    }

    /// Applies the same range checks as the setters.
    pub fn validate(&self) -> Result<(), PoolError> {
        self.risk.validate()?;
        self.prices.values().try_for_each(validate_price)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::Serialize)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(PoolError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read pool config: {}", err),
            ConfigError::Parse(err) => write!(f, "malformed pool config: {}", err),
            ConfigError::Serialize(err) => write!(f, "cannot write pool config: {}", err),
            ConfigError::Invalid(err) => write!(f, "invalid pool config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(err) => Some(err),
        }
    }
}

impl LendingPool {
    /// Builds an empty pool from a configuration.
    ///
    /// # Errors
    /// - `InvalidParameter`: If a parameter or price is out of range.
    pub fn from_config(config: &PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        let mut storage = PoolStorage::new(config.risk.clone());
        storage.prices = config.prices.clone();
        Ok(LendingPool::from_storage(storage))
    }

    /// Sets the price of `token`. The token does not need to be listed.
    ///
    /// # Errors
    /// - `InvalidParameter(Price)`: If `price` is not strictly positive.
    pub fn set_price(&mut self, token: &TokenId, price: &Rational) -> Result<(), PoolError> {
        info!("set_price({}, {})", token, price);
        let result = validate_price(price).map(|()| {
            self.storage.prices.insert(token.clone(), price.clone());
            self.events.emit(PoolEvent::PriceUpdated {
                token: token.clone(),
                price: price.clone(),
            });
        });
        self.record("set_price", result)
    }

    /// # Errors
    /// - `InvalidParameter(LiquidationThreshold)`: If `tliq` is outside `[0, 1]`.
    pub fn set_liq_threshold(&mut self, tliq: &Rational) -> Result<(), PoolError> {
        info!("set_liq_threshold({})", tliq);
        let result = validate_liquidation_threshold(tliq).map(|()| {
            self.update_params(|params| params.tliq = tliq.clone());
        });
        self.record("set_liq_threshold", result)
    }

    /// # Errors
    /// - `InvalidParameter(LiquidationRewardFactor)`: If `rliq` is below 1.
    pub fn set_liq_reward_factor(&mut self, rliq: &Rational) -> Result<(), PoolError> {
        info!("set_liq_reward_factor({})", rliq);
        let result = validate_liquidation_reward_factor(rliq).map(|()| {
            self.update_params(|params| params.rliq = rliq.clone());
        });
        self.record("set_liq_reward_factor", result)
    }

    /// Sets the interest curve `alpha * utilization + beta`.
    ///
    /// # Errors
    /// - `InvalidParameter(InterestRate)`: If either coefficient is negative.
    pub fn set_interest_rate(&mut self, alpha: &Rational, beta: &Rational) -> Result<(), PoolError> {
        info!("set_interest_rate({}, {})", alpha, beta);
        let result = validate_interest_rate(alpha, beta).map(|()| {
            self.update_params(|params| {
                params.ir_alpha = alpha.clone();
                params.ir_beta = beta.clone();
            });
        });
        self.record("set_interest_rate", result)
    }

    fn update_params(&mut self, update: impl FnOnce(&mut RiskParams)) {
        update(&mut self.storage.params);
        self.events.emit(PoolEvent::RiskParamsUpdated {
            params: self.storage.params.clone(),
        });
    }
}
