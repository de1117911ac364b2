use std::path::Path;

use lending_pool::{ConfigError, LendingPool, PoolConfig, PoolError};
use serde::{Deserialize, Serialize};

use crate::runner::Target;

/// Layer the trace is executed against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Calls go straight into the pool; `faucet` lines are skipped.
    Pool,
    /// Calls go through the wallet ledger.
    #[default]
    Ledger,
}

/// Runner settings read from a TOML file.
///
/// ```toml
/// mode = "pool"
/// precise = true
///
/// [pool.risk]
/// liquidation_threshold = "2/3"
///
/// [pool.prices]
/// T = "3/2"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractorConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub precise: bool,
    #[serde(default)]
    pub pool: PoolConfig,
}

impl InteractorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: InteractorConfig = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.pool.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        InteractorConfig::from_toml_str(&raw)
    }

    /// Builds a fresh pool or ledger per `mode`.
    pub fn target(&self) -> Result<Target, PoolError> {
        let pool = LendingPool::from_config(&self.pool)?;
        Ok(match self.mode {
            Mode::Pool => Target::Pool(pool),
            Mode::Ledger => Target::Ledger(ledger::Ledger::from_pool(pool)),
        })
    }
}
