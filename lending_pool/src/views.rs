use std::collections::BTreeMap;

use common_constants::HEALTH_FACTOR_THRESHOLD;
use common_math::{to_rational, ExtendedRational, Rational};
use common_rates::{exchange_rate, interest_rate, utilization};
use common_structs::{AccountId, RiskParams, TokenId};
use num_traits::{One, Zero};

use crate::{storage::PoolStorage, LendingPool};

impl PoolStorage {
    /// Underlying value of one credit unit of `token`; 1 for an empty market.
    pub fn exchange_rate(&self, token: &TokenId) -> Rational {
        exchange_rate(
            &self.reserve(token),
            &self.debt_supply(token),
            &self.credit_supply(token),
        )
    }

    /// Value of every credit `account` holds, at current exchange rates and prices.
    pub fn value_minted(&self, account: &AccountId) -> Rational {
        self.markets
            .iter()
            .filter_map(|(token, market)| {
                market
                    .credits
                    .get(account)
                    .map(|credit| credit * self.exchange_rate(token) * self.price(token))
            })
            .fold(Rational::zero(), |acc, value| acc + value)
    }

    /// Value of every debt `account` owes, at current prices.
    pub fn value_debt(&self, account: &AccountId) -> Rational {
        self.markets
            .iter()
            .filter_map(|(token, market)| {
                market
                    .debts
                    .get(account)
                    .map(|debt| debt * self.price(token))
            })
            .fold(Rational::zero(), |acc, value| acc + value)
    }

    /// `value_minted / value_debt`, infinite without debt.
    pub fn collateral(&self, account: &AccountId) -> ExtendedRational {
        let value_debt = self.value_debt(account);
        if value_debt.is_zero() {
            return ExtendedRational::Infinite;
        }
        ExtendedRational::Finite(self.value_minted(account) / value_debt)
    }

    /// Collateral ratio scaled by the liquidation threshold.
    pub fn health_factor(&self, account: &AccountId) -> ExtendedRational {
        self.collateral(account).scale(&self.params.tliq)
    }

    pub fn is_undercollateralized(&self, account: &AccountId) -> bool {
        self.health_factor(account) < health_threshold()
    }

    pub fn utilization(&self, token: &TokenId) -> Rational {
        utilization(&self.reserve(token), &self.debt_supply(token))
    }

    pub fn interest_rate(&self, token: &TokenId) -> Rational {
        interest_rate(&self.params, &self.utilization(token))
    }

    /// Exchange rate of every listed token whose rate has moved away from 1.
    pub fn exchange_rates(&self) -> BTreeMap<TokenId, Rational> {
        self.tokens()
            .map(|token| (token.clone(), self.exchange_rate(token)))
            .filter(|(_, xr)| !xr.is_one())
            .collect()
    }
}

pub(crate) fn health_threshold() -> ExtendedRational {
    ExtendedRational::Finite(to_rational(HEALTH_FACTOR_THRESHOLD))
}

/// Read-only queries. None of them revert; unknown tokens and addresses read as zero.
impl LendingPool {
    pub fn reserve(&self, token: &TokenId) -> Rational {
        self.storage.reserve(token)
    }

    pub fn debt(&self, token: &TokenId, account: &AccountId) -> Rational {
        self.storage.debt(token, account)
    }

    pub fn credit(&self, token: &TokenId, account: &AccountId) -> Rational {
        self.storage.credit(token, account)
    }

    pub fn price(&self, token: &TokenId) -> Rational {
        self.storage.price(token)
    }

    pub fn debt_supply(&self, token: &TokenId) -> Rational {
        self.storage.debt_supply(token)
    }

    pub fn credit_supply(&self, token: &TokenId) -> Rational {
        self.storage.credit_supply(token)
    }

    pub fn exchange_rate(&self, token: &TokenId) -> Rational {
        self.storage.exchange_rate(token)
    }

    pub fn exchange_rates(&self) -> BTreeMap<TokenId, Rational> {
        self.storage.exchange_rates()
    }

    pub fn value_minted(&self, account: &AccountId) -> Rational {
        self.storage.value_minted(account)
    }

    pub fn value_debt(&self, account: &AccountId) -> Rational {
        self.storage.value_debt(account)
    }

    pub fn collateral(&self, account: &AccountId) -> ExtendedRational {
        self.storage.collateral(account)
    }

    pub fn health_factor(&self, account: &AccountId) -> ExtendedRational {
        self.storage.health_factor(account)
    }

    pub fn is_undercollateralized(&self, account: &AccountId) -> bool {
        self.storage.is_undercollateralized(account)
    }

    pub fn utilization(&self, token: &TokenId) -> Rational {
        self.storage.utilization(token)
    }

    pub fn interest_rate(&self, token: &TokenId) -> Rational {
        self.storage.interest_rate(token)
    }

    pub fn params(&self) -> &RiskParams {
        &self.storage.params
    }

    pub fn tokens(&self) -> Vec<TokenId> {
        self.storage.tokens().cloned().collect()
    }

    pub fn accounts(&self) -> Vec<AccountId> {
        self.storage.accounts()
    }

    pub fn is_listed(&self, token: &TokenId) -> bool {
        self.storage.is_listed(token)
    }
}
