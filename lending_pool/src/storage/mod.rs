use std::collections::BTreeMap;

use common_constants::DEFAULT_PRICE;
use common_math::{or_zero, to_rational, Rational};
use common_structs::{AccountId, RiskParams, TokenId};
use num_traits::Zero;

/// Balances of a single listed token.
///
/// `debts` are in underlying units and include accrued interest, `credits` are
/// in pool-share units. Entries are never removed, only driven to zero, so the
/// presence of a key is itself observable state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Market {
    pub reserve: Rational,
    pub debts: BTreeMap<AccountId, Rational>,
    pub credits: BTreeMap<AccountId, Rational>,
}

impl Market {
    pub fn debt_supply(&self) -> Rational {
        self.debts.values().fold(Rational::zero(), |acc, v| acc + v)
    }

    pub fn credit_supply(&self) -> Rational {
        self.credits.values().fold(Rational::zero(), |acc, v| acc + v)
    }
}

/// Full state of the pool.
///
/// Every read goes through an accessor that returns zero (or the default price)
/// for a missing key; reads never insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolStorage {
    pub markets: BTreeMap<TokenId, Market>,
    pub prices: BTreeMap<TokenId, Rational>,
    pub params: RiskParams,
}

impl PoolStorage {
    pub fn new(params: RiskParams) -> Self {
        PoolStorage {
            markets: BTreeMap::new(),
            prices: BTreeMap::new(),
            params,
        }
    }

    pub fn market(&self, token: &TokenId) -> Option<&Market> {
        self.markets.get(token)
    }

    /// A token is listed once it has received its first deposit.
    pub fn is_listed(&self, token: &TokenId) -> bool {
        self.markets.contains_key(token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &TokenId> {
        self.markets.keys()
    }

    pub fn reserve(&self, token: &TokenId) -> Rational {
        or_zero(self.market(token).map(|m| &m.reserve))
    }

    pub fn debt(&self, token: &TokenId, account: &AccountId) -> Rational {
        or_zero(self.market(token).and_then(|m| m.debts.get(account)))
    }

    pub fn credit(&self, token: &TokenId, account: &AccountId) -> Rational {
        or_zero(self.market(token).and_then(|m| m.credits.get(account)))
    }

    pub fn has_debt_entry(&self, token: &TokenId, account: &AccountId) -> bool {
        self.market(token)
            .is_some_and(|m| m.debts.contains_key(account))
    }

    pub fn has_credit_entry(&self, token: &TokenId, account: &AccountId) -> bool {
        self.market(token)
            .is_some_and(|m| m.credits.contains_key(account))
    }

    pub fn debt_supply(&self, token: &TokenId) -> Rational {
        self.market(token)
            .map(Market::debt_supply)
            .unwrap_or_else(Rational::zero)
    }

    pub fn credit_supply(&self, token: &TokenId) -> Rational {
        self.market(token)
            .map(Market::credit_supply)
            .unwrap_or_else(Rational::zero)
    }

    /// Price of `token`; unpriced tokens trade at the default price.
    pub fn price(&self, token: &TokenId) -> Rational {
        self.prices
            .get(token)
            .cloned()
            .unwrap_or_else(|| to_rational(DEFAULT_PRICE))
    }

    /// Every account holding a debt or credit entry in any market, sorted.
    pub fn accounts(&self) -> Vec<AccountId> {
        let mut accounts: Vec<AccountId> = self
            .markets
            .values()
            .flat_map(|m| m.debts.keys().chain(m.credits.keys()))
            .cloned()
            .collect();
        accounts.sort();
        accounts.dedup();
        accounts
    }

    pub(crate) fn read(&self, slot: &Slot) -> Option<Rational> {
        match slot {
            Slot::Reserve(token) => self.market(token).map(|m| m.reserve.clone()),
            Slot::Debt(token, account) => self
                .market(token)
                .and_then(|m| m.debts.get(account))
                .cloned(),
            Slot::Credit(token, account) => self
                .market(token)
                .and_then(|m| m.credits.get(account))
                .cloned(),
        }
    }

    /// Writes `value` into `slot`, or removes the entry when `value` is `None`.
    ///
    /// The market must exist; writes into an unlisted token are ignored.
    pub(crate) fn write(&mut self, slot: &Slot, value: Option<Rational>) {
        let token = slot.token();
        let Some(market) = self.markets.get_mut(token) else {
            return;
        };
        match (slot, value) {
            (Slot::Reserve(_), Some(value)) => market.reserve = value,
            (Slot::Reserve(_), None) => market.reserve = Rational::zero(),
            (Slot::Debt(_, account), Some(value)) => {
                market.debts.insert(account.clone(), value);
            }
            (Slot::Debt(_, account), None) => {
                market.debts.remove(account);
            }
            (Slot::Credit(_, account), Some(value)) => {
                market.credits.insert(account.clone(), value);
            }
            (Slot::Credit(_, account), None) => {
                market.credits.remove(account);
            }
        }
    }
}

/// Address of a single mutable balance in [`PoolStorage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Reserve(TokenId),
    Debt(TokenId, AccountId),
    Credit(TokenId, AccountId),
}

impl Slot {
    pub(crate) fn token(&self) -> &TokenId {
        match self {
            Slot::Reserve(token) | Slot::Debt(token, _) | Slot::Credit(token, _) => token,
        }
    }
}
