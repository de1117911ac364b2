use common_errors::{LedgerError, PoolError};
use common_math::{is_strictly_positive, or_zero, Rational};
use common_structs::{AccountId, TokenId};
use log::info;
use num_traits::Zero;

use crate::Ledger;

impl Ledger {
    /// Units of `token` held by `account` outside the pool.
    pub fn balance(&self, account: &AccountId, token: &TokenId) -> Rational {
        or_zero(self.wallets.get(token).and_then(|w| w.get(account)))
    }

    /// Mints `amount` of `token` into `account`'s wallet.
    ///
    /// # Errors
    /// - `Pool(InvalidAmount)`: If `amount` is not strictly positive.
    pub fn faucet(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<(), LedgerError> {
        info!("{}: faucet({}:{})", account, amount, token);
        let result = require_positive(amount).map(|()| self.credit_wallet(account, token, amount));
        self.record("faucet", result)
    }

    /// Value of everything `account` owns: wallet balances, plus pool shares
    /// at the current exchange rate, minus debt, all at current prices.
    pub fn net_worth(&self, account: &AccountId) -> Rational {
        let wallet_value = self
            .wallets
            .iter()
            .filter_map(|(token, wallet)| {
                wallet
                    .get(account)
                    .map(|balance| balance * self.pool.price(token))
            })
            .fold(Rational::zero(), |acc, value| acc + value);

        wallet_value + self.pool.value_minted(account) - self.pool.value_debt(account)
    }

    pub(crate) fn require_balance(
        &self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<(), LedgerError> {
        if self.balance(account, token) < *amount {
            return Err(LedgerError::InsufficientBalance);
        }
        Ok(())
    }

    pub(crate) fn credit_wallet(&mut self, account: &AccountId, token: &TokenId, amount: &Rational) {
        let balance = self
            .wallets
            .entry(token.clone())
            .or_default()
            .entry(account.clone())
            .or_insert_with(Rational::zero);
        *balance += amount;
    }

    pub(crate) fn debit_wallet(&mut self, account: &AccountId, token: &TokenId, amount: &Rational) {
        let balance = self
            .wallets
            .entry(token.clone())
            .or_default()
            .entry(account.clone())
            .or_insert_with(Rational::zero);
        *balance -= amount;
    }
}

pub(crate) fn require_positive(amount: &Rational) -> Result<(), LedgerError> {
    if !is_strictly_positive(amount) {
        return Err(PoolError::InvalidAmount.into());
    }
    Ok(())
}
