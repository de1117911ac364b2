use std::collections::BTreeMap;

use common_errors::LedgerError;
use common_math::Rational;
use common_structs::{AccountId, TokenId};
use log::info;

use crate::{wallet::require_positive, Ledger};

impl Ledger {
    /// Moves `amount` of `token` from `account`'s wallet into the pool.
    ///
    /// # Errors
    /// - `Pool(InvalidAmount)`: If `amount` is not strictly positive.
    /// - `InsufficientBalance`: If the wallet does not cover `amount`.
    /// - `Pool(_)`: If the pool reverted; the wallet is left untouched.
    pub fn deposit(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, LedgerError> {
        info!("{}: deposit({}:{}) from wallet", account, amount, token);
        let result = self.process_deposit(account, amount, token);
        self.record("deposit", result)
    }

    fn process_deposit(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, LedgerError> {
        require_positive(amount)?;
        self.require_balance(account, amount, token)?;
        let minted = self.pool.deposit(account, amount, token)?;
        self.debit_wallet(account, token, amount);
        Ok(minted)
    }

    /// Borrows from the pool into `account`'s wallet.
    pub fn borrow(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, LedgerError> {
        info!("{}: borrow({}:{}) to wallet", account, amount, token);
        let result = self.pool.borrow(account, amount, token);
        if let Ok(borrowed) = &result {
            self.credit_wallet(account, token, borrowed);
        }
        self.record_pool("borrow", result)
    }

    /// Repays `account`'s debt out of its wallet.
    ///
    /// # Errors
    /// - `Pool(InvalidAmount)`: If `amount` is not strictly positive.
    /// - `InsufficientBalance`: If the wallet does not cover `amount`.
    /// - `Pool(_)`: If the pool reverted.
    pub fn repay(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<(), LedgerError> {
        info!("{}: repay({}:{}) from wallet", account, amount, token);
        let result = self.process_repay(account, amount, token);
        self.record("repay", result)
    }

    fn process_repay(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<(), LedgerError> {
        require_positive(amount)?;
        self.require_balance(account, amount, token)?;
        self.pool.repay(account, amount, token)?;
        self.debit_wallet(account, token, amount);
        Ok(())
    }

    /// Redeems pool shares; the underlying lands in `account`'s wallet.
    pub fn redeem(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, LedgerError> {
        info!("{}: redeem({}:{}) to wallet", account, amount, token);
        let result = self.pool.redeem(account, amount, token);
        if let Ok(underlying) = &result {
            self.credit_wallet(account, token, underlying);
        }
        self.record_pool("redeem", result)
    }

    /// Liquidates `debtor`, paying `amount` of `token_debt` out of the liquidator's wallet.
    ///
    /// The seized shares stay in the pool, credited to the liquidator.
    pub fn liquidate(
        &mut self,
        liquidator: &AccountId,
        amount: &Rational,
        token_debt: &TokenId,
        debtor: &AccountId,
        token_minted: &TokenId,
    ) -> Result<Rational, LedgerError> {
        info!(
            "{}: liquidate({}:{}, {}, {}) from wallet",
            liquidator, amount, token_debt, debtor, token_minted
        );
        let result = self.process_liquidation(liquidator, amount, token_debt, debtor, token_minted);
        self.record("liquidate", result)
    }

    fn process_liquidation(
        &mut self,
        liquidator: &AccountId,
        amount: &Rational,
        token_debt: &TokenId,
        debtor: &AccountId,
        token_minted: &TokenId,
    ) -> Result<Rational, LedgerError> {
        require_positive(amount)?;
        self.require_balance(liquidator, amount, token_debt)?;
        let seized = self
            .pool
            .liquidate(liquidator, amount, token_debt, debtor, token_minted)?;
        self.debit_wallet(liquidator, token_debt, amount);
        Ok(seized)
    }

    pub fn accrue_interest(&mut self) -> BTreeMap<TokenId, Rational> {
        let rates = self.pool.accrue_interest();
        let _ = self.record("accrue_interest", Ok(()));
        rates
    }

    pub fn set_price(&mut self, token: &TokenId, price: &Rational) -> Result<(), LedgerError> {
        let result = self.pool.set_price(token, price);
        self.record_pool("set_price", result)
    }

    pub fn set_liq_threshold(&mut self, tliq: &Rational) -> Result<(), LedgerError> {
        let result = self.pool.set_liq_threshold(tliq);
        self.record_pool("set_liq_threshold", result)
    }

    pub fn set_liq_reward_factor(&mut self, rliq: &Rational) -> Result<(), LedgerError> {
        let result = self.pool.set_liq_reward_factor(rliq);
        self.record_pool("set_liq_reward_factor", result)
    }

    pub fn set_interest_rate(&mut self, alpha: &Rational, beta: &Rational) -> Result<(), LedgerError> {
        let result = self.pool.set_interest_rate(alpha, beta);
        self.record_pool("set_interest_rate", result)
    }
}
