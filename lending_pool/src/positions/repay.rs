use common_errors::PoolError;
use common_events::{AccountId, PoolEvent, TokenId};
use common_math::Rational;
use log::info;

use crate::{cache::Transaction, validation, LendingPool};

impl LendingPool {
    /// Pays back `amount` of `account`'s debt in `token`.
    ///
    /// Repaying only ever improves health, so there is no post-check.
    ///
    /// # Errors
    /// - `InvalidAmount`: If `amount` is not strictly positive.
    /// - `UnknownToken`: If `token` has no market.
    /// - `UnknownAddressEntry`: If `account` never borrowed `token`.
    /// - `InsufficientDebt`: If `amount` exceeds the outstanding debt.
    pub fn repay(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<(), PoolError> {
        info!("{}: repay({}:{})", account, amount, token);
        let result = self.process_repay(account, amount, token);
        self.record("repay", result)
    }

    fn process_repay(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<(), PoolError> {
        validation::require_amount_greater_than_zero(amount)?;
        validation::require_token_listed(&self.storage, token)?;
        validation::require_debt_entry(&self.storage, token, account)?;
        validation::require_at_most(
            amount,
            &self.storage.debt(token, account),
            PoolError::InsufficientDebt,
        )?;

        let mut tx = Transaction::new(&mut self.storage);
        tx.add_reserve(token, amount);
        tx.sub_debt(token, account, amount);
        tx.commit();

        self.events.emit(PoolEvent::Repay {
            account: account.clone(),
            token: token.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }
}
