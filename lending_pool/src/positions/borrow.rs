use common_errors::PoolError;
use common_events::{AccountId, PoolEvent, TokenId};
use common_math::Rational;
use log::{debug, info};

use crate::{cache::Transaction, validation, LendingPool};

impl LendingPool {
    /// Lends `amount` of `token` out of the reserve to `account`.
    ///
    /// # Returns
    /// - `Rational`: The borrowed amount.
    ///
    /// # Errors
    /// - `InvalidAmount`: If `amount` is not strictly positive.
    /// - `UnknownToken`: If `token` has no market.
    /// - `InsufficientReserve`: If the reserve cannot cover `amount`.
    /// - `BelowHealthThreshold`: If the borrow would leave `account` with health below 1.
    pub fn borrow(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, PoolError> {
        info!("{}: borrow({}:{})", account, amount, token);
        let result = self.process_borrow(account, amount, token);
        self.record("borrow", result)
    }

    fn process_borrow(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, PoolError> {
        validation::require_amount_greater_than_zero(amount)?;
        validation::require_token_listed(&self.storage, token)?;
        validation::require_at_most(
            amount,
            &self.storage.reserve(token),
            PoolError::InsufficientReserve,
        )?;
        debug!(
            "health of {} before borrow: {}",
            account,
            self.storage.health_factor(account)
        );

        let mut tx = Transaction::new(&mut self.storage);
        tx.sub_reserve(token, amount);
        tx.add_debt(token, account, amount);

        debug!(
            "health of {} after borrow: {}",
            account,
            tx.storage().health_factor(account)
        );
        validation::require_healthy(tx.storage(), account)?;
        tx.commit();

        self.events.emit(PoolEvent::Borrow {
            account: account.clone(),
            token: token.clone(),
            amount: amount.clone(),
        });
        Ok(amount.clone())
    }
}
