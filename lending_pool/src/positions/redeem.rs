use common_errors::PoolError;
use common_events::{AccountId, PoolEvent, TokenId};
use common_math::Rational;
use log::{debug, info};

use crate::{cache::Transaction, validation, LendingPool};

impl LendingPool {
    /// Burns `amount` of `account`'s pool shares in `token` for underlying.
    ///
    /// # Returns
    /// - `Rational`: Underlying paid out, `amount * XR(token)`.
    ///
    /// # Errors
    /// - `InvalidAmount`: If `amount` is not strictly positive.
    /// - `UnknownToken`: If `token` has no market.
    /// - `UnknownAddressEntry`: If `account` never held shares of `token`.
    /// - `InsufficientCredit`: If `amount` exceeds the shares held.
    /// - `InsufficientReserve`: If the reserve cannot pay the underlying out.
    /// - `BelowHealthThreshold`: If the redeem would leave `account` with health below 1.
    pub fn redeem(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, PoolError> {
        info!("{}: redeem({}:{})", account, amount, token);
        let result = self.process_redeem(account, amount, token);
        self.record("redeem", result)
    }

    fn process_redeem(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, PoolError> {
        validation::require_amount_greater_than_zero(amount)?;
        validation::require_token_listed(&self.storage, token)?;
        validation::require_credit_entry(&self.storage, token, account)?;
        validation::require_at_most(
            amount,
            &self.storage.credit(token, account),
            PoolError::InsufficientCredit,
        )?;

        let underlying = amount * self.storage.exchange_rate(token);
        validation::require_at_most(
            &underlying,
            &self.storage.reserve(token),
            PoolError::InsufficientReserve,
        )?;
        debug!(
            "health of {} before redeem: {}",
            account,
            self.storage.health_factor(account)
        );

        let mut tx = Transaction::new(&mut self.storage);
        tx.sub_reserve(token, &underlying);
        tx.sub_credit(token, account, amount);

        debug!(
            "health of {} after redeem: {}",
            account,
            tx.storage().health_factor(account)
        );
        validation::require_healthy(tx.storage(), account)?;
        tx.commit();

        self.events.emit(PoolEvent::Redeem {
            account: account.clone(),
            token: token.clone(),
            amount: amount.clone(),
            underlying: underlying.clone(),
        });
        Ok(underlying)
    }
}
