use common_errors::PoolError;
use common_events::{AccountId, PoolEvent, TokenId};
use common_math::Rational;
use log::{debug, info};
use num_traits::Zero;

use crate::{cache::Transaction, validation, LendingPool};

impl LendingPool {
    /// Deposits `amount` underlying of `token` and mints pool shares to `account`.
    ///
    /// The shares are priced at the exchange rate read before the reserve
    /// changes, so the exchange rate itself is unaffected. The first deposit of
    /// a token lists it and opens a zero debt entry for the depositor.
    ///
    /// # Returns
    /// - `Rational`: Credit units minted, `amount / XR(token)`.
    ///
    /// # Errors
    /// - `InvalidAmount`: If `amount` is not strictly positive.
    pub fn deposit(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, PoolError> {
        info!("{}: deposit({}:{})", account, amount, token);
        let result = self.process_deposit(account, amount, token);
        self.record("deposit", result)
    }

    fn process_deposit(
        &mut self,
        account: &AccountId,
        amount: &Rational,
        token: &TokenId,
    ) -> Result<Rational, PoolError> {
        validation::require_amount_greater_than_zero(amount)?;

        let exchange_rate = self.storage.exchange_rate(token);
        let minted = amount / &exchange_rate;
        debug!("minting {} {} shares at rate {}", minted, token, exchange_rate);

        let mut tx = Transaction::new(&mut self.storage);
        if tx.ensure_market(token) {
            tx.add_debt(token, account, &Rational::zero());
        }
        tx.add_reserve(token, amount);
        tx.add_credit(token, account, &minted);
        tx.commit();

        self.events.emit(PoolEvent::Deposit {
            account: account.clone(),
            token: token.clone(),
            amount: amount.clone(),
            minted: minted.clone(),
        });
        Ok(minted)
    }
}
