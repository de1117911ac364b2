use common_errors::PoolError;
use common_events::{AccountId, PoolEvent, TokenId};
use common_math::Rational;
use common_rates::liquidation_seized_credit;
use log::{debug, info};

use crate::{cache::Transaction, validation, LendingPool};

/// Arguments of a liquidation, in the order the trace format lists them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationCall {
    pub liquidator: AccountId,
    pub amount: Rational,
    pub token_debt: TokenId,
    pub debtor: AccountId,
    pub token_minted: TokenId,
}

impl LendingPool {
    /// Repays `amount` of `debtor`'s debt in `token_debt` on their behalf and
    /// seizes the equivalent collateral in `token_minted`, plus the reward.
    ///
    /// The debtor must be undercollateralized before the call and must not end
    /// above the health threshold after it; landing exactly on 1 is accepted.
    ///
    /// # Returns
    /// - `Rational`: Credit units of `token_minted` moved from `debtor` to `liquidator`.
    ///
    /// # Errors
    /// - `InvalidAmount`: If `amount` is not strictly positive.
    /// - `UnknownToken`: If either token has no market.
    /// - `UnknownAddressEntry`: If the debtor has no debt in `token_debt` or no
    ///   shares in `token_minted`.
    /// - `InsufficientDebt`: If `amount` exceeds the debtor's debt.
    /// - `InsufficientCredit`: If the seized shares exceed the debtor's shares.
    /// - `NotUndercollateralized`: If the debtor's health is at or above 1.
    /// - `OverLiquidated`: If the debtor's health would end above 1.
    pub fn liquidate(
        &mut self,
        liquidator: &AccountId,
        amount: &Rational,
        token_debt: &TokenId,
        debtor: &AccountId,
        token_minted: &TokenId,
    ) -> Result<Rational, PoolError> {
        info!(
            "{}: liquidate({}:{}, {}, {})",
            liquidator, amount, token_debt, debtor, token_minted
        );
        let call = LiquidationCall {
            liquidator: liquidator.clone(),
            amount: amount.clone(),
            token_debt: token_debt.clone(),
            debtor: debtor.clone(),
            token_minted: token_minted.clone(),
        };
        let result = self.process_liquidation(&call);
        self.record("liquidate", result)
    }

    fn process_liquidation(&mut self, call: &LiquidationCall) -> Result<Rational, PoolError> {
        let LiquidationCall {
            liquidator,
            amount,
            token_debt,
            debtor,
            token_minted,
        } = call;

        validation::require_amount_greater_than_zero(amount)?;
        validation::require_token_listed(&self.storage, token_debt)?;
        validation::require_debt_entry(&self.storage, token_debt, debtor)?;
        validation::require_at_most(
            amount,
            &self.storage.debt(token_debt, debtor),
            PoolError::InsufficientDebt,
        )?;
        validation::require_token_listed(&self.storage, token_minted)?;
        validation::require_credit_entry(&self.storage, token_minted, debtor)?;

        let seized = self.seized_credit(amount, token_debt, token_minted);
        validation::require_at_most(
            &seized,
            &self.storage.credit(token_minted, debtor),
            PoolError::InsufficientCredit,
        )?;

        debug!(
            "health of {} before liquidation: {}",
            debtor,
            self.storage.health_factor(debtor)
        );
        validation::require_undercollateralized(&self.storage, debtor)?;

        let mut tx = Transaction::new(&mut self.storage);
        tx.add_reserve(token_debt, amount);
        tx.sub_debt(token_debt, debtor, amount);
        tx.add_credit(token_minted, liquidator, &seized);
        tx.sub_credit(token_minted, debtor, &seized);

        debug!(
            "health of {} after liquidation: {}",
            debtor,
            tx.storage().health_factor(debtor)
        );
        validation::require_not_over_liquidated(tx.storage(), debtor)?;
        tx.commit();

        self.events.emit(PoolEvent::Liquidate {
            liquidator: liquidator.clone(),
            debtor: debtor.clone(),
            token_debt: token_debt.clone(),
            token_minted: token_minted.clone(),
            repaid: amount.clone(),
            seized: seized.clone(),
        });
        Ok(seized)
    }

    /// Credit units of `token_minted` a liquidator receives for repaying
    /// `amount` of `token_debt`, reward included.
    pub fn seized_credit(
        &self,
        amount: &Rational,
        token_debt: &TokenId,
        token_minted: &TokenId,
    ) -> Rational {
        liquidation_seized_credit(
            amount,
            &self.storage.exchange_rate(token_minted),
            &self.storage.price(token_debt),
            &self.storage.price(token_minted),
            &self.storage.params.rliq,
        )
    }
}
