use std::collections::BTreeMap;

use common_events::{AccountId, PoolEvent, TokenId};
use common_math::Rational;
use common_rates::accrued_interest;
use log::{debug, info};

use crate::{cache::Transaction, LendingPool};

impl LendingPool {
    /// Adds one period of interest to every debt.
    ///
    /// The rate of each token is fixed from its utilization at call time and
    /// applied to every address, so the order in which addresses are visited
    /// does not matter. Never reverts.
    ///
    /// # Returns
    /// - The rate applied to each listed token.
    pub fn accrue_interest(&mut self) -> BTreeMap<TokenId, Rational> {
        info!("accrue_interest");
        let rates: BTreeMap<TokenId, Rational> = self
            .storage
            .tokens()
            .map(|token| (token.clone(), self.storage.interest_rate(token)))
            .collect();

        let mut tx = Transaction::new(&mut self.storage);
        for (token, rate) in &rates {
            let debts: Vec<(AccountId, Rational)> = tx
                .storage()
                .market(token)
                .map(|market| {
                    market
                        .debts
                        .iter()
                        .map(|(account, debt)| (account.clone(), debt.clone()))
                        .collect()
                })
                .unwrap_or_default();

            for (account, debt) in debts {
                tx.add_debt(token, &account, &accrued_interest(&debt, rate));
            }
            debug!("accrued {} on {}", rate, token);
        }
        tx.commit();

        self.events.emit(PoolEvent::AccrueInterest {
            rates: rates.clone(),
        });
        let _ = self.record("accrue_interest", Ok(()));
        rates
    }
}
