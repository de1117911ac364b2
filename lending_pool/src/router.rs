use common_errors::PoolError;
use common_events::{AccountId, TokenId};
use common_math::Rational;

use crate::{positions::liquidation::LiquidationCall, LendingPool};

/// One call into the pool, with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Deposit {
        account: AccountId,
        amount: Rational,
        token: TokenId,
    },
    Borrow {
        account: AccountId,
        amount: Rational,
        token: TokenId,
    },
    Repay {
        account: AccountId,
        amount: Rational,
        token: TokenId,
    },
    Redeem {
        account: AccountId,
        amount: Rational,
        token: TokenId,
    },
    Liquidate(LiquidationCall),
    AccrueInterest,
    SetPrice {
        token: TokenId,
        price: Rational,
    },
    SetLiqThreshold(Rational),
    SetLiqRewardFactor(Rational),
    SetInterestRate {
        alpha: Rational,
        beta: Rational,
    },
}

impl Command {
    /// Operation name as it appears in traces.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deposit { .. } => "deposit",
            Command::Borrow { .. } => "borrow",
            Command::Repay { .. } => "repay",
            Command::Redeem { .. } => "redeem",
            Command::Liquidate(_) => "liquidate",
            Command::AccrueInterest => "accrue_interest",
            Command::SetPrice { .. } => "set_price",
            Command::SetLiqThreshold(_) => "set_liq_threshold",
            Command::SetLiqRewardFactor(_) => "set_liq_reward_factor",
            Command::SetInterestRate { .. } => "set_interest_rate",
        }
    }
}

impl LendingPool {
    /// Dispatches `command` to the matching operation.
    ///
    /// # Returns
    /// - `Some(amount)` for operations that hand an amount back (minted shares,
    ///   borrowed or redeemed underlying, seized shares), `None` otherwise.
    pub fn execute(&mut self, command: &Command) -> Result<Option<Rational>, PoolError> {
        match command {
            Command::Deposit {
                account,
                amount,
                token,
            } => self.deposit(account, amount, token).map(Some),
            Command::Borrow {
                account,
                amount,
                token,
            } => self.borrow(account, amount, token).map(Some),
            Command::Repay {
                account,
                amount,
                token,
            } => self.repay(account, amount, token).map(|()| None),
            Command::Redeem {
                account,
                amount,
                token,
            } => self.redeem(account, amount, token).map(Some),
            Command::Liquidate(call) => self
                .liquidate(
                    &call.liquidator,
                    &call.amount,
                    &call.token_debt,
                    &call.debtor,
                    &call.token_minted,
                )
                .map(Some),
            Command::AccrueInterest => {
                self.accrue_interest();
                Ok(None)
            }
            Command::SetPrice { token, price } => self.set_price(token, price).map(|()| None),
            Command::SetLiqThreshold(tliq) => self.set_liq_threshold(tliq).map(|()| None),
            Command::SetLiqRewardFactor(rliq) => self.set_liq_reward_factor(rliq).map(|()| None),
            Command::SetInterestRate { alpha, beta } => {
                self.set_interest_rate(alpha, beta).map(|()| None)
            }
        }
    }
}
