use common_errors::LedgerError;
use common_math::Rational;
use common_structs::{AccountId, TokenId};
use lending_pool::Command;

use crate::Ledger;

/// A call into the ledger: either a wallet mint or a pool operation routed
/// through the wallets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerCommand {
    Faucet {
        account: AccountId,
        amount: Rational,
        token: TokenId,
    },
    Pool(Command),
}

impl LedgerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LedgerCommand::Faucet { .. } => "faucet",
            LedgerCommand::Pool(command) => command.name(),
        }
    }
}

impl From<Command> for LedgerCommand {
    fn from(command: Command) -> Self {
        LedgerCommand::Pool(command)
    }
}

impl Ledger {
    /// Dispatches `command`; pool operations settle against the wallets.
    pub fn execute(&mut self, command: &LedgerCommand) -> Result<Option<Rational>, LedgerError> {
        let command = match command {
            LedgerCommand::Faucet {
                account,
                amount,
                token,
            } => return self.faucet(account, amount, token).map(|()| None),
            LedgerCommand::Pool(command) => command,
        };

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
