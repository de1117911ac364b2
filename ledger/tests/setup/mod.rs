use ledger::Ledger;
use lending_pool::{ratio, to_rational, AccountId, Rational, TokenId};

pub fn q(value: u64) -> Rational {
    to_rational(value)
}

pub fn frac(numerator: u64, denominator: u64) -> Rational {
    ratio(numerator, denominator)
}

pub fn account(name: &str) -> AccountId {
    AccountId::from(name)
}

pub fn token(name: &str) -> TokenId {
    TokenId::from(name)
}

pub struct LedgerTestState {
    pub ledger: Ledger,
}

impl LedgerTestState {
    pub fn new() -> Self {
        LedgerTestState {
            ledger: Ledger::new(),
        }
    }

    pub fn faucet(&mut self, to: &str, amount: u64, token_id: &str) {
        self.ledger
            .faucet(&account(to), &q(amount), &token(token_id))
            .unwrap();
    }

    pub fn balance(&self, holder: &str, token_id: &str) -> Rational {
        self.ledger.balance(&account(holder), &token(token_id))
    }

    pub fn credit(&self, holder: &str, token_id: &str) -> Rational {
        self.ledger.pool().credit(&token(token_id), &account(holder))
    }

    pub fn debt(&self, holder: &str, token_id: &str) -> Rational {
        self.ledger.pool().debt(&token(token_id), &account(holder))
    }

    pub fn reserve(&self, token_id: &str) -> Rational {
        self.ledger.pool().reserve(&token(token_id))
    }
}
