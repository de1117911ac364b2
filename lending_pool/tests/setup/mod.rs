use crate::constants::*;

use lending_pool::{
    ratio, to_rational, AccountId, ExtendedRational, LendingPool, PoolError, Rational, RiskParams,
    TokenId,
};

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

pub struct LendingPoolTestState {
    pub pool: LendingPool,
}

impl LendingPoolTestState {
    pub fn new() -> Self {
        LendingPoolTestState {
            pool: LendingPool::new(),
        }
    }

    pub fn with_params(params: RiskParams) -> Self {
        LendingPoolTestState {
            pool: LendingPool::with_params(params).unwrap(),
        }
    }

    pub fn deposit(&mut self, from: &str, amount: Rational, token_id: &str) -> Rational {
        let minted = self
            .pool
            .deposit(&account(from), &amount, &token(token_id))
            .unwrap();
        assert!(!self.pool.last_reverted());
        minted
    }

    pub fn borrow(&mut self, from: &str, amount: Rational, token_id: &str) -> Rational {
        let borrowed = self
            .pool
            .borrow(&account(from), &amount, &token(token_id))
            .unwrap();
        assert!(!self.pool.last_reverted());
        borrowed
    }

    pub fn repay(&mut self, from: &str, amount: Rational, token_id: &str) {
        self.pool
            .repay(&account(from), &amount, &token(token_id))
            .unwrap();
        assert!(!self.pool.last_reverted());
    }

    pub fn redeem(&mut self, from: &str, amount: Rational, token_id: &str) -> Rational {
        let underlying = self
            .pool
            .redeem(&account(from), &amount, &token(token_id))
            .unwrap();
        assert!(!self.pool.last_reverted());
        underlying
    }

    pub fn liquidate(
        &mut self,
        liquidator: &str,
        amount: Rational,
        token_debt: &str,
        debtor: &str,
        token_minted: &str,
    ) -> Rational {
        let seized = self
            .pool
            .liquidate(
                &account(liquidator),
                &amount,
                &token(token_debt),
                &account(debtor),
                &token(token_minted),
            )
            .unwrap();
        assert!(!self.pool.last_reverted());
        seized
    }

    pub fn set_price(&mut self, token_id: &str, price: Rational) {
        self.pool.set_price(&token(token_id), &price).unwrap();
    }

    /// Runs `call`, asserts it reverted with `expected` and left the state untouched.
    pub fn assert_reverts<T: std::fmt::Debug>(
        &mut self,
        expected: PoolError,
        call: impl FnOnce(&mut LendingPool) -> Result<T, PoolError>,
    ) {
        let before = self.pool.snapshot();
        let events_before = self.pool.events().len();

        let result = call(&mut self.pool);

        assert_eq!(result.unwrap_err(), expected);
        assert!(self.pool.last_reverted());
        assert_eq!(self.pool.last_error(), Some(expected));
        assert_eq!(self.pool.snapshot(), before);
        assert_eq!(self.pool.events().len(), events_before);
    }

    pub fn reserve(&self, token_id: &str) -> Rational {
        self.pool.reserve(&token(token_id))
    }

    pub fn debt(&self, token_id: &str, holder: &str) -> Rational {
        self.pool.debt(&token(token_id), &account(holder))
    }

    pub fn credit(&self, token_id: &str, holder: &str) -> Rational {
        self.pool.credit(&token(token_id), &account(holder))
    }

    pub fn exchange_rate(&self, token_id: &str) -> Rational {
        self.pool.exchange_rate(&token(token_id))
    }

    pub fn health(&self, holder: &str) -> ExtendedRational {
        self.pool.health_factor(&account(holder))
    }
}

/// A deposits 100 T, B supplies 1000 U, A borrows 60 U, then U is repriced to
/// 4/3. A ends with collateral ratio 5/4 and health 5/6.
pub fn setup_undercollateralized_borrower(state: &mut LendingPoolTestState) {
    state.deposit(ALICE, q(100), TOKEN_T);
    state.deposit(BOB, q(1_000), TOKEN_U);
    state.borrow(ALICE, q(60), TOKEN_U);
    state.set_price(TOKEN_U, frac(4, 3));
}
