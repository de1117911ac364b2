pub mod constants;
pub mod setup;
use constants::*;
use lending_pool::{PoolError, PoolEvent};
use num_traits::{One, Zero};
use setup::*;

#[test]
fn test_first_deposit_lists_token_and_mints_one_to_one() {
    let mut state = LendingPoolTestState::new();

    let minted = state.deposit(ALICE, q(100), TOKEN_T);

    assert_eq!(minted, q(100));
    assert_eq!(state.reserve(TOKEN_T), q(100));
    assert_eq!(state.credit(TOKEN_T, ALICE), q(100));
    assert!(state.debt(TOKEN_T, ALICE).is_zero());
    assert!(state.exchange_rate(TOKEN_T).is_one());
    assert!(state.pool.is_listed(&token(TOKEN_T)));
}

#[test]
fn test_first_deposit_opens_zero_debt_entry() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(100), TOKEN_T);
    state.deposit(BOB, q(10), TOKEN_T);

    let storage = state.pool.storage();
    assert!(storage.has_debt_entry(&token(TOKEN_T), &account(ALICE)));
    assert!(!storage.has_debt_entry(&token(TOKEN_T), &account(BOB)));
    assert_eq!(
        state.pool.display(true).to_string(),
        "{Reserves: {T: 110}, Debts: {T: {A: 0}}, Minted: {T: {A: 100, B: 10}}, \
         Prices: {}, LastReverted: false}"
    );

    state.assert_reverts(PoolError::InsufficientDebt, |pool| {
        pool.repay(&account(ALICE), &q(1), &token(TOKEN_T))
    });
    state.assert_reverts(PoolError::UnknownAddressEntry, |pool| {
        pool.repay(&account(BOB), &q(1), &token(TOKEN_T))
    });
}

#[test]
fn test_deposit_zero_or_negative_amount() {
    let mut state = LendingPoolTestState::new();

    state.assert_reverts(PoolError::InvalidAmount, |pool| {
        pool.deposit(&account(ALICE), &q(0), &token(TOKEN_T))
    });
    state.assert_reverts(PoolError::InvalidAmount, |pool| {
        pool.deposit(&account(ALICE), &-frac(1, 2), &token(TOKEN_T))
    });

    assert!(!state.pool.is_listed(&token(TOKEN_T)));
}

#[test]
fn test_deposit_after_interest_mints_at_exchange_rate() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(100), TOKEN_T);
    state.borrow(ALICE, q(50), TOKEN_T);
    state.pool.accrue_interest();

    // (50 + 56) / 100
    let rate_before = state.exchange_rate(TOKEN_T);
    assert_eq!(rate_before, frac(106, 100));

    let minted = state.deposit(BOB, q(53), TOKEN_T);

    assert_eq!(minted, q(50));
    assert_eq!(state.credit(TOKEN_T, BOB), q(50));
    assert_eq!(state.exchange_rate(TOKEN_T), rate_before);
}

#[test]
fn test_deposits_accumulate_per_account() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(10), TOKEN_T);
    state.deposit(ALICE, frac(5, 2), TOKEN_T);
    state.deposit(BOB, q(1), TOKEN_U);

    assert_eq!(state.credit(TOKEN_T, ALICE), frac(25, 2));
    assert_eq!(state.reserve(TOKEN_T), frac(25, 2));
    assert_eq!(state.reserve(TOKEN_U), q(1));
    assert!(state.credit(TOKEN_U, ALICE).is_zero());
}

#[test]
fn test_deposit_emits_event() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(100), TOKEN_T);

    let events = state.pool.take_events();
    assert_eq!(
        events,
        vec![PoolEvent::Deposit {
            account: account(ALICE),
            token: token(TOKEN_T),
            amount: q(100),
            minted: q(100),
        }]
    );
    assert!(state.pool.events().is_empty());
}
