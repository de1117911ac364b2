pub mod constants;
pub mod setup;
use constants::*;
use lending_pool::ExtendedRational;
use num_traits::Zero;
use setup::*;

#[test]
fn test_queries_on_unknown_entries_return_zero() {
    let state = LendingPoolTestState::new();

    assert!(state.reserve(UNLISTED_TOKEN).is_zero());
    assert!(state.debt(UNLISTED_TOKEN, ALICE).is_zero());
    assert!(state.credit(UNLISTED_TOKEN, ALICE).is_zero());
    assert!(state.pool.debt_supply(&token(UNLISTED_TOKEN)).is_zero());
    assert!(state.pool.credit_supply(&token(UNLISTED_TOKEN)).is_zero());
    assert!(state.pool.utilization(&token(UNLISTED_TOKEN)).is_zero());
    assert_eq!(state.exchange_rate(UNLISTED_TOKEN), q(1));
    assert_eq!(state.health(ALICE), ExtendedRational::Infinite);
    assert!(state.pool.tokens().is_empty());
    assert!(state.pool.accounts().is_empty());
}

#[test]
fn test_reads_never_insert() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(10), TOKEN_T);
    let before = state.pool.snapshot();

    let _ = state.credit(TOKEN_T, BOB);
    let _ = state.debt(TOKEN_T, BOB);
    let _ = state.health(BOB);
    let _ = state.pool.value_minted(&account(CAROL));

    assert_eq!(state.pool.snapshot(), before);
}

#[test]
fn test_supplies_and_values() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(100), TOKEN_T);
    state.deposit(BOB, q(50), TOKEN_T);
    state.deposit(BOB, q(30), TOKEN_U);
    state.set_price(TOKEN_U, q(3));
    state.borrow(ALICE, q(20), TOKEN_U);

    assert_eq!(state.pool.credit_supply(&token(TOKEN_T)), q(150));
    assert_eq!(state.pool.debt_supply(&token(TOKEN_U)), q(20));
    assert_eq!(state.pool.value_minted(&account(BOB)), q(140));
    assert_eq!(state.pool.value_debt(&account(ALICE)), q(60));
    assert_eq!(
        state.pool.collateral(&account(ALICE)),
        ExtendedRational::Finite(frac(5, 3))
    );
    assert_eq!(state.pool.accounts(), vec![account(ALICE), account(BOB)]);
    assert_eq!(state.pool.tokens(), vec![token(TOKEN_T), token(TOKEN_U)]);
}

#[test]
fn test_utilization_and_interest_rate() {
    let mut state = LendingPoolTestState::new();
    state.pool.set_interest_rate(&frac(1, 5), &frac(1, 100)).unwrap();
    state.deposit(ALICE, q(100), TOKEN_T);
    state.borrow(ALICE, q(25), TOKEN_T);

    assert_eq!(state.pool.utilization(&token(TOKEN_T)), frac(1, 4));
    // 1/5 * 1/4 + 1/100
    assert_eq!(state.pool.interest_rate(&token(TOKEN_T)), frac(6, 100));
}

#[test]
fn test_exchange_rates_omit_tokens_at_par() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(100), TOKEN_T);
    state.deposit(BOB, q(100), TOKEN_U);
    assert!(state.pool.exchange_rates().is_empty());

    state.borrow(ALICE, q(50), TOKEN_T);
    state.pool.accrue_interest();

    let rates = state.pool.exchange_rates();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[&token(TOKEN_T)], frac(106, 100));
}

#[test]
fn test_state_rendering() {
    let mut state = LendingPoolTestState::new();
    state.deposit(ALICE, q(100), TOKEN_T);
    state.borrow(ALICE, q(50), TOKEN_T);
    state.set_price(TOKEN_T, frac(2, 3));

    assert_eq!(
        state.pool.display(true).to_string(),
        "{Reserves: {T: 50}, Debts: {T: {A: 50}}, Minted: {T: {A: 100}}, \
         Prices: {T: 2/3}, LastReverted: false}"
    );
    assert_eq!(
        state.pool.display(false).to_string(),
        "{Reserves: {T: 50}, Debts: {T: {A: 50}}, Minted: {T: {A: 100}}, \
         Prices: {T: 0.666667}, LastReverted: false}"
    );

    let _ = state
        .pool
        .borrow(&account(ALICE), &q(1_000), &token(TOKEN_T));
    assert!(state.pool.display(true).to_string().ends_with("LastReverted: true}"));
}

#[test]
fn test_invariants_hold_after_operations() {
    let mut state = LendingPoolTestState::new();
    setup_undercollateralized_borrower(&mut state);
    state.liquidate(CAROL, q(10), TOKEN_U, ALICE, TOKEN_T);
    state.pool.accrue_interest();

    assert!(state.pool.check_invariants().is_ok());
}
