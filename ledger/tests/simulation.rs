pub mod constants;
pub mod setup;
use std::collections::BTreeMap;

use constants::*;
use ledger::LedgerCommand;
use lending_pool::{Command, LiquidationCall, Rational, TokenId};
use num_traits::{Signed, Zero};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use setup::*;

fn pick<'a>(rng: &mut ChaCha8Rng, names: &[&'a str]) -> &'a str {
    names[rng.random_range(0..names.len())]
}

fn random_command(rng: &mut ChaCha8Rng) -> LedgerCommand {
    let from = account(pick(rng, &SIMULATION_ACCOUNTS));
    let token_id = token(pick(rng, &SIMULATION_TOKENS));
    let amount = q(rng.random_range(1..=100));

    match rng.random_range(0..12) {
        0..=2 => LedgerCommand::Faucet {
            account: from,
            amount,
            token: token_id,
        },
        3..=4 => Command::Deposit {
            account: from,
            amount,
            token: token_id,
        }
        .into(),
        5 => Command::Borrow {
            account: from,
            amount,
            token: token_id,
        }
        .into(),
        6 => Command::Repay {
            account: from,
            amount,
            token: token_id,
        }
        .into(),
        7 => Command::Redeem {
            account: from,
            amount,
            token: token_id,
        }
        .into(),
        8 => Command::Liquidate(LiquidationCall {
            liquidator: from,
            amount,
            token_debt: token_id,
            debtor: account(pick(rng, &SIMULATION_ACCOUNTS)),
            token_minted: token(pick(rng, &SIMULATION_TOKENS)),
        })
        .into(),
        9 => Command::AccrueInterest.into(),
        _ => Command::SetPrice {
            token: token_id,
            price: frac(rng.random_range(1..=6), rng.random_range(1..=3)),
        }
        .into(),
    }
}

/// Units of each token held in wallets plus the pool's reserve.
fn circulating(state: &LedgerTestState) -> BTreeMap<TokenId, Rational> {
    let mut totals: BTreeMap<TokenId, Rational> = BTreeMap::new();
    for (token_id, wallet) in state.ledger.wallets() {
        let total = totals.entry(token_id.clone()).or_insert_with(Rational::zero);
        for balance in wallet.values() {
            *total += balance;
        }
    }
    for token_id in state.ledger.pool().tokens() {
        let reserve = state.ledger.pool().reserve(&token_id);
        *totals.entry(token_id).or_insert_with(Rational::zero) += reserve;
    }
    totals.retain(|_, total| !total.is_zero());
    totals
}

#[test]
fn test_tokens_only_enter_through_the_faucet() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut state = LedgerTestState::new();
    let mut minted: BTreeMap<TokenId, Rational> = BTreeMap::new();

    for _ in 0..SIMULATION_STEPS {
        let command = random_command(&mut rng);
        let wallets_before = state.ledger.wallets().clone();

        let result = state.ledger.execute(&command);

        match (&command, &result) {
            (
                LedgerCommand::Faucet {
                    amount, token, ..
                },
                Ok(_),
            ) => {
                *minted.entry(token.clone()).or_insert_with(Rational::zero) += amount;
            }
            (_, Err(_)) => {
                assert_eq!(state.ledger.wallets(), &wallets_before);
                assert!(state.ledger.last_reverted());
            }
            _ => assert!(!state.ledger.last_reverted()),
        }

        assert_eq!(circulating(&state), minted);
        assert!(state
            .ledger
            .wallets()
            .values()
            .flat_map(|wallet| wallet.values())
            .all(|balance| !balance.is_negative()));
        state.ledger.pool().check_invariants().unwrap();
    }
}
