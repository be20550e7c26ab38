#![cfg(test)]

use crate::errors::BasketError;
use crate::wallet::Wallet;
use crate::BasketContract;
use soroban_sdk::{testutils::Address as _, Address, Env};

#[test]
fn test_native_credit_and_debit() {
    let env = Env::default();
    let mut wallet = Wallet::new(&env);

    wallet.credit_native(1_000).unwrap();
    wallet.credit_native(500).unwrap();
    assert_eq!(wallet.native, 1_500);

    wallet.debit_native(1_500).unwrap();
    assert_eq!(wallet.native, 0);
}

#[test]
fn test_native_debit_over_balance_fails() {
    let env = Env::default();
    let mut wallet = Wallet::new(&env);
    wallet.credit_native(100).unwrap();

    assert_eq!(wallet.debit_native(101), Err(BasketError::InsufficientBalance));
    // The failed debit must not touch the balance.
    assert_eq!(wallet.native, 100);
}

#[test]
fn test_native_credit_overflow_detected() {
    let env = Env::default();
    let mut wallet = Wallet::new(&env);
    wallet.credit_native(i128::MAX).unwrap();

    assert_eq!(wallet.credit_native(1), Err(BasketError::AmountOverflow));
}

#[test]
fn test_token_credit_and_debit() {
    let env = Env::default();
    let token = Address::generate(&env);
    let mut wallet = Wallet::new(&env);

    wallet.credit_token(&token, 700).unwrap();
    assert_eq!(wallet.token_balance(&token), 700);

    wallet.debit_token(&token, 200).unwrap();
    assert_eq!(wallet.token_balance(&token), 500);
}

#[test]
fn test_token_entry_removed_at_zero() {
    let env = Env::default();
    let token = Address::generate(&env);
    let mut wallet = Wallet::new(&env);

    wallet.credit_token(&token, 300).unwrap();
    wallet.debit_token(&token, 300).unwrap();

    assert_eq!(wallet.token_balance(&token), 0);
    assert_eq!(wallet.tokens.len(), 0);
}

#[test]
fn test_token_debit_unknown_token_fails() {
    let env = Env::default();
    let token = Address::generate(&env);
    let mut wallet = Wallet::new(&env);

    assert_eq!(
        wallet.debit_token(&token, 1),
        Err(BasketError::InsufficientBalance)
    );
}

#[test]
fn test_token_balances_are_independent() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let mut wallet = Wallet::new(&env);

    wallet.credit_token(&a, 100).unwrap();
    wallet.credit_token(&b, 200).unwrap();
    wallet.debit_token(&a, 100).unwrap();

    assert_eq!(wallet.token_balance(&a), 0);
    assert_eq!(wallet.token_balance(&b), 200);
}

#[test]
fn test_save_and_load_round_trip() {
    let env = Env::default();
    let contract_id = env.register(BasketContract, ());
    let token = Address::generate(&env);

    env.as_contract(&contract_id, || {
        let mut wallet = Wallet::new(&env);
        wallet.credit_native(42).unwrap();
        wallet.credit_token(&token, 7).unwrap();
        wallet.save(&env, 3);

        let loaded = Wallet::load(&env, 3).unwrap();
        assert_eq!(loaded.native, 42);
        assert_eq!(loaded.token_balance(&token), 7);
    });
}

#[test]
fn test_load_missing_wallet_fails() {
    let env = Env::default();
    let contract_id = env.register(BasketContract, ());

    env.as_contract(&contract_id, || {
        assert_eq!(
            Wallet::load(&env, 0).unwrap_err(),
            BasketError::PortfolioNotFound
        );
    });
}
