use soroban_sdk::{contracttype, Address, Env, Map};

use crate::errors::BasketError;
use crate::types::DataKey;

/// Custody record for one portfolio. Holds the native balance and a
/// map of secondary token balances. Created atomically with the
/// portfolio id and never destroyed; balances may reach zero but the
/// record persists.
///
/// Mutations happen on an in-memory copy; callers persist with `save`
/// only after the whole operation has succeeded, so a failed operation
/// leaves the stored record untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Wallet {
    pub native: i128,
    pub tokens: Map<Address, i128>,
}

impl Wallet {
    pub fn new(env: &Env) -> Self {
        Self {
            native: 0,
            tokens: Map::new(env),
        }
    }

    pub fn token_balance(&self, token: &Address) -> i128 {
        self.tokens.get(token.clone()).unwrap_or(0)
    }

    pub fn credit_native(&mut self, amount: i128) -> Result<(), BasketError> {
        self.native = self
            .native
            .checked_add(amount)
            .ok_or(BasketError::AmountOverflow)?;
        Ok(())
    }

    pub fn debit_native(&mut self, amount: i128) -> Result<(), BasketError> {
        if amount > self.native {
            return Err(BasketError::InsufficientBalance);
        }
        self.native -= amount;
        Ok(())
    }

    pub fn credit_token(&mut self, token: &Address, amount: i128) -> Result<(), BasketError> {
        let balance = self.token_balance(token);
        let updated = balance
            .checked_add(amount)
            .ok_or(BasketError::AmountOverflow)?;
        self.tokens.set(token.clone(), updated);
        Ok(())
    }

    pub fn debit_token(&mut self, token: &Address, amount: i128) -> Result<(), BasketError> {
        let balance = self.token_balance(token);
        if amount > balance {
            return Err(BasketError::InsufficientBalance);
        }
        let remaining = balance - amount;
        if remaining == 0 {
            self.tokens.remove(token.clone());
        } else {
            self.tokens.set(token.clone(), remaining);
        }
        Ok(())
    }

    pub fn load(env: &Env, portfolio_id: u64) -> Result<Self, BasketError> {
        env.storage()
            .persistent()
            .get(&DataKey::Wallet(portfolio_id))
            .ok_or(BasketError::PortfolioNotFound)
    }

    pub fn save(&self, env: &Env, portfolio_id: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::Wallet(portfolio_id), self);
    }
}
