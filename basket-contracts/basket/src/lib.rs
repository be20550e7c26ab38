#![no_std]
use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

pub mod bridge;
pub mod errors;
pub mod events;
pub mod types;
pub mod validation;
pub mod wallet;

pub use bridge::{AssetAmount, BridgeOutcome};
pub use errors::BasketError;
pub use types::{AssetList, BridgeStep, DataKey, PERCENTAGE_SCALE};
pub use wallet::Wallet;

use events::Events;

#[contract]
pub struct BasketContract;

#[contractimpl]
impl BasketContract {
    /// One-time setup: admin, the wrapped native token used for base
    /// balances, and the default deposit cap.
    pub fn initialize(env: Env, admin: Address, native_token: Address) -> Result<(), BasketError> {
        if env.storage().instance().has(&DataKey::NativeToken) {
            return Err(BasketError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        env.storage()
            .instance()
            .set(&DataKey::MaxNativeDeposit, &types::DEFAULT_MAX_NATIVE_DEPOSIT);
        env.storage().instance().set(&DataKey::NextPortfolioId, &0u64);
        Ok(())
    }

    /// Admin-only adjustment of the per-call native deposit cap.
    pub fn set_max_deposit(env: Env, new_max: i128) -> Result<(), BasketError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(BasketError::NotInitialized)?;
        admin.require_auth();

        if new_max <= 0 {
            return Err(BasketError::NegativeAmount);
        }
        env.storage()
            .instance()
            .set(&DataKey::MaxNativeDeposit, &new_max);

        Events::max_deposit_changed(&env, admin, new_max, env.ledger().timestamp());
        Ok(())
    }

    /// Creates a portfolio: allocates an id, registers the caller as
    /// owner, funds the fresh wallet with the native amount and every
    /// secondary entry, then runs the bridge steps against it. Any
    /// failure rolls back the whole call, so no portfolio exists after
    /// an error.
    pub fn create_portfolio(
        env: Env,
        caller: Address,
        deposit: AssetList,
        native_amount: i128,
        steps: Vec<BridgeStep>,
    ) -> Result<u64, BasketError> {
        caller.require_auth();
        let native_token = read_native_token(&env)?;

        validation::validate_funding(&deposit, native_amount)?;
        validation::validate_native_deposit(native_amount, read_max_deposit(&env))?;

        let portfolio_id = next_portfolio_id(&env);
        acquire_lock(&env, portfolio_id)?;

        env.storage()
            .persistent()
            .set(&DataKey::Owner(portfolio_id), &caller);

        let mut wallet = Wallet::new(&env);
        fund_wallet(&env, &native_token, &caller, &mut wallet, &deposit, native_amount)?;
        run_bridges(&env, &native_token, &mut wallet, &steps)?;
        wallet.save(&env, portfolio_id);

        release_lock(&env, portfolio_id);
        Events::portfolio_created(
            &env,
            portfolio_id,
            caller,
            native_amount,
            env.ledger().timestamp(),
        );
        Ok(portfolio_id)
    }

    /// Adds funds to an existing portfolio. Same funding and bridge
    /// pipeline as creation, gated on ownership.
    pub fn deposit_portfolio(
        env: Env,
        caller: Address,
        portfolio_id: u64,
        deposit: AssetList,
        native_amount: i128,
        steps: Vec<BridgeStep>,
    ) -> Result<(), BasketError> {
        caller.require_auth();
        let native_token = read_native_token(&env)?;
        require_owner(&env, portfolio_id, &caller)?;

        validation::validate_funding(&deposit, native_amount)?;
        validation::validate_native_deposit(native_amount, read_max_deposit(&env))?;

        acquire_lock(&env, portfolio_id)?;

        let mut wallet = Wallet::load(&env, portfolio_id)?;
        fund_wallet(&env, &native_token, &caller, &mut wallet, &deposit, native_amount)?;
        run_bridges(&env, &native_token, &mut wallet, &steps)?;
        wallet.save(&env, portfolio_id);

        release_lock(&env, portfolio_id);
        Events::deposit_made(
            &env,
            portfolio_id,
            caller,
            native_amount,
            env.ledger().timestamp(),
        );
        Ok(())
    }

    /// Pays out from a portfolio. Bridge steps run first so adapters
    /// can convert holdings into the desired output tokens, then the
    /// native leg pays `balance * percentage / 100_000` (truncating)
    /// and each `outputs` entry pays its absolute amount.
    ///
    /// The two legs intentionally use different units: the native leg
    /// is a share of the balance at call time, secondary legs are
    /// exact amounts.
    pub fn withdraw_portfolio(
        env: Env,
        caller: Address,
        portfolio_id: u64,
        outputs: AssetList,
        percentage: u32,
        steps: Vec<BridgeStep>,
    ) -> Result<i128, BasketError> {
        caller.require_auth();
        let native_token = read_native_token(&env)?;
        require_owner(&env, portfolio_id, &caller)?;

        validation::validate_withdrawal(&outputs, percentage)?;

        acquire_lock(&env, portfolio_id)?;

        let mut wallet = Wallet::load(&env, portfolio_id)?;
        run_bridges(&env, &native_token, &mut wallet, &steps)?;

        let engine = env.current_contract_address();
        let native_payout = validation::native_share(wallet.native, percentage)?;
        if native_payout > 0 {
            wallet.debit_native(native_payout)?;
            token::Client::new(&env, &native_token).transfer(&engine, &caller, &native_payout);
        }

        for (out_token, out_amount) in outputs.tokens.iter().zip(outputs.amounts.iter()) {
            wallet.debit_token(&out_token, out_amount)?;
            token::Client::new(&env, &out_token).transfer(&engine, &caller, &out_amount);
        }

        wallet.save(&env, portfolio_id);
        release_lock(&env, portfolio_id);

        Events::withdrawal_made(
            &env,
            portfolio_id,
            caller,
            native_payout,
            percentage,
            env.ledger().timestamp(),
        );
        Ok(native_payout)
    }

    pub fn owner_of(env: Env, portfolio_id: u64) -> Result<Address, BasketError> {
        read_owner(&env, portfolio_id)
    }

    /// Transfers portfolio ownership. Wallet contents are untouched;
    /// only deposit/withdraw authority moves.
    pub fn transfer(
        env: Env,
        from: Address,
        portfolio_id: u64,
        to: Address,
    ) -> Result<(), BasketError> {
        from.require_auth();
        let owner = read_owner(&env, portfolio_id)?;
        if owner != from {
            return Err(BasketError::NotOwner);
        }
        env.storage()
            .persistent()
            .set(&DataKey::Owner(portfolio_id), &to);

        Events::ownership_transferred(&env, portfolio_id, from, to, env.ledger().timestamp());
        Ok(())
    }

    pub fn total_portfolios(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::NextPortfolioId)
            .unwrap_or(0)
    }

    pub fn max_deposit(env: Env) -> i128 {
        read_max_deposit(&env)
    }

    pub fn native_balance_of(env: Env, portfolio_id: u64) -> Result<i128, BasketError> {
        let wallet = Wallet::load(&env, portfolio_id)?;
        Ok(wallet.native)
    }

    pub fn token_balance_of(
        env: Env,
        portfolio_id: u64,
        token: Address,
    ) -> Result<i128, BasketError> {
        let wallet = Wallet::load(&env, portfolio_id)?;
        Ok(wallet.token_balance(&token))
    }
}

fn read_native_token(env: &Env) -> Result<Address, BasketError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(BasketError::NotInitialized)
}

fn read_max_deposit(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MaxNativeDeposit)
        .unwrap_or(types::DEFAULT_MAX_NATIVE_DEPOSIT)
}

/// Allocates the next id and bumps the counter. The bump is rolled
/// back with everything else if the surrounding call fails.
fn next_portfolio_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextPortfolioId)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::NextPortfolioId, &(id + 1));
    id
}

fn read_owner(env: &Env, portfolio_id: u64) -> Result<Address, BasketError> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner(portfolio_id))
        .ok_or(BasketError::PortfolioNotFound)
}

fn require_owner(env: &Env, portfolio_id: u64, caller: &Address) -> Result<(), BasketError> {
    let owner = read_owner(env, portfolio_id)?;
    if owner != *caller {
        return Err(BasketError::NotOwner);
    }
    Ok(())
}

/// Per-portfolio operation lock held in temporary storage. An adapter
/// that calls back into the engine for the same portfolio mid-flight
/// finds the flag set and is rejected.
fn acquire_lock(env: &Env, portfolio_id: u64) -> Result<(), BasketError> {
    let key = DataKey::OpLock(portfolio_id);
    if env.storage().temporary().has(&key) {
        return Err(BasketError::ReentrancyDetected);
    }
    env.storage().temporary().set(&key, &true);
    Ok(())
}

fn release_lock(env: &Env, portfolio_id: u64) {
    env.storage()
        .temporary()
        .remove(&DataKey::OpLock(portfolio_id));
}

/// Moves the native leg and every secondary entry from the caller into
/// engine custody, mirroring each transfer in the wallet ledger.
fn fund_wallet(
    env: &Env,
    native_token: &Address,
    caller: &Address,
    wallet: &mut Wallet,
    deposit: &AssetList,
    native_amount: i128,
) -> Result<(), BasketError> {
    let engine = env.current_contract_address();

    if native_amount > 0 {
        token::Client::new(env, native_token).transfer(caller, &engine, &native_amount);
        wallet.credit_native(native_amount)?;
    }

    for (dep_token, dep_amount) in deposit.tokens.iter().zip(deposit.amounts.iter()) {
        token::Client::new(env, &dep_token).transfer(caller, &engine, &dep_amount);
        wallet.credit_token(&dep_token, dep_amount)?;
    }

    Ok(())
}

fn run_bridges(
    env: &Env,
    native_token: &Address,
    wallet: &mut Wallet,
    steps: &Vec<BridgeStep>,
) -> Result<(), BasketError> {
    if steps.is_empty() {
        return Ok(());
    }
    bridge::execute_steps(env, native_token, wallet, steps)
        .map_err(|_| BasketError::BridgeStepFailed)
}

#[cfg(test)]
mod wallet_tests;
