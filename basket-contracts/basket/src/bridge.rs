use soroban_sdk::{contractclient, contracttype, token, Address, Bytes, Env, Vec};

use crate::errors::BasketError;
use crate::types::BridgeStep;
use crate::wallet::Wallet;

/// One secondary-token leg of an adapter outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AssetAmount {
    pub token: Address,
    pub amount: i128,
}

/// What an adapter reports back after interpreting its payload: the
/// legs it consumed from the calling wallet and the legs it produced
/// for it. The engine settles both sides itself, so an adapter can
/// only move value it actually delivers.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BridgeOutcome {
    pub spent_native: i128,
    pub received_native: i128,
    pub spent: Vec<AssetAmount>,
    pub received: Vec<AssetAmount>,
}

/// Adapter ABI consumed by the executor. Adapters receive the engine
/// address as settlement context and must approve it to pull every
/// leg they report as received.
#[contractclient(name = "BridgeAdapterClient")]
pub trait BridgeAdapter {
    fn execute(env: Env, context: Address, payload: Bytes) -> BridgeOutcome;
}

/// Index of the step that broke an execution, for diagnostics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepFailure {
    pub index: u32,
}

/// Runs every step strictly in order against the wallet. Any adapter
/// error, malformed outcome, or failed settlement aborts with the
/// failing index; the caller converts that into a full operation
/// rollback.
///
/// An empty step list is a valid no-op.
pub fn execute_steps(
    env: &Env,
    native_token: &Address,
    wallet: &mut Wallet,
    steps: &Vec<BridgeStep>,
) -> Result<(), StepFailure> {
    let engine = env.current_contract_address();

    for (index, step) in steps.iter().enumerate() {
        let index = index as u32;
        let adapter = BridgeAdapterClient::new(env, &step.adapter);

        let outcome = match adapter.try_execute(&engine, &step.payload) {
            Ok(Ok(outcome)) => outcome,
            _ => {
                #[cfg(feature = "logging")]
                {
                    use soroban_sdk::symbol_short;
                    env.events()
                        .publish((symbol_short!("step_fail"), step.adapter.clone()), index);
                }
                return Err(StepFailure { index });
            }
        };

        if settle_outcome(env, native_token, wallet, &step.adapter, &outcome).is_err() {
            #[cfg(feature = "logging")]
            {
                use soroban_sdk::symbol_short;
                env.events()
                    .publish((symbol_short!("step_fail"), step.adapter.clone()), index);
            }
            return Err(StepFailure { index });
        }
    }

    Ok(())
}

/// Applies one outcome to the wallet and moves the matching tokens.
/// Spent legs are debited from the ledger and transferred to the
/// adapter; received legs are pulled from the adapter against the
/// allowance it granted during `execute`, then credited. Pulling
/// before crediting means a leg the adapter cannot back fails here
/// instead of inflating the ledger.
fn settle_outcome(
    env: &Env,
    native_token: &Address,
    wallet: &mut Wallet,
    adapter: &Address,
    outcome: &BridgeOutcome,
) -> Result<(), BasketError> {
    if outcome.spent_native < 0 || outcome.received_native < 0 {
        return Err(BasketError::NegativeAmount);
    }
    for leg in outcome.spent.iter().chain(outcome.received.iter()) {
        if leg.amount <= 0 {
            return Err(BasketError::ZeroAmount);
        }
    }

    let engine = env.current_contract_address();

    if outcome.spent_native > 0 {
        wallet.debit_native(outcome.spent_native)?;
        token::Client::new(env, native_token).transfer(&engine, adapter, &outcome.spent_native);
    }
    for leg in outcome.spent.iter() {
        wallet.debit_token(&leg.token, leg.amount)?;
        token::Client::new(env, &leg.token).transfer(&engine, adapter, &leg.amount);
    }

    if outcome.received_native > 0 {
        pull_leg(env, native_token, adapter, &engine, outcome.received_native)?;
        wallet.credit_native(outcome.received_native)?;
    }
    for leg in outcome.received.iter() {
        pull_leg(env, &leg.token, adapter, &engine, leg.amount)?;
        wallet.credit_token(&leg.token, leg.amount)?;
    }

    Ok(())
}

fn pull_leg(
    env: &Env,
    token: &Address,
    adapter: &Address,
    engine: &Address,
    amount: i128,
) -> Result<(), BasketError> {
    let client = token::Client::new(env, token);
    match client.try_transfer_from(engine, adapter, engine, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(BasketError::BridgeStepFailed),
    }
}
