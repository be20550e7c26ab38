//! Reference bridge adapter: a fixed-rate converter between a
//! configured token pair (plus the native token). It interprets the
//! opaque payloads the engine forwards, reports the legs it consumed
//! and produced, and approves the calling engine to pull every
//! produced leg from its own inventory.
#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, token, Address, Bytes, Env, Vec,
};

/// Convert `amount` of the configured input token into the output token.
pub const OP_TOKEN_TO_TOKEN: u8 = 0;
/// Convert `amount` of the native token into the output token.
pub const OP_NATIVE_TO_TOKEN: u8 = 1;
/// Convert `amount` of the configured input token into the native token.
pub const OP_TOKEN_TO_NATIVE: u8 = 2;
/// Always fail. Used to exercise caller rollback paths.
pub const OP_FAIL: u8 = 0xFF;

const PAYLOAD_LEN: u32 = 17;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AdapterError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    MalformedPayload = 3, // wrong length, unknown opcode, or non-positive amount
    Rejected = 4,         // explicit failure opcode
    AmountOverflow = 5,
    InvalidRate = 6,
}

/// Mirrors the engine's outcome leg type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AssetAmount {
    pub token: Address,
    pub amount: i128,
}

/// Mirrors the engine's outcome type; structural compatibility is what
/// matters on the wire.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BridgeOutcome {
    pub spent_native: i128,
    pub received_native: i128,
    pub spent: Vec<AssetAmount>,
    pub received: Vec<AssetAmount>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub native_token: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub rate_num: i128,
    pub rate_den: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Config,
}

#[contract]
pub struct SwapAdapterContract;

#[contractimpl]
impl SwapAdapterContract {
    pub fn initialize(
        env: Env,
        native_token: Address,
        token_in: Address,
        token_out: Address,
        rate_num: i128,
        rate_den: i128,
    ) -> Result<(), AdapterError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(AdapterError::AlreadyInitialized);
        }
        if rate_num <= 0 || rate_den <= 0 {
            return Err(AdapterError::InvalidRate);
        }
        let config = Config {
            native_token,
            token_in,
            token_out,
            rate_num,
            rate_den,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    /// Interprets one payload and reports the resulting legs. The
    /// produced leg is approved to `context` so the caller can pull it;
    /// the pull fails later if this adapter's inventory cannot back it.
    pub fn execute(env: Env, context: Address, payload: Bytes) -> Result<BridgeOutcome, AdapterError> {
        let config: Config = env
            .storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(AdapterError::NotInitialized)?;

        let (op, amount) = parse_payload(&payload)?;
        if op == OP_FAIL {
            return Err(AdapterError::Rejected);
        }

        let out_amount = amount
            .checked_mul(config.rate_num)
            .ok_or(AdapterError::AmountOverflow)?
            / config.rate_den;

        let mut outcome = BridgeOutcome {
            spent_native: 0,
            received_native: 0,
            spent: Vec::new(&env),
            received: Vec::new(&env),
        };

        let out_token = match op {
            OP_TOKEN_TO_TOKEN => {
                outcome.spent.push_back(AssetAmount {
                    token: config.token_in.clone(),
                    amount,
                });
                outcome.received.push_back(AssetAmount {
                    token: config.token_out.clone(),
                    amount: out_amount,
                });
                config.token_out
            }
            OP_NATIVE_TO_TOKEN => {
                outcome.spent_native = amount;
                outcome.received.push_back(AssetAmount {
                    token: config.token_out.clone(),
                    amount: out_amount,
                });
                config.token_out
            }
            OP_TOKEN_TO_NATIVE => {
                outcome.spent.push_back(AssetAmount {
                    token: config.token_in.clone(),
                    amount,
                });
                outcome.received_native = out_amount;
                config.native_token
            }
            _ => return Err(AdapterError::MalformedPayload),
        };

        let adapter = env.current_contract_address();
        let expiration = env.ledger().sequence() + 100;
        token::Client::new(&env, &out_token).approve(&adapter, &context, &out_amount, &expiration);

        Ok(outcome)
    }
}

fn parse_payload(payload: &Bytes) -> Result<(u8, i128), AdapterError> {
    if payload.len() != PAYLOAD_LEN {
        return Err(AdapterError::MalformedPayload);
    }
    let op = payload.get(0).ok_or(AdapterError::MalformedPayload)?;

    let mut amount: i128 = 0;
    for i in 1..PAYLOAD_LEN {
        let byte = payload.get(i).ok_or(AdapterError::MalformedPayload)?;
        amount = (amount << 8) | byte as i128;
    }
    if op != OP_FAIL && amount <= 0 {
        return Err(AdapterError::MalformedPayload);
    }
    Ok((op, amount))
}

/// Builds the opcode-plus-amount payload this adapter understands.
/// Amount is encoded big-endian over 16 bytes.
pub fn encode_swap(env: &Env, op: u8, amount: i128) -> Bytes {
    let mut payload = Bytes::new(env);
    payload.push_back(op);
    for byte in amount.to_be_bytes() {
        payload.push_back(byte);
    }
    payload
}
