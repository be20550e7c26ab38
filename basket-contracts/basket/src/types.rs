use soroban_sdk::{contracttype, Address, Bytes, Vec};

/// Full scale for withdraw percentages, expressed in hundred-thousandths.
/// 100_000 = 100.000%.
pub const PERCENTAGE_SCALE: u32 = 100_000;

/// Smallest accepted native deposit, in stroops (0.001 XLM).
pub const MIN_NATIVE_DEPOSIT: i128 = 10_000;

/// Default cap for a single native deposit, in stroops (100 XLM).
/// Adjustable by the admin via `set_max_deposit`.
pub const DEFAULT_MAX_NATIVE_DEPOSIT: i128 = 1_000_000_000;

/// Parallel lists of secondary tokens and their amounts.
/// Funding paths read amounts as absolute credits; withdrawal paths
/// read them as absolute payouts.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AssetList {
    pub tokens: Vec<Address>,
    pub amounts: Vec<i128>,
}

/// One adapter invocation: target contract plus an opaque payload the
/// engine never interprets. Order within a list is caller-controlled
/// and significant.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BridgeStep {
    pub adapter: Address,
    pub payload: Bytes,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Admin,
    NativeToken,
    MaxNativeDeposit,
    NextPortfolioId,
    Owner(u64),
    Wallet(u64),
    OpLock(u64),
}
