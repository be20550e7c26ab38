// basket/src/errors.rs
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BasketError {
    AlreadyInitialized = 1,   // initialize called twice
    NotInitialized = 2,       // engine used before initialize
    LengthMismatch = 3,       // tokens and amounts lists differ in length
    ZeroAmount = 4,           // a secondary amount is zero or negative
    EmptyTransfer = 5,        // no native value and no secondary entries
    NegativeAmount = 6,       // native amount below zero
    NotOwner = 7,             // caller does not own the portfolio
    PortfolioNotFound = 8,    // unknown portfolio id
    InsufficientBalance = 9,  // wallet balance too low for debit
    BridgeStepFailed = 10,    // an adapter step returned an error
    PercentageOutOfRange = 11, // withdraw percentage above full scale
    ReentrancyDetected = 12,  // nested call on the same portfolio
    AmountOverflow = 13,      // amount exceeds safe bounds
    DepositBelowMinimum = 14, // native deposit under the floor
    DepositAboveMaximum = 15, // native deposit over the configured cap
}
