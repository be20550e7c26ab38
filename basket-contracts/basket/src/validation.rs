use crate::errors::BasketError;
use crate::types::{AssetList, PERCENTAGE_SCALE};

/// Safe upper bound (prevents overflow abuse)
pub const MAX_AMOUNT: i128 = 1_000_000_000_000_000_000;

/// Gate for create/deposit inputs. Checks run in a fixed order:
/// length parity, native sign, per-entry amounts, then the
/// empty-transfer rule (native zero and no secondary entries).
pub fn validate_funding(assets: &AssetList, native_amount: i128) -> Result<(), BasketError> {
    if assets.tokens.len() != assets.amounts.len() {
        return Err(BasketError::LengthMismatch);
    }

    if native_amount < 0 {
        return Err(BasketError::NegativeAmount);
    }
    if native_amount > MAX_AMOUNT {
        return Err(BasketError::AmountOverflow);
    }

    for amount in assets.amounts.iter() {
        if amount <= 0 {
            return Err(BasketError::ZeroAmount);
        }
        if amount > MAX_AMOUNT {
            return Err(BasketError::AmountOverflow);
        }
    }

    if native_amount == 0 && assets.tokens.is_empty() {
        return Err(BasketError::EmptyTransfer);
    }

    Ok(())
}

/// Gate for withdraw inputs. Same length and amount rules as funding,
/// but the empty-transfer rule is relaxed: a positive percentage alone
/// authorizes the operation, as does a non-empty output list alone.
pub fn validate_withdrawal(outputs: &AssetList, percentage: u32) -> Result<(), BasketError> {
    if outputs.tokens.len() != outputs.amounts.len() {
        return Err(BasketError::LengthMismatch);
    }

    if percentage > PERCENTAGE_SCALE {
        return Err(BasketError::PercentageOutOfRange);
    }

    for amount in outputs.amounts.iter() {
        if amount <= 0 {
            return Err(BasketError::ZeroAmount);
        }
        if amount > MAX_AMOUNT {
            return Err(BasketError::AmountOverflow);
        }
    }

    if percentage == 0 && outputs.tokens.is_empty() {
        return Err(BasketError::EmptyTransfer);
    }

    Ok(())
}

/// Per-call bounds on the native leg of a funding operation. A zero
/// native amount is legal here (secondary-only funding) and skips the
/// bounds entirely.
pub fn validate_native_deposit(native_amount: i128, max: i128) -> Result<(), BasketError> {
    if native_amount == 0 {
        return Ok(());
    }
    if native_amount < crate::types::MIN_NATIVE_DEPOSIT {
        return Err(BasketError::DepositBelowMinimum);
    }
    if native_amount > max {
        return Err(BasketError::DepositAboveMaximum);
    }
    Ok(())
}

/// Truncating fixed-point share of a native balance.
/// `percentage` is in hundred-thousandths; callers range-check it first.
pub fn native_share(balance: i128, percentage: u32) -> Result<i128, BasketError> {
    balance
        .checked_mul(percentage as i128)
        .map(|scaled| scaled / PERCENTAGE_SCALE as i128)
        .ok_or(BasketError::AmountOverflow)
}
