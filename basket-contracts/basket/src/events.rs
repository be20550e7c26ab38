use soroban_sdk::{Address, Env, Symbol};

pub struct Events;

impl Events {
    pub fn portfolio_created(
        env: &Env,
        portfolio_id: u64,
        owner: Address,
        native_amount: i128,
        timestamp: u64,
    ) {
        env.events().publish(
            (Symbol::new(env, "PortfolioCreated"), owner),
            (portfolio_id, native_amount, timestamp),
        );
    }

    pub fn deposit_made(
        env: &Env,
        portfolio_id: u64,
        owner: Address,
        native_amount: i128,
        timestamp: u64,
    ) {
        env.events().publish(
            (Symbol::new(env, "DepositMade"), owner),
            (portfolio_id, native_amount, timestamp),
        );
    }

    pub fn withdrawal_made(
        env: &Env,
        portfolio_id: u64,
        owner: Address,
        native_payout: i128,
        percentage: u32,
        timestamp: u64,
    ) {
        env.events().publish(
            (Symbol::new(env, "WithdrawalMade"), owner),
            (portfolio_id, native_payout, percentage, timestamp),
        );
    }

    pub fn ownership_transferred(
        env: &Env,
        portfolio_id: u64,
        from: Address,
        to: Address,
        timestamp: u64,
    ) {
        env.events().publish(
            (Symbol::new(env, "OwnershipTransferred"), from),
            (portfolio_id, to, timestamp),
        );
    }

    pub fn max_deposit_changed(env: &Env, admin: Address, new_max: i128, timestamp: u64) {
        env.events().publish(
            (Symbol::new(env, "MaxDepositChanged"), admin),
            (new_max, timestamp),
        );
    }
}
