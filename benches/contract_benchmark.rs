//! Performance benchmarks for basket engine operations
//! Uses Criterion for statistical benchmarking

use basket::{AssetList, BasketContract, BasketContractClient, BridgeStep};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use soroban_sdk::{
    testutils::Address as _,
    token::StellarAssetClient,
    vec, Address, Env, Vec,
};
use swap_adapter::{encode_swap, SwapAdapterContract, SwapAdapterContractClient, OP_TOKEN_TO_TOKEN};

const NATIVE_DEPOSIT: i128 = 1_000_000;
const FUNDING: i128 = 1_000_000_000_000_000_000;

// Set up the contract environment for benchmarking
fn setup_benchmark_env() -> (Env, BasketContractClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let native = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let dai = env.register_stellar_asset_contract_v2(admin.clone()).address();
    StellarAssetClient::new(&env, &native).mint(&user, &FUNDING);
    StellarAssetClient::new(&env, &dai).mint(&user, &FUNDING);

    let contract_id = env.register(BasketContract, ());
    let client = BasketContractClient::new(&env, &contract_id);
    client.initialize(&admin, &native);

    (env, client, user, native, dai)
}

fn empty_assets(env: &Env) -> AssetList {
    AssetList {
        tokens: Vec::new(env),
        amounts: Vec::new(env),
    }
}

fn no_steps(env: &Env) -> Vec<BridgeStep> {
    Vec::new(env)
}

// Benchmark portfolio creation
fn bench_create_portfolio(c: &mut Criterion) {
    let (env, client, user, _native, _dai) = setup_benchmark_env();

    c.bench_with_input(
        BenchmarkId::new("create_portfolio", "native_only"),
        &(&client, &user),
        |b, (client, user)| {
            b.iter(|| {
                black_box(client.create_portfolio(
                    user,
                    &empty_assets(&env),
                    &NATIVE_DEPOSIT,
                    &no_steps(&env),
                ))
            })
        },
    );
}

// Benchmark deposits into an existing portfolio
fn bench_deposit_portfolio(c: &mut Criterion) {
    let (env, client, user, _native, _dai) = setup_benchmark_env();
    let id = client.create_portfolio(&user, &empty_assets(&env), &NATIVE_DEPOSIT, &no_steps(&env));

    c.bench_with_input(
        BenchmarkId::new("deposit_portfolio", "native_only"),
        &(&client, &user),
        |b, (client, user)| {
            b.iter(|| {
                black_box(client.deposit_portfolio(
                    user,
                    &id,
                    &empty_assets(&env),
                    &250_000,
                    &no_steps(&env),
                ))
            })
        },
    );
}

// Benchmark percentage withdrawals. A small percentage keeps the
// wallet funded across iterations.
fn bench_withdraw_portfolio(c: &mut Criterion) {
    let (env, client, user, _native, _dai) = setup_benchmark_env();
    let id =
        client.create_portfolio(&user, &empty_assets(&env), &1_000_000_000, &no_steps(&env));

    c.bench_with_input(
        BenchmarkId::new("withdraw_portfolio", "one_hundred_thousandth"),
        &(&client, &user),
        |b, (client, user)| {
            b.iter(|| {
                black_box(client.withdraw_portfolio(
                    user,
                    &id,
                    &empty_assets(&env),
                    &1,
                    &no_steps(&env),
                ))
            })
        },
    );
}

// Benchmark a deposit routed through one bridge step
fn bench_deposit_with_bridge_step(c: &mut Criterion) {
    let (env, client, user, native, dai) = setup_benchmark_env();
    let usdc = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let adapter = env.register(SwapAdapterContract, ());
    SwapAdapterContractClient::new(&env, &adapter).initialize(&native, &dai, &usdc, &1, &1);
    StellarAssetClient::new(&env, &usdc).mint(&adapter, &FUNDING);

    let id = client.create_portfolio(&user, &empty_assets(&env), &NATIVE_DEPOSIT, &no_steps(&env));
    let deposit = AssetList {
        tokens: vec![&env, dai.clone()],
        amounts: vec![&env, 100_i128],
    };
    let steps = vec![
        &env,
        BridgeStep {
            adapter: adapter.clone(),
            payload: encode_swap(&env, OP_TOKEN_TO_TOKEN, 100),
        },
    ];

    c.bench_with_input(
        BenchmarkId::new("deposit_portfolio", "one_bridge_step"),
        &(&client, &user),
        |b, (client, user)| {
            b.iter(|| black_box(client.deposit_portfolio(user, &id, &deposit, &0, &steps)))
        },
    );
}

// Benchmark balance reads
fn bench_balance_reads(c: &mut Criterion) {
    let (env, client, user, _native, dai) = setup_benchmark_env();
    let deposit = AssetList {
        tokens: vec![&env, dai.clone()],
        amounts: vec![&env, 500_i128],
    };
    let id = client.create_portfolio(&user, &deposit, &NATIVE_DEPOSIT, &no_steps(&env));

    c.bench_with_input(
        BenchmarkId::new("native_balance_of", "funded"),
        &(&client, id),
        |b, (client, id)| b.iter(|| black_box(client.native_balance_of(id))),
    );

    c.bench_with_input(
        BenchmarkId::new("token_balance_of", "funded"),
        &(&client, &dai),
        |b, (client, token)| b.iter(|| black_box(client.token_balance_of(&id, token))),
    );
}

// Benchmark ownership operations
fn bench_ownership(c: &mut Criterion) {
    let (env, client, user, _native, _dai) = setup_benchmark_env();
    let id = client.create_portfolio(&user, &empty_assets(&env), &NATIVE_DEPOSIT, &no_steps(&env));

    c.bench_with_input(
        BenchmarkId::new("owner_of", "existing"),
        &(&client, id),
        |b, (client, id)| b.iter(|| black_box(client.owner_of(id))),
    );
}

criterion_group!(
    name = contract_benchmarks;
    config = Criterion::default().sample_size(10);
    targets =
        bench_create_portfolio,
        bench_deposit_portfolio,
        bench_withdraw_portfolio,
        bench_deposit_with_bridge_step,
        bench_balance_reads,
        bench_ownership
);
criterion_main!(contract_benchmarks);
