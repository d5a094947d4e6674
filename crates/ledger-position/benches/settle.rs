use alloy_primitives::aliases::I24;
use alloy_primitives::{Address, U256};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_static::lazy_static;
use ledger_position::{PositionKey, PositionStore};
use ledger_uniswap_v3_math::fixed_point::Q128;

lazy_static! {
    static ref OWNERS: Vec<Address> = (0..1000).map(|_| Address::random()).collect();
}

fn range(i: usize) -> (I24, I24) {
    let tick = (i as i32 % 100) * 60;
    (I24::try_from(-tick - 60).unwrap(), I24::try_from(tick + 60).unwrap())
}

fn fill_store() -> eyre::Result<PositionStore> {
    let mut store = PositionStore::new();
    for (i, owner) in OWNERS.iter().enumerate() {
        let (tick_lower, tick_upper) = range(i);
        store.update(*owner, tick_lower, tick_upper, 1_000_000, U256::ZERO, U256::ZERO)?;
    }
    Ok(store)
}

fn benchmark_position_key(c: &mut Criterion) {
    let owner = OWNERS[0];
    c.bench_function("position_key", |b| b.iter(|| PositionKey::new(black_box(owner), black_box(I24::MIN), black_box(I24::MAX))));
}

fn benchmark_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");

    group.bench_function("fill_store", |b| b.iter(|| fill_store().unwrap()));

    let mut store = fill_store().unwrap();
    let mut growth = U256::ZERO;
    group.bench_function("poke", |b| {
        b.iter(|| {
            growth += Q128;
            for (i, owner) in OWNERS.iter().enumerate().take(100) {
                let (tick_lower, tick_upper) = range(i);
                store.get_mut_or_default(*owner, tick_lower, tick_upper).update(0, growth, growth).unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_position_key, benchmark_settle);
criterion_main!(benches);
