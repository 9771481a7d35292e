//! Criterion benches for the hot precompiles.
use criterion::{criterion_group, criterion_main, Criterion};
use precompile::{bn254, hash, modexp, secp256k1};
use primitives::{hex, U256};
use rand::Rng;

fn bench_precompiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("precompiles");

    let ecrecover_input = hex!(
        "456e9aea5e197a1f1af7a3e85a3212fa4049a3ba34c2289b4c860fc0b0c64ef3\
         000000000000000000000000000000000000000000000000000000000000001c\
         9242685bf161793cc25603c231bc2f568eb630ea16aa137d2664ac8038825608\
         4f8ae3bd7535248d0bd448298cc2e2071e56992d0774dc340c368ae950852ada"
    );
    group.bench_function("ecrecover", |b| {
        b.iter(|| secp256k1::ec_recover_run(&ecrecover_input, u64::MAX).unwrap())
    });

    let mut rng = rand::rng();
    let payload: Vec<u8> = (0..1024).map(|_| rng.random()).collect();
    group.bench_function("sha256/1k", |b| {
        b.iter(|| hash::sha256_run(&payload, u64::MAX).unwrap())
    });

    let mut bn_add_input = Vec::with_capacity(128);
    bn_add_input.extend_from_slice(&hex!(
        "0000000000000000000000000000000000000000000000000000000000000001\
         0000000000000000000000000000000000000000000000000000000000000002\
         0000000000000000000000000000000000000000000000000000000000000001\
         0000000000000000000000000000000000000000000000000000000000000002"
    ));
    group.bench_function("bn254_add", |b| {
        b.iter(|| bn254::add::istanbul_run(&bn_add_input, u64::MAX).unwrap())
    });

    // 3 ^ (p - 1) mod p over 32-byte operands.
    let mut modexp_input = vec![0u8; 96];
    modexp_input[0..32].copy_from_slice(&U256::from(1u8).to_be_bytes::<32>());
    modexp_input[32..64].copy_from_slice(&U256::from(32u8).to_be_bytes::<32>());
    modexp_input[64..96].copy_from_slice(&U256::from(32u8).to_be_bytes::<32>());
    modexp_input.extend_from_slice(&hex!(
        "03\
         fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e\
         fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
    ));
    group.bench_function("modexp/32", |b| {
        b.iter(|| modexp::berlin_run(&modexp_input, u64::MAX).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_precompiles);
criterion_main!(benches);
