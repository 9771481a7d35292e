//! End-to-end scenarios through the public [`execute`] entry point: known
//! vectors per precompile, the hardfork gating matrix, and the universal
//! determinism and gas-monotonicity properties.
use precompile::{execute, u64_to_address, Hardfork, PrecompileError};
use primitives::{hex, Bytes, U256};
use rstest::rstest;

#[test]
fn identity_copies_input() {
    let input = hex!("010203040506");
    let out = execute(&u64_to_address(0x04), &input, 1_000, Hardfork::Prague).unwrap();
    assert_eq!(out.bytes.as_ref(), input);
    assert_eq!(out.gas_used, 18);
}

#[test]
fn sha256_abc() {
    let out = execute(&u64_to_address(0x02), b"abc", 1_000, Hardfork::Prague).unwrap();
    assert_eq!(
        out.bytes.as_ref(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
    assert_eq!(out.gas_used, 72);
}

#[test]
fn ripemd160_abc() {
    let out = execute(&u64_to_address(0x03), b"abc", 1_000, Hardfork::Frontier).unwrap();
    assert_eq!(
        out.bytes.as_ref(),
        hex!("0000000000000000000000008eb208f7e05d987a9b044a8e98c6b087f15a0bfc")
    );
    assert_eq!(out.gas_used, 720);
}

#[test]
fn ecrecover_known_vector() {
    let input = hex!(
        "456e9aea5e197a1f1af7a3e85a3212fa4049a3ba34c2289b4c860fc0b0c64ef3\
         000000000000000000000000000000000000000000000000000000000000001c\
         9242685bf161793cc25603c231bc2f568eb630ea16aa137d2664ac8038825608\
         4f8ae3bd7535248d0bd448298cc2e2071e56992d0774dc340c368ae950852ada"
    );
    let out = execute(&u64_to_address(0x01), &input, 5_000, Hardfork::Frontier).unwrap();
    assert_eq!(out.gas_used, 3_000);
    assert_eq!(
        out.bytes.as_ref(),
        hex!("000000000000000000000000c08b5542d177ac6686946920409741463a15dddb")
    );
}

#[test]
fn modexp_small_operands() {
    // base = 2, exponent = 5, modulus = 7, all declared one byte long.
    let mut input = vec![0u8; 96];
    input[0..32].copy_from_slice(&U256::from(1u8).to_be_bytes::<32>());
    input[32..64].copy_from_slice(&U256::from(1u8).to_be_bytes::<32>());
    input[64..96].copy_from_slice(&U256::from(1u8).to_be_bytes::<32>());
    input.extend_from_slice(&[2, 5, 7]);

    let out = execute(&u64_to_address(0x05), &input, 100_000, Hardfork::Berlin).unwrap();
    assert_eq!(out.bytes.as_ref(), &[0x04]);
    assert_eq!(out.gas_used, 200);
}

#[test]
fn bn254_add_two_infinities() {
    let input = [0u8; 128];
    let out = execute(&u64_to_address(0x06), &input, 200, Hardfork::Prague).unwrap();
    assert_eq!(out.bytes.as_ref(), [0u8; 64]);
    assert_eq!(out.gas_used, 150);
}

#[test]
fn bn254_add_costs_more_under_byzantium() {
    let input = [0u8; 128];
    assert_eq!(
        execute(&u64_to_address(0x06), &input, 200, Hardfork::Byzantium),
        Err(PrecompileError::OutOfGas)
    );
    let out = execute(&u64_to_address(0x06), &input, 500, Hardfork::Byzantium).unwrap();
    assert_eq!(out.gas_used, 500);
}

#[test]
fn bn254_pairing_empty_input() {
    let out = execute(&u64_to_address(0x08), &[], 100_000, Hardfork::Prague).unwrap();
    assert_eq!(out.gas_used, 45_000);
    let mut expected = [0u8; 32];
    expected[31] = 1;
    assert_eq!(out.bytes.as_ref(), expected);
}

#[test]
fn blake2f_gas_tracks_rounds() {
    let mut input = vec![0u8; 213];
    input[3] = 5; // five rounds
    let out = execute(&u64_to_address(0x09), &input, 1_000, Hardfork::Istanbul).unwrap();
    assert_eq!(out.gas_used, 5);
    assert_eq!(out.bytes.len(), 64);
}

#[test]
fn kzg_point_evaluation_zero_polynomial() {
    // Commitment and proof are the compressed G1 infinity: the zero
    // polynomial evaluates to zero everywhere.
    let mut commitment = [0u8; 48];
    commitment[0] = 0xc0;
    let mut versioned_hash: [u8; 32] = primitives::keccak256(commitment).0;
    versioned_hash[0] = 0x01;

    let mut input = Vec::with_capacity(192);
    input.extend_from_slice(&versioned_hash);
    input.extend_from_slice(&[0u8; 64]); // z and y
    input.extend_from_slice(&commitment);
    input.extend_from_slice(&commitment); // proof

    let out = execute(&u64_to_address(0x0a), &input, 50_000, Hardfork::Cancun).unwrap();
    assert_eq!(out.gas_used, 50_000);
    assert_eq!(out.bytes.len(), 64);
    assert_eq!(out.bytes[30], 0x10);
    assert_eq!(out.bytes[31], 0x00);
    assert_eq!(
        out.bytes[32..],
        hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001")
    );
}

#[test]
fn bls12_g1_add_identities() {
    let out = execute(&u64_to_address(0x0b), &[0; 256], 500, Hardfork::Prague).unwrap();
    assert_eq!(out.gas_used, 500);
    assert_eq!(out.bytes.as_ref(), [0u8; 128]);
}

#[rstest]
#[case(0x05, Hardfork::Frontier)]
#[case(0x05, Hardfork::Homestead)]
#[case(0x06, Hardfork::Homestead)]
#[case(0x09, Hardfork::Byzantium)]
#[case(0x0a, Hardfork::Berlin)]
#[case(0x0a, Hardfork::Istanbul)]
#[case(0x0b, Hardfork::Cancun)]
#[case(0x13, Hardfork::Cancun)]
fn address_not_yet_active(#[case] address: u64, #[case] fork: Hardfork) {
    assert_eq!(
        execute(&u64_to_address(address), &[], u64::MAX, fork),
        Err(PrecompileError::NotImplemented)
    );
}

#[rstest]
#[case(0x01, Hardfork::Frontier)]
#[case(0x04, Hardfork::Frontier)]
#[case(0x05, Hardfork::Byzantium)]
#[case(0x08, Hardfork::Byzantium)]
#[case(0x09, Hardfork::Istanbul)]
#[case(0x0a, Hardfork::Cancun)]
#[case(0x0b, Hardfork::Prague)]
#[case(0x13, Hardfork::Prague)]
fn address_active_from(#[case] address: u64, #[case] fork: Hardfork) {
    let result = execute(&u64_to_address(address), &[], u64::MAX, fork);
    assert_ne!(result, Err(PrecompileError::NotImplemented));
}

#[test]
fn addresses_beyond_the_table_are_not_implemented() {
    for address in [0u64, 0x14, 0xff, 0x0100] {
        assert_eq!(
            execute(&u64_to_address(address), &[], u64::MAX, Hardfork::Prague),
            Err(PrecompileError::NotImplemented)
        );
    }
}

#[test]
fn results_are_deterministic_across_calls() {
    let input = hex!(
        "456e9aea5e197a1f1af7a3e85a3212fa4049a3ba34c2289b4c860fc0b0c64ef3\
         000000000000000000000000000000000000000000000000000000000000001c\
         9242685bf161793cc25603c231bc2f568eb630ea16aa137d2664ac8038825608\
         4f8ae3bd7535248d0bd448298cc2e2071e56992d0774dc340c368ae950852ada"
    );
    let first = execute(&u64_to_address(0x01), &input, u64::MAX, Hardfork::Prague).unwrap();
    let second = execute(&u64_to_address(0x01), &input, u64::MAX, Hardfork::Prague).unwrap();
    assert_eq!(first, second);
}

#[test]
fn gas_limit_above_cost_does_not_change_result() {
    let exact = execute(&u64_to_address(0x02), b"abc", 72, Hardfork::Prague).unwrap();
    let generous = execute(&u64_to_address(0x02), b"abc", u64::MAX, Hardfork::Prague).unwrap();
    assert_eq!(exact, generous);
}

#[test]
fn failure_produces_no_output() {
    let err = execute(&u64_to_address(0x02), b"abc", 71, Hardfork::Prague).unwrap_err();
    assert_eq!(err, PrecompileError::OutOfGas);

    // A fresh call with enough gas is unaffected by the earlier failure.
    let out = execute(&u64_to_address(0x02), b"abc", 72, Hardfork::Prague).unwrap();
    assert_eq!(out.gas_used, 72);
    assert_ne!(out.bytes, Bytes::new());
}
