//! MODEXP precompile (0x05): arbitrary-precision modular exponentiation.
//!
//! The input carries three 32-byte big-endian declared lengths followed by
//! the base, exponent and modulus themselves, addressed by the *declared*
//! lengths with missing bytes read as zero. Gas follows EIP-198 before
//! Berlin and EIP-2565 from Berlin onward.
use crate::{
    crypto, utilities::right_pad_vec, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::{Bytes, U256};
use std::borrow::Cow;

/// Minimum gas charged by the precompile.
pub const MIN_GAS: u64 = 200;

/// Length of the three-word declared-length header.
const HEADER_LENGTH: usize = 96;

/// MODEXP precompile run function with EIP-198 (pre-Berlin) gas.
pub fn byzantium_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    run_inner(input, gas_limit, byzantium_gas_calc)
}

/// MODEXP precompile run function with EIP-2565 (Berlin) gas.
pub fn berlin_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    run_inner(input, gas_limit, berlin_gas_calc)
}

/// Multiplication complexity per EIP-198, a piecewise polynomial of the
/// larger of the base and modulus lengths.
fn byzantium_mult_complexity(w: u64) -> u64 {
    if w <= 64 {
        w.saturating_mul(w)
    } else if w <= 1024 {
        (w.saturating_mul(w) / 4)
            .saturating_add(w.saturating_mul(96))
            .saturating_sub(3072)
    } else {
        (w.saturating_mul(w) / 16)
            .saturating_add(w.saturating_mul(480))
            .saturating_sub(199_680)
    }
}

/// Multiplication complexity per EIP-2565: the square of the 8-byte word
/// count of the larger operand.
fn berlin_mult_complexity(w: u64) -> u64 {
    let words = w.div_ceil(8);
    words.saturating_mul(words)
}

/// Adjusted exponent length ("iteration count") shared by both gas schedules.
///
/// `exp_highp` is the first 32 bytes of the declared exponent interpreted as
/// a big-endian integer.
fn adjusted_exponent_length(exp_len: u64, exp_highp: &U256) -> u64 {
    let head_bits = if exp_highp.is_zero() {
        0
    } else {
        exp_highp.bit_len() as u64 - 1
    };
    if exp_len <= 32 {
        head_bits
    } else {
        8u64.saturating_mul(exp_len - 32).saturating_add(head_bits)
    }
}

/// EIP-198 gas: `max(200, mult(w) * max(adj_e, 1) / 20)`, saturating.
pub fn byzantium_gas_calc(base_len: u64, exp_len: u64, mod_len: u64, exp_highp: &U256) -> u64 {
    let mult = byzantium_mult_complexity(base_len.max(mod_len));
    let adj_e = adjusted_exponent_length(exp_len, exp_highp).max(1);
    MIN_GAS.max(mult.saturating_mul(adj_e) / 20)
}

/// EIP-2565 gas: `max(200, mult(w) * max(adj_e, 1) / 3)`, saturating.
pub fn berlin_gas_calc(base_len: u64, exp_len: u64, mod_len: u64, exp_highp: &U256) -> u64 {
    let mult = berlin_mult_complexity(base_len.max(mod_len));
    let adj_e = adjusted_exponent_length(exp_len, exp_highp).max(1);
    MIN_GAS.max(mult.saturating_mul(adj_e) / 3)
}

/// Reads `len` bytes of the input tail starting at `offset`, zero-extending
/// past the end of the actual input.
fn extract(tail: &[u8], offset: usize, len: usize) -> Cow<'_, [u8]> {
    let start = offset.min(tail.len());
    let end = offset.saturating_add(len).min(tail.len());
    right_pad_vec(&tail[start..end], len)
}

/// Decodes one 32-byte declared length, bounded by the platform's
/// addressable integer range.
fn read_length(word: &[u8]) -> Result<usize, PrecompileError> {
    usize::try_from(U256::from_be_slice(word))
        .ok()
        .filter(|len| *len <= isize::MAX as usize)
        .ok_or(PrecompileError::InvalidInput)
}

fn run_inner(
    input: &[u8],
    gas_limit: u64,
    calc_gas: fn(u64, u64, u64, &U256) -> u64,
) -> PrecompileResult {
    if input.len() < HEADER_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let base_len = read_length(&input[0..32])?;
    let exp_len = read_length(&input[32..64])?;
    let mod_len = read_length(&input[64..96])?;

    // The exponent head participates in the gas formula, so it is read before
    // any of the operands are materialised.
    let tail = &input[HEADER_LENGTH..];
    let exp_head = extract(tail, base_len, exp_len.min(32));
    let exp_highp = U256::from_be_slice(&exp_head);

    let gas_used = calc_gas(base_len as u64, exp_len as u64, mod_len as u64, &exp_highp);
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    // A declared-zero modulus length is defined as success with empty output.
    if mod_len == 0 {
        return Ok(PrecompileOutput::new(gas_used, Bytes::new()));
    }

    let base = extract(tail, 0, base_len);
    let exponent = extract(tail, base_len, exp_len);
    let modulus = extract(tail, base_len + exp_len, mod_len);

    // `x mod 0` is defined as zero; the backend is only consulted for a
    // non-zero modulus.
    let mut output = vec![0u8; mod_len];
    if !modulus.iter().all(|&b| b == 0) {
        let result = crypto().modexp(&base, &exponent, &modulus);
        let copied = result.len().min(mod_len);
        output[mod_len - copied..].copy_from_slice(&result[result.len() - copied..]);
    }

    Ok(PrecompileOutput::new(gas_used, output.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::hex;

    fn header(base: usize, exp: usize, modulus: usize) -> Vec<u8> {
        let mut input = vec![0u8; 96];
        input[0..32].copy_from_slice(&U256::from(base).to_be_bytes::<32>());
        input[32..64].copy_from_slice(&U256::from(exp).to_be_bytes::<32>());
        input[64..96].copy_from_slice(&U256::from(modulus).to_be_bytes::<32>());
        input
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(berlin_run(&[], 100_000), Err(PrecompileError::InvalidInput));
        assert_eq!(
            berlin_run(&[0; 95], 100_000),
            Err(PrecompileError::InvalidInput)
        );
    }

    #[test]
    fn oversized_declared_length_is_rejected() {
        let mut input = header(1, 1, 1);
        input[0] = 0xff;
        assert_eq!(
            berlin_run(&input, u64::MAX),
            Err(PrecompileError::InvalidInput)
        );
    }

    #[test]
    fn two_pow_five_mod_seven() {
        let mut input = header(1, 1, 1);
        input.extend_from_slice(&[2, 5, 7]);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 200);
        assert_eq!(out.bytes.as_ref(), &[0x04]);
    }

    #[test]
    fn three_pow_five_mod_seven() {
        let mut input = header(1, 1, 1);
        input.extend_from_slice(&[3, 5, 7]);
        let out = byzantium_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 200);
        assert_eq!(out.bytes.as_ref(), &[0x05]);
    }

    #[test]
    fn fermat_little_theorem_vector() {
        // 3 ^ (p - 1) mod p == 1 for prime p; the EIP-2565 reference case.
        let mut input = header(1, 32, 32);
        input.extend_from_slice(&hex!(
            "03\
             fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e\
             fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        ));

        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 1_360);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(out.bytes.as_ref(), expected);

        // Same computation under the pre-Berlin schedule.
        let out = byzantium_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 13_056);
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn anything_pow_zero_is_one() {
        let mut input = header(1, 0, 1);
        input.extend_from_slice(&[9, 7]);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), &[0x01]);
    }

    #[test]
    fn zero_mod_length_returns_empty() {
        let mut input = header(1, 1, 0);
        input.extend_from_slice(&[2, 5]);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 200);
        assert!(out.bytes.is_empty());
    }

    #[test]
    fn zero_valued_modulus_yields_zeros() {
        let mut input = header(1, 1, 2);
        input.extend_from_slice(&[2, 5, 0, 0]);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), &[0, 0]);
    }

    #[test]
    fn missing_tail_reads_as_zero() {
        // Declared one byte each, tail absent: 0^0 mod 0 -> zero output.
        let input = header(1, 1, 1);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), &[0x00]);
    }

    #[test]
    fn output_is_left_padded_to_mod_len() {
        let mut input = header(1, 1, 4);
        input.extend_from_slice(&[2, 5, 0, 0, 0, 7]);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), &[0, 0, 0, 4]);
    }

    #[test]
    fn gas_is_checked_before_computation() {
        let mut input = header(1, 1, 1);
        input.extend_from_slice(&[2, 5, 7]);
        assert_eq!(berlin_run(&input, 199), Err(PrecompileError::OutOfGas));
    }

    #[test]
    fn long_exponent_gas() {
        // Declared 33-byte exponent with a zero head still pays the length
        // term: adj_e = 8 * (33 - 32) = 8, words = 1 -> max(200, 8 / 3).
        let mut input = header(1, 33, 1);
        input.extend_from_slice(&[2]);
        input.extend_from_slice(&[0; 33]);
        input.extend_from_slice(&[7]);
        let out = berlin_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 200);
        assert_eq!(out.bytes.as_ref(), &[0x01]);
    }
}
