//! BLS12-381 G1 msm precompile. More details in [`g1_msm`].
use crate::{
    bls12_381::utils::{pad_g1_point, remove_g1_padding},
    bls12_381_const::{
        DISCOUNT_TABLE_G1_MSM, G1_MSM_INPUT_LENGTH, G1_MUL_BASE_GAS_FEE, PADDED_G1_LENGTH,
        SCALAR_LENGTH,
    },
    bls12_381_utils::msm_required_gas,
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// G1 multi-scalar-multiplication call expects `160*k` bytes as an input
/// that is interpreted as byte concatenation of `k` slices each of them
/// being a byte concatenation of an encoding of a G1 point (`128` bytes) and
/// an encoding of a scalar value (`32` bytes). Output is an encoding of the
/// multi-scalar-multiplication operation result - a single G1 point (`128`
/// bytes).
///
/// The empty input is rejected.
pub fn g1_msm(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % G1_MSM_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInput);
    }

    let k = input_len / G1_MSM_INPUT_LENGTH;
    let gas_used = msm_required_gas(k, &DISCOUNT_TABLE_G1_MSM, G1_MUL_BASE_GAS_FEE);
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let mut pairs = Vec::with_capacity(k);
    for chunk in input.chunks_exact(G1_MSM_INPUT_LENGTH) {
        let [x, y] = remove_g1_padding(&chunk[..PADDED_G1_LENGTH])?;
        let scalar: [u8; SCALAR_LENGTH] = chunk[PADDED_G1_LENGTH..].try_into().unwrap();
        pairs.push(((*x, *y), scalar));
    }

    let unpadded = crypto().bls12_381_g1_msm(&pairs)?;
    let padded = pad_g1_point(&unpadded);
    Ok(PrecompileOutput::new(gas_used, Bytes::copy_from_slice(&padded)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::{g1_mul::g1_mul, test_vectors::G1_GENERATOR};

    fn pair_bytes(point: &[u8], scalar_last_byte: u8) -> Vec<u8> {
        let mut bytes = point.to_vec();
        let mut scalar = [0u8; SCALAR_LENGTH];
        scalar[SCALAR_LENGTH - 1] = scalar_last_byte;
        bytes.extend_from_slice(&scalar);
        bytes
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(g1_msm(&[], 1_000_000), Err(PrecompileError::InvalidInput));
    }

    #[test]
    fn ragged_input_is_rejected() {
        assert_eq!(
            g1_msm(&[0; G1_MSM_INPUT_LENGTH + 1], 1_000_000),
            Err(PrecompileError::InvalidInput)
        );
    }

    #[test]
    fn single_pair_matches_mul() {
        let input = pair_bytes(&G1_GENERATOR, 5);
        let msm_out = g1_msm(&input, 1_000_000).unwrap();
        let mul_out = g1_mul(&input, 1_000_000).unwrap();
        assert_eq!(msm_out.gas_used, G1_MUL_BASE_GAS_FEE);
        assert_eq!(msm_out.bytes, mul_out.bytes);
    }

    #[test]
    fn two_pairs_discounted_gas() {
        let mut input = pair_bytes(&G1_GENERATOR, 1);
        input.extend_from_slice(&pair_bytes(&G1_GENERATOR, 1));
        let out = g1_msm(&input, 1_000_000).unwrap();
        // 2 * 12000 * 949 / 1000
        assert_eq!(out.gas_used, 22_776);
        // G + G == 2 * G
        let double = g1_mul(&pair_bytes(&G1_GENERATOR, 2), 1_000_000).unwrap();
        assert_eq!(out.bytes, double.bytes);
    }

    #[test]
    fn infinity_pairs_sum_to_infinity() {
        let input = vec![0u8; 2 * G1_MSM_INPUT_LENGTH];
        let out = g1_msm(&input, 1_000_000).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; PADDED_G1_LENGTH]);
    }

    #[test]
    fn out_of_gas() {
        let input = pair_bytes(&G1_GENERATOR, 1);
        assert_eq!(g1_msm(&input, 11_999), Err(PrecompileError::OutOfGas));
    }
}
