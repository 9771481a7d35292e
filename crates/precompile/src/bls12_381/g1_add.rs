//! BLS12-381 G1 add precompile. More details in [`g1_add`].
use crate::{
    bls12_381::utils::{pad_g1_point, remove_g1_padding},
    bls12_381_const::{G1_ADD_BASE_GAS_FEE, G1_ADD_INPUT_LENGTH, PADDED_G1_LENGTH},
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// G1 addition call expects `256` bytes as an input that is interpreted as
/// byte concatenation of two G1 points (`128` bytes each). Output is an
/// encoding of the addition operation result - a single G1 point (`128`
/// bytes).
pub fn g1_add(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if G1_ADD_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G1_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let [a_x, a_y] = remove_g1_padding(&input[..PADDED_G1_LENGTH])?;
    let [b_x, b_y] = remove_g1_padding(&input[PADDED_G1_LENGTH..])?;

    let unpadded = crypto().bls12_381_g1_add((*a_x, *a_y), (*b_x, *b_y))?;
    let padded = pad_g1_point(&unpadded);
    Ok(PrecompileOutput::new(
        G1_ADD_BASE_GAS_FEE,
        Bytes::copy_from_slice(&padded),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::test_vectors::{G1_GENERATOR, G1_IDENTITY};

    #[test]
    fn identity_plus_identity_is_identity() {
        let input = [0u8; G1_ADD_INPUT_LENGTH];
        let out = g1_add(&input, 500).unwrap();
        assert_eq!(out.gas_used, 500);
        assert_eq!(out.bytes.as_ref(), G1_IDENTITY);
    }

    #[test]
    fn generator_plus_identity_is_generator() {
        let mut input = Vec::with_capacity(G1_ADD_INPUT_LENGTH);
        input.extend_from_slice(&G1_GENERATOR);
        input.extend_from_slice(&G1_IDENTITY);
        let out = g1_add(&input, 500).unwrap();
        assert_eq!(out.bytes.as_ref(), G1_GENERATOR);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            g1_add(&[0; G1_ADD_INPUT_LENGTH - 1], 500),
            Err(PrecompileError::InvalidInput)
        );
        assert_eq!(g1_add(&[], 500), Err(PrecompileError::InvalidInput));
    }

    #[test]
    fn dirty_padding_is_rejected() {
        let mut input = [0u8; G1_ADD_INPUT_LENGTH];
        input[0] = 1;
        assert_eq!(g1_add(&input, 500), Err(PrecompileError::InvalidPoint));
    }

    #[test]
    fn point_off_curve_is_rejected() {
        // x = y = 1 passes the padding check but is not on the curve.
        let mut input = [0u8; G1_ADD_INPUT_LENGTH];
        input[63] = 1;
        input[127] = 1;
        assert_eq!(g1_add(&input, 500), Err(PrecompileError::InvalidPoint));
    }

    #[test]
    fn out_of_gas() {
        assert_eq!(
            g1_add(&[0; G1_ADD_INPUT_LENGTH], 499),
            Err(PrecompileError::OutOfGas)
        );
    }
}
