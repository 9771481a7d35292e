//! BLS12-381 G2 mul precompile. More details in [`g2_mul`].
use crate::{
    bls12_381::utils::{pad_g2_point, remove_g2_padding},
    bls12_381_const::{
        G2_MUL_BASE_GAS_FEE, G2_MUL_INPUT_LENGTH, PADDED_G2_LENGTH, SCALAR_LENGTH,
    },
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// G2 multiplication call expects `288` bytes as an input that is interpreted
/// as byte concatenation of an encoding of a G2 point (`256` bytes) and an
/// encoding of a scalar value (`32` bytes). Output is an encoding of the
/// multiplication operation result - a single G2 point (`256` bytes).
///
/// The scalar is not required to be less than the main subgroup order.
pub fn g2_mul(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if G2_MUL_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G2_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let [x0, x1, y0, y1] = remove_g2_padding(&input[..PADDED_G2_LENGTH])?;
    let scalar: &[u8; SCALAR_LENGTH] = input[PADDED_G2_LENGTH..].try_into().unwrap();

    let unpadded = crypto().bls12_381_g2_mul((*x0, *x1, *y0, *y1), scalar)?;
    let padded = pad_g2_point(&unpadded);
    Ok(PrecompileOutput::new(
        G2_MUL_BASE_GAS_FEE,
        Bytes::copy_from_slice(&padded),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::test_vectors::{G2_GENERATOR, G2_IDENTITY};

    fn mul_input(point: &[u8], scalar_last_byte: u8) -> Vec<u8> {
        let mut input = Vec::with_capacity(G2_MUL_INPUT_LENGTH);
        input.extend_from_slice(point);
        let mut scalar = [0u8; SCALAR_LENGTH];
        scalar[SCALAR_LENGTH - 1] = scalar_last_byte;
        input.extend_from_slice(&scalar);
        input
    }

    #[test]
    fn generator_times_one_is_generator() {
        let out = g2_mul(&mul_input(&G2_GENERATOR, 1), 45_000).unwrap();
        assert_eq!(out.gas_used, 45_000);
        assert_eq!(out.bytes.as_ref(), G2_GENERATOR);
    }

    #[test]
    fn generator_times_zero_is_identity() {
        let out = g2_mul(&mul_input(&G2_GENERATOR, 0), 45_000).unwrap();
        assert_eq!(out.bytes.as_ref(), G2_IDENTITY);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            g2_mul(&[0; G2_MUL_INPUT_LENGTH - 1], 45_000),
            Err(PrecompileError::InvalidInput)
        );
    }

    #[test]
    fn out_of_gas() {
        assert_eq!(
            g2_mul(&[0; G2_MUL_INPUT_LENGTH], 44_999),
            Err(PrecompileError::OutOfGas)
        );
    }
}
