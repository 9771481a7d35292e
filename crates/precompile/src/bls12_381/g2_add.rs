//! BLS12-381 G2 add precompile. More details in [`g2_add`].
use crate::{
    bls12_381::utils::{pad_g2_point, remove_g2_padding},
    bls12_381_const::{G2_ADD_BASE_GAS_FEE, G2_ADD_INPUT_LENGTH, PADDED_G2_LENGTH},
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// G2 addition call expects `512` bytes as an input that is interpreted as
/// byte concatenation of two G2 points (`256` bytes each). Output is an
/// encoding of the addition operation result - a single G2 point (`256`
/// bytes).
pub fn g2_add(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if G2_ADD_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G2_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let [a_x0, a_x1, a_y0, a_y1] = remove_g2_padding(&input[..PADDED_G2_LENGTH])?;
    let [b_x0, b_x1, b_y0, b_y1] = remove_g2_padding(&input[PADDED_G2_LENGTH..])?;

    let unpadded =
        crypto().bls12_381_g2_add((*a_x0, *a_x1, *a_y0, *a_y1), (*b_x0, *b_x1, *b_y0, *b_y1))?;
    let padded = pad_g2_point(&unpadded);
    Ok(PrecompileOutput::new(
        G2_ADD_BASE_GAS_FEE,
        Bytes::copy_from_slice(&padded),
    ))
}
