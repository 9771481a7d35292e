//! BLS12-381 G1 mul precompile. More details in [`g1_mul`].
use crate::{
    bls12_381::utils::{pad_g1_point, remove_g1_padding},
    bls12_381_const::{
        G1_MUL_BASE_GAS_FEE, G1_MUL_INPUT_LENGTH, PADDED_G1_LENGTH, SCALAR_LENGTH,
    },
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// G1 multiplication call expects `160` bytes as an input that is interpreted
/// as byte concatenation of an encoding of a G1 point (`128` bytes) and an
/// encoding of a scalar value (`32` bytes). Output is an encoding of the
/// multiplication operation result - a single G1 point (`128` bytes).
///
/// The scalar is not required to be less than the main subgroup order.
pub fn g1_mul(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if G1_MUL_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G1_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let [x, y] = remove_g1_padding(&input[..PADDED_G1_LENGTH])?;
    let scalar: &[u8; SCALAR_LENGTH] = input[PADDED_G1_LENGTH..].try_into().unwrap();

    let unpadded = crypto().bls12_381_g1_mul((*x, *y), scalar)?;
    let padded = pad_g1_point(&unpadded);
    Ok(PrecompileOutput::new(
        G1_MUL_BASE_GAS_FEE,
        Bytes::copy_from_slice(&padded),
    ))
}
