//! BLS12-381 map fp2 to g2 precompile. More details in [`map_fp2_to_g2`].
use crate::{
    bls12_381::utils::{pad_g2_point, remove_fp_padding},
    bls12_381_const::{
        MAP_FP2_TO_G2_BASE_GAS_FEE, MAP_FP2_TO_G2_INPUT_LENGTH, PADDED_FP_LENGTH,
    },
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// Field-to-curve call expects `128` bytes as an input that is interpreted as
/// an element of the quadratic extension field. Output of this call is `256`
/// bytes and is an encoded G2 point. The mapping is the RFC 9380 "map to
/// curve" step only; no hashing of the input is performed.
pub fn map_fp2_to_g2(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if MAP_FP2_TO_G2_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != MAP_FP2_TO_G2_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let c0 = remove_fp_padding(&input[..PADDED_FP_LENGTH])?;
    let c1 = remove_fp_padding(&input[PADDED_FP_LENGTH..])?;
    let unpadded = crypto().bls12_381_fp2_to_g2((*c0, *c1))?;
    let padded = pad_g2_point(&unpadded);
    Ok(PrecompileOutput::new(
        MAP_FP2_TO_G2_BASE_GAS_FEE,
        Bytes::copy_from_slice(&padded),
    ))
}
