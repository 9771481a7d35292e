//! BLS12-381 map fp to g1 precompile. More details in [`map_fp_to_g1`].
use crate::{
    bls12_381::utils::{pad_g1_point, remove_fp_padding},
    bls12_381_const::{MAP_FP_TO_G1_BASE_GAS_FEE, MAP_FP_TO_G1_INPUT_LENGTH},
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// Field-to-curve call expects `64` bytes as an input that is interpreted as
/// an element of the base field. Output of this call is `128` bytes and is an
/// encoded G1 point. The mapping is the RFC 9380 "map to curve" step only; no
/// hashing of the input is performed.
pub fn map_fp_to_g1(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if MAP_FP_TO_G1_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != MAP_FP_TO_G1_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    let fp = remove_fp_padding(input)?;
    let unpadded = crypto().bls12_381_fp_to_g1(fp)?;
    let padded = pad_g1_point(&unpadded);
    Ok(PrecompileOutput::new(
        MAP_FP_TO_G1_BASE_GAS_FEE,
        Bytes::copy_from_slice(&padded),
    ))
}
