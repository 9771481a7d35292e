//! BLS12-381 G2 msm precompile. More details in [`g2_msm`].
use crate::{
    bls12_381::utils::{pad_g2_point, remove_g2_padding},
    bls12_381_const::{
        DISCOUNT_TABLE_G2_MSM, G2_MSM_INPUT_LENGTH, G2_MUL_BASE_GAS_FEE, PADDED_G2_LENGTH,
        SCALAR_LENGTH,
    },
    bls12_381_utils::msm_required_gas,
    crypto, PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// G2 multi-scalar-multiplication call expects `288*k` bytes as an input
/// that is interpreted as byte concatenation of `k` slices each of them
/// being a byte concatenation of an encoding of a G2 point (`256` bytes) and
/// an encoding of a scalar value (`32` bytes). Output is an encoding of the
/// multi-scalar-multiplication operation result - a single G2 point (`256`
/// bytes).
///
/// The empty input is rejected.
pub fn g2_msm(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % G2_MSM_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInput);
    }

    let k = input_len / G2_MSM_INPUT_LENGTH;
    let gas_used = msm_required_gas(k, &DISCOUNT_TABLE_G2_MSM, G2_MUL_BASE_GAS_FEE);
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let mut pairs = Vec::with_capacity(k);
    for chunk in input.chunks_exact(G2_MSM_INPUT_LENGTH) {
        let [x0, x1, y0, y1] = remove_g2_padding(&chunk[..PADDED_G2_LENGTH])?;
        let scalar: [u8; SCALAR_LENGTH] = chunk[PADDED_G2_LENGTH..].try_into().unwrap();
        pairs.push(((*x0, *x1, *y0, *y1), scalar));
    }

    let unpadded = crypto().bls12_381_g2_msm(&pairs)?;
    let padded = pad_g2_point(&unpadded);
    Ok(PrecompileOutput::new(gas_used, Bytes::copy_from_slice(&padded)))
}
