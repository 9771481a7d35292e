//! BLS12-381 pairing check precompile. More details in [`pairing`].
use crate::{
    bls12_381::utils::{remove_g1_padding, remove_g2_padding},
    bls12_381_const::{
        PADDED_G1_LENGTH, PAIRING_BASE_GAS_FEE, PAIRING_INPUT_LENGTH, PAIRING_PER_PAIR_GAS_FEE,
    },
    crypto,
    utilities::bool_to_bytes32,
    PrecompileError, PrecompileOutput, PrecompileResult,
};

/// Pairing call expects `384*k` bytes as an input that is interpreted as
/// byte concatenation of `k` slices. Each slice has the following structure:
///    * `128` bytes of G1 point encoding
///    * `256` bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order `q`.
///
/// Output is a `32` byte big-endian word, 1 if the product of pairings is the
/// identity of the target field and 0 otherwise. The empty input is valid and
/// yields 1.
pub fn pairing(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let k = input.len() / PAIRING_INPUT_LENGTH;
    let gas_used =
        PAIRING_BASE_GAS_FEE.saturating_add((k as u64).saturating_mul(PAIRING_PER_PAIR_GAS_FEE));
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() % PAIRING_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInput);
    }

    let mut pairs = Vec::with_capacity(k);
    for chunk in input.chunks_exact(PAIRING_INPUT_LENGTH) {
        let [g1_x, g1_y] = remove_g1_padding(&chunk[..PADDED_G1_LENGTH])?;
        let [g2_x0, g2_x1, g2_y0, g2_y1] = remove_g2_padding(&chunk[PADDED_G1_LENGTH..])?;
        pairs.push(((*g1_x, *g1_y), (*g2_x0, *g2_x1, *g2_y0, *g2_y1)));
    }

    let success = crypto().bls12_381_pairing_check(&pairs)?;
    Ok(PrecompileOutput::new(gas_used, bool_to_bytes32(success)))
}
