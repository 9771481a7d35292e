//! IDENTITY precompile (0x04).
use crate::{utilities::calc_linear_cost_u32, PrecompileError, PrecompileOutput, PrecompileResult};
use primitives::Bytes;

/// Base gas cost of the IDENTITY precompile.
pub const IDENTITY_BASE: u64 = 15;
/// Per 32-byte word gas cost of the IDENTITY precompile.
pub const IDENTITY_PER_WORD: u64 = 3;

/// IDENTITY precompile run function.
///
/// Returns a fresh copy of the input; the caller owns the bytes.
pub fn identity_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let gas_used = calc_linear_cost_u32(input.len(), IDENTITY_BASE, IDENTITY_PER_WORD);
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }
    Ok(PrecompileOutput::new(
        gas_used,
        Bytes::copy_from_slice(input),
    ))
}
