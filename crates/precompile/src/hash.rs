//! SHA-256 (0x02) and RIPEMD-160 (0x03) precompiles.
use crate::{
    crypto,
    utilities::calc_linear_cost_u32,
    PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// Base gas cost of the SHA-256 precompile.
pub const SHA256_BASE: u64 = 60;
/// Per 32-byte word gas cost of the SHA-256 precompile.
pub const SHA256_PER_WORD: u64 = 12;

/// Base gas cost of the RIPEMD-160 precompile.
pub const RIPEMD160_BASE: u64 = 600;
/// Per 32-byte word gas cost of the RIPEMD-160 precompile.
pub const RIPEMD160_PER_WORD: u64 = 120;

/// SHA-256 precompile run function.
///
/// Accepts input of any length and returns the 32-byte digest.
pub fn sha256_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let gas_used = calc_linear_cost_u32(input.len(), SHA256_BASE, SHA256_PER_WORD);
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }
    let output = crypto().sha256(input);
    Ok(PrecompileOutput::new(gas_used, Bytes::copy_from_slice(&output)))
}

/// RIPEMD-160 precompile run function.
///
/// Accepts input of any length; the 20-byte digest is left-padded with 12
/// zero bytes into a 32-byte word.
pub fn ripemd160_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let gas_used = calc_linear_cost_u32(input.len(), RIPEMD160_BASE, RIPEMD160_PER_WORD);
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }
    let output = crypto().ripemd160(input);
    Ok(PrecompileOutput::new(gas_used, Bytes::copy_from_slice(&output)))
}
