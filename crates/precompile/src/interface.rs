//! Interface for the precompiles. It contains the precompile result type,
//! the precompile output type, and the precompile error type.
use core::fmt;
use primitives::Bytes;

/// A precompile operation result type
///
/// Returns either `Ok((gas_used, return_bytes))` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Precompile function type. Takes input and gas limit and returns precompile result.
pub type PrecompileFn = fn(&[u8], u64) -> PrecompileResult;

/// Precompile error type.
///
/// The set is closed: every failure a precompile can produce is one of these
/// kinds. Errors consume no gas and carry no output; the out-of-gas kind is
/// the one exception whose cost the caller is expected to burn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// The computed cost exceeds the caller-supplied gas limit.
    OutOfGas,
    /// Length violation or parse failure in the input byte string.
    InvalidInput,
    /// Curve, subgroup or field-range failure for an encoded point.
    InvalidPoint,
    /// Pairing backend failure that is not attributable to a single point.
    InvalidPairing,
    /// Signature-level failure inside the recovery helpers.
    ///
    /// Never crosses the precompile boundary: ECRECOVER maps it to a
    /// successful zero-address output.
    InvalidSignature,
    /// The address is not in the active set for the requested hardfork.
    NotImplemented,
    /// Allocation failure propagated from a backend.
    OutOfMemory,
}

impl PrecompileError {
    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfGas => "out of gas",
            Self::InvalidInput => "invalid input",
            Self::InvalidPoint => "invalid curve point",
            Self::InvalidPairing => "invalid pairing",
            Self::InvalidSignature => "invalid signature",
            Self::NotImplemented => "precompile not implemented for this hardfork",
            Self::OutOfMemory => "allocation failure",
        };
        f.write_str(s)
    }
}
