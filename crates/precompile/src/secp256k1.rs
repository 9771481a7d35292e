//! ECRECOVER precompile (0x01): ECDSA public key recovery on secp256k1.
//!
//! Validation and recovery failures never surface as errors: the reference
//! behaviour is a successful call with a 32-byte zero output, and the quirk
//! is encoded here at the call site rather than inherited from the backend.
use crate::{crypto, utilities::right_pad, PrecompileError, PrecompileOutput, PrecompileResult};
use primitives::{hex, keccak256, B256, B512, U256};

/// Gas cost of the ECRECOVER precompile.
pub const ECRECOVER_GAS: u64 = 3_000;

/// secp256k1 group order `n`, big-endian.
const SECP256K1_N: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// `n / 2`, the EIP-2 low-s boundary, big-endian.
const SECP256K1_HALF_N: [u8; 32] =
    hex!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");

/// ECRECOVER precompile run function.
///
/// The input is shaped to 128 bytes: `hash[32] ‖ v[32] ‖ r[32] ‖ s[32]`.
/// `v` must be a 32-byte big-endian integer equal to 27 or 28, `r` must lie
/// in `[1, n-1]` and `s` in `[1, n/2]` (EIP-2). Any violation, and any
/// recovery failure underneath, yields the 32-byte zero output with success.
pub fn ec_recover_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if ECRECOVER_GAS > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let input = right_pad::<128>(input);

    // `v` must be a 32-byte big-endian integer equal to 27 or 28.
    if !(input[32..63].iter().all(|&b| b == 0) && matches!(input[63], 27 | 28)) {
        return Ok(rejected());
    }

    let r = U256::from_be_slice(&input[64..96]);
    let s = U256::from_be_slice(&input[96..128]);
    let n = U256::from_be_bytes(SECP256K1_N);
    let half_n = U256::from_be_bytes(SECP256K1_HALF_N);
    if r.is_zero() || r >= n || s.is_zero() || s > half_n {
        return Ok(rejected());
    }

    let msg = B256::from_slice(&input[0..32]);
    let recid = input[63] - 27;
    let sig = B512::from_slice(&input[64..128]);

    let output = match crypto().secp256k1_ecrecover(&sig, recid, &msg) {
        Ok(address_word) => address_word.into(),
        Err(_) => B256::ZERO.into(),
    };
    Ok(PrecompileOutput::new(ECRECOVER_GAS, output))
}

/// The success-with-zero-output shape of every rejection path.
#[inline]
fn rejected() -> PrecompileOutput {
    PrecompileOutput::new(ECRECOVER_GAS, B256::ZERO.into())
}

/// Recovers the signer of `msg` and returns the Keccak-256 derived address
/// left-padded into a 32-byte word.
///
/// `sig` is `r ‖ s` and `recid` the 0/1 recovery id. High-s signatures are
/// normalised here so the backend stays total; the EIP-2 window is the run
/// function's responsibility.
pub(crate) fn ecrecover(sig: &B512, mut recid: u8, msg: &B256) -> Result<B256, PrecompileError> {
    use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

    let mut sig =
        Signature::from_slice(sig.as_slice()).map_err(|_| PrecompileError::InvalidSignature)?;

    // Flip the signature and recovery id into the low-s form k256 expects.
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
        recid ^= 1;
    }

    let recid = RecoveryId::from_byte(recid).ok_or(PrecompileError::InvalidSignature)?;
    let recovered_key = VerifyingKey::recover_from_prehash(msg.as_slice(), &sig, recid)
        .map_err(|_| PrecompileError::InvalidSignature)?;

    let mut hash = keccak256(&recovered_key.to_encoded_point(false).as_bytes()[1..]);
    // Truncate to the 20-byte address, left-padded.
    hash[..12].fill(0);
    Ok(hash)
}
