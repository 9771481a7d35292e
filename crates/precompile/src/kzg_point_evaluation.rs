//! KZG point evaluation precompile (0x0a) added in EIP-4844.
//!
//! Verifies that the blob polynomial behind a versioned hash evaluates to a
//! claimed value at a claimed point, under the KZG trusted setup. The setup
//! is the subsystem's only process-wide state; its lifecycle lives in this
//! module and nowhere else.
use crate::{crypto, PrecompileError, PrecompileOutput, PrecompileResult};
use primitives::{hex, keccak256, Bytes};
use std::{
    path::Path,
    sync::{PoisonError, RwLock},
};

/// Gas cost of the point evaluation precompile, charged regardless of the
/// verification outcome.
pub const GAS_COST: u64 = 50_000;

/// Required input length: `versioned_hash[32] ‖ z[32] ‖ y[32] ‖
/// commitment[48] ‖ proof[48]`.
pub const INPUT_LENGTH: usize = 192;

/// The EIP-4844 versioned hash version byte.
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;

/// The canonical success output: `FIELD_ELEMENTS_PER_BLOB` (4096) and the
/// BLS12-381 scalar field modulus, both as 32-byte big-endian words.
pub const RETURN_VALUE: &[u8; 64] = &hex!(
    "0000000000000000000000000000000000000000000000000000000000001000\
     73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"
);

/// Run the KZG point evaluation precompile.
pub fn run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if gas_limit < GAS_COST {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != INPUT_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }

    // Verify the commitment matches the versioned hash.
    let versioned_hash = &input[..32];
    let commitment = &input[96..144];
    if kzg_to_versioned_hash(commitment) != versioned_hash {
        return Err(PrecompileError::InvalidInput);
    }

    // Verify the KZG proof with z and y in big-endian format.
    let commitment: &[u8; 48] = commitment.try_into().unwrap();
    let z = input[32..64].try_into().unwrap();
    let y = input[64..96].try_into().unwrap();
    let proof = input[144..192].try_into().unwrap();
    crypto().verify_kzg_proof(z, y, commitment, proof)?;

    Ok(PrecompileOutput::new(GAS_COST, Bytes::from_static(RETURN_VALUE)))
}

/// `VERSIONED_HASH_VERSION_KZG ‖ keccak256(commitment)[1..]`
pub fn kzg_to_versioned_hash(commitment: &[u8]) -> [u8; 32] {
    let mut hash: [u8; 32] = keccak256(commitment).0;
    hash[0] = VERSIONED_HASH_VERSION_KZG;
    hash
}

/// Verifies a KZG proof under the loaded trusted setup.
///
/// Backend entry used by [`crate::DefaultCrypto`]; a proof that fails to
/// verify, fails to parse, or arrives before a usable setup is an
/// [`PrecompileError::InvalidInput`].
pub(crate) fn verify_kzg_proof(
    commitment: &[u8; 48],
    z: &[u8; 32],
    y: &[u8; 32],
    proof: &[u8; 48],
) -> Result<(), PrecompileError> {
    let settings = settings()?;
    let commitment =
        c_kzg::Bytes48::from_bytes(commitment).map_err(|_| PrecompileError::InvalidInput)?;
    let z = c_kzg::Bytes32::from_bytes(z).map_err(|_| PrecompileError::InvalidInput)?;
    let y = c_kzg::Bytes32::from_bytes(y).map_err(|_| PrecompileError::InvalidInput)?;
    let proof = c_kzg::Bytes48::from_bytes(proof).map_err(|_| PrecompileError::InvalidInput)?;

    match settings.verify_kzg_proof(&commitment, &z, &y, &proof) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(PrecompileError::InvalidInput),
    }
}

/// Trusted-setup lifecycle state.
///
/// `Uninitialised -> Initialising -> Ready | Failed`; `Ready` is terminal for
/// the process lifetime and `Failed` is retried by the next initialisation
/// attempt.
#[derive(Clone, Copy, Debug)]
enum SetupState {
    Uninitialised,
    Initialising,
    Ready(&'static c_kzg::KzgSettings),
    Failed,
}

/// The process-wide setup slot. The loader keeps the write guard for the
/// whole load, so concurrent readers park on the lock and then observe
/// `Ready` or `Failed` rather than `Initialising`.
static SETUP: RwLock<SetupState> = RwLock::new(SetupState::Uninitialised);

/// Provisions the trusted setup from a file instead of the embedded data.
///
/// Must happen before the first point-evaluation call; once the setup is
/// `Ready` it is immutable for the lifetime of the process and this returns
/// an error. A failed load leaves the slot retryable.
pub fn load_trusted_setup_file(path: &Path) -> Result<(), PrecompileError> {
    let mut guard = SETUP.write().unwrap_or_else(PoisonError::into_inner);
    match *guard {
        SetupState::Ready(_) | SetupState::Initialising => Err(PrecompileError::InvalidInput),
        SetupState::Uninitialised | SetupState::Failed => {
            *guard = SetupState::Initialising;
            match c_kzg::KzgSettings::load_trusted_setup_file(path, 0) {
                Ok(settings) => {
                    *guard = SetupState::Ready(Box::leak(Box::new(settings)));
                    Ok(())
                }
                Err(_) => {
                    *guard = SetupState::Failed;
                    Err(PrecompileError::InvalidInput)
                }
            }
        }
    }
}

/// Returns the setup, initialising it from the embedded Ethereum mainnet
/// data on first use.
fn settings() -> Result<&'static c_kzg::KzgSettings, PrecompileError> {
    {
        let guard = SETUP.read().unwrap_or_else(PoisonError::into_inner);
        if let SetupState::Ready(settings) = *guard {
            return Ok(settings);
        }
    }

    let mut guard = SETUP.write().unwrap_or_else(PoisonError::into_inner);
    match *guard {
        SetupState::Ready(settings) => Ok(settings),
        SetupState::Initialising => Err(PrecompileError::InvalidInput),
        SetupState::Uninitialised | SetupState::Failed => {
            *guard = SetupState::Initialising;
            let settings = c_kzg::ethereum_kzg_settings(0);
            *guard = SetupState::Ready(settings);
            Ok(settings)
        }
    }
}
