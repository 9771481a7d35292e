//! BLS12-381 precompile suite (EIP-2537 encodings): G1/G2 addition, scalar
//! multiplication and MSM, the pairing check, and the two field-to-curve
//! mapping operations.
//!
//! Every input length is strict. Field elements arrive padded to 64 bytes
//! (16 zero bytes, then the 48-byte big-endian element); the precompile layer
//! validates the padding and hands unpadded coordinates to the backend, which
//! performs the field-range, curve and subgroup checks.
use crate::bls12_381_const::FP_LENGTH;

pub(crate) mod arkworks;
/// BLS12_G1ADD precompile.
pub mod g1_add;
/// BLS12_G1MSM precompile.
pub mod g1_msm;
/// BLS12_G1MUL precompile.
pub mod g1_mul;
/// BLS12_G2ADD precompile.
pub mod g2_add;
/// BLS12_G2MSM precompile.
pub mod g2_msm;
/// BLS12_G2MUL precompile.
pub mod g2_mul;
/// BLS12_MAP_FP2_TO_G2 precompile.
pub mod map_fp2_to_g2;
/// BLS12_MAP_FP_TO_G1 precompile.
pub mod map_fp_to_g1;
/// BLS12_PAIRING_CHECK precompile.
pub mod pairing;
pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod test_vectors;

/// An unpadded G1 point: `(x, y)` as 48-byte big-endian field elements.
pub type G1Point = ([u8; FP_LENGTH], [u8; FP_LENGTH]);

/// An unpadded G2 point: `(x.c0, x.c1, y.c0, y.c1)` as 48-byte big-endian
/// field elements.
pub type G2Point = (
    [u8; FP_LENGTH],
    [u8; FP_LENGTH],
    [u8; FP_LENGTH],
    [u8; FP_LENGTH],
);
