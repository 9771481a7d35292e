//! Cryptographic backend trait for the precompiles.
//!
//! The precompile layer owns addresses, gas accounting, input parsing and
//! output shaping; everything curve- or hash-shaped behind those steps goes
//! through [`Crypto`]. The default implementation routes to the backends the
//! crate ships with (k256, arkworks, aurora-engine-modexp, c-kzg); an
//! embedder with hardware-accelerated alternatives can install its own
//! provider once at startup.
use crate::{
    bls12_381::{G1Point, G2Point},
    bls12_381_const::{FP_LENGTH, G1_LENGTH, G2_LENGTH, SCALAR_LENGTH},
    PrecompileError,
};
use core::fmt::Debug;
use primitives::{B256, B512};
use std::sync::OnceLock;

/// Crypto operations trait for precompiles.
///
/// Every backend performs its own input validation: field-range, on-curve and
/// subgroup checks happen behind these methods, and a failed check surfaces
/// as the appropriate error kind rather than a wrong answer.
pub trait Crypto: Send + Sync + Debug {
    /// Compute SHA-256 hash
    fn sha256(&self, input: &[u8]) -> [u8; 32];

    /// Compute RIPEMD-160 hash, left-padded into 32 bytes.
    fn ripemd160(&self, input: &[u8]) -> [u8; 32];

    /// secp256k1 ECDSA public key recovery.
    ///
    /// Returns the Keccak-256 hash of the recovered public key with the high
    /// 12 bytes zeroed, i.e. the recovered address as a 32-byte word.
    fn secp256k1_ecrecover(
        &self,
        sig: &B512,
        recid: u8,
        msg: &B256,
    ) -> Result<B256, PrecompileError>;

    /// Modular exponentiation: `base ^ exponent % modulus` as a minimal
    /// big-endian byte string.
    fn modexp(&self, base: &[u8], exponent: &[u8], modulus: &[u8]) -> Vec<u8>;

    /// BLAKE2b compression function F with a caller-chosen round count.
    fn blake2_compress(&self, rounds: u32, h: &mut [u64; 8], m: [u64; 16], t: [u64; 2], f: bool);

    /// BN254 G1 addition over two 64-byte uncompressed points.
    fn bn254_g1_add(&self, p1: &[u8], p2: &[u8]) -> Result<[u8; 64], PrecompileError>;

    /// BN254 G1 scalar multiplication.
    fn bn254_g1_mul(&self, point: &[u8], scalar: &[u8]) -> Result<[u8; 64], PrecompileError>;

    /// BN254 optimal-ate pairing product check over (G1, G2) byte pairs.
    fn bn254_pairing_check(&self, pairs: &[(&[u8], &[u8])]) -> Result<bool, PrecompileError>;

    /// BLS12-381 G1 addition (returns a 96-byte unpadded G1 point).
    fn bls12_381_g1_add(&self, a: G1Point, b: G1Point) -> Result<[u8; G1_LENGTH], PrecompileError>;

    /// BLS12-381 G1 scalar multiplication by an unreduced 32-byte scalar.
    fn bls12_381_g1_mul(
        &self,
        p: G1Point,
        scalar: &[u8; SCALAR_LENGTH],
    ) -> Result<[u8; G1_LENGTH], PrecompileError>;

    /// BLS12-381 G1 multi-scalar multiplication.
    fn bls12_381_g1_msm(
        &self,
        pairs: &[(G1Point, [u8; SCALAR_LENGTH])],
    ) -> Result<[u8; G1_LENGTH], PrecompileError>;

    /// BLS12-381 G2 addition (returns a 192-byte unpadded G2 point).
    fn bls12_381_g2_add(&self, a: G2Point, b: G2Point) -> Result<[u8; G2_LENGTH], PrecompileError>;

    /// BLS12-381 G2 scalar multiplication by an unreduced 32-byte scalar.
    fn bls12_381_g2_mul(
        &self,
        p: G2Point,
        scalar: &[u8; SCALAR_LENGTH],
    ) -> Result<[u8; G2_LENGTH], PrecompileError>;

    /// BLS12-381 G2 multi-scalar multiplication.
    fn bls12_381_g2_msm(
        &self,
        pairs: &[(G2Point, [u8; SCALAR_LENGTH])],
    ) -> Result<[u8; G2_LENGTH], PrecompileError>;

    /// BLS12-381 pairing product check.
    fn bls12_381_pairing_check(
        &self,
        pairs: &[(G1Point, G2Point)],
    ) -> Result<bool, PrecompileError>;

    /// BLS12-381 map of a base field element to G1 (RFC 9380 map step).
    fn bls12_381_fp_to_g1(
        &self,
        fp: &[u8; FP_LENGTH],
    ) -> Result<[u8; G1_LENGTH], PrecompileError>;

    /// BLS12-381 map of an Fp2 element to G2 (RFC 9380 map step).
    fn bls12_381_fp2_to_g2(
        &self,
        fp2: ([u8; FP_LENGTH], [u8; FP_LENGTH]),
    ) -> Result<[u8; G2_LENGTH], PrecompileError>;

    /// KZG point evaluation: verify that the committed polynomial evaluates
    /// to `y` at `z` under the loaded trusted setup.
    fn verify_kzg_proof(
        &self,
        z: &[u8; 32],
        y: &[u8; 32],
        commitment: &[u8; 48],
        proof: &[u8; 48],
    ) -> Result<(), PrecompileError>;
}

/// Default implementation of the [`Crypto`] trait using the bundled backends.
#[derive(Clone, Copy, Debug)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn sha256(&self, input: &[u8]) -> [u8; 32] {
        use sha2::Digest;
        sha2::Sha256::digest(input).into()
    }

    fn ripemd160(&self, input: &[u8]) -> [u8; 32] {
        use ripemd::Digest;
        let mut hasher = ripemd::Ripemd160::new();
        hasher.update(input);

        let mut output = [0u8; 32];
        hasher.finalize_into((&mut output[12..]).into());
        output
    }

    fn secp256k1_ecrecover(
        &self,
        sig: &B512,
        recid: u8,
        msg: &B256,
    ) -> Result<B256, PrecompileError> {
        crate::secp256k1::ecrecover(sig, recid, msg)
    }

    fn modexp(&self, base: &[u8], exponent: &[u8], modulus: &[u8]) -> Vec<u8> {
        aurora_engine_modexp::modexp(base, exponent, modulus)
    }

    fn blake2_compress(&self, rounds: u32, h: &mut [u64; 8], m: [u64; 16], t: [u64; 2], f: bool) {
        crate::blake2::algo::compress(rounds as usize, h, m, t, f);
    }

    fn bn254_g1_add(&self, p1: &[u8], p2: &[u8]) -> Result<[u8; 64], PrecompileError> {
        crate::bn254::arkworks::g1_point_add(p1, p2)
    }

    fn bn254_g1_mul(&self, point: &[u8], scalar: &[u8]) -> Result<[u8; 64], PrecompileError> {
        crate::bn254::arkworks::g1_point_mul(point, scalar)
    }

    fn bn254_pairing_check(&self, pairs: &[(&[u8], &[u8])]) -> Result<bool, PrecompileError> {
        crate::bn254::arkworks::pairing_check(pairs)
    }

    fn bls12_381_g1_add(&self, a: G1Point, b: G1Point) -> Result<[u8; G1_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::g1_add_affine(a, b)
    }

    fn bls12_381_g1_mul(
        &self,
        p: G1Point,
        scalar: &[u8; SCALAR_LENGTH],
    ) -> Result<[u8; G1_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::g1_mul(p, scalar)
    }

    fn bls12_381_g1_msm(
        &self,
        pairs: &[(G1Point, [u8; SCALAR_LENGTH])],
    ) -> Result<[u8; G1_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::g1_msm(pairs)
    }

    fn bls12_381_g2_add(&self, a: G2Point, b: G2Point) -> Result<[u8; G2_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::g2_add_affine(a, b)
    }

    fn bls12_381_g2_mul(
        &self,
        p: G2Point,
        scalar: &[u8; SCALAR_LENGTH],
    ) -> Result<[u8; G2_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::g2_mul(p, scalar)
    }

    fn bls12_381_g2_msm(
        &self,
        pairs: &[(G2Point, [u8; SCALAR_LENGTH])],
    ) -> Result<[u8; G2_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::g2_msm(pairs)
    }

    fn bls12_381_pairing_check(
        &self,
        pairs: &[(G1Point, G2Point)],
    ) -> Result<bool, PrecompileError> {
        crate::bls12_381::arkworks::pairing_check(pairs)
    }

    fn bls12_381_fp_to_g1(
        &self,
        fp: &[u8; FP_LENGTH],
    ) -> Result<[u8; G1_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::map_fp_to_g1(fp)
    }

    fn bls12_381_fp2_to_g2(
        &self,
        fp2: ([u8; FP_LENGTH], [u8; FP_LENGTH]),
    ) -> Result<[u8; G2_LENGTH], PrecompileError> {
        crate::bls12_381::arkworks::map_fp2_to_g2(&fp2.0, &fp2.1)
    }

    fn verify_kzg_proof(
        &self,
        z: &[u8; 32],
        y: &[u8; 32],
        commitment: &[u8; 48],
        proof: &[u8; 48],
    ) -> Result<(), PrecompileError> {
        crate::kzg_point_evaluation::verify_kzg_proof(commitment, z, y, proof)
    }
}

/// Process-wide crypto provider.
static CRYPTO: OnceLock<&'static dyn Crypto> = OnceLock::new();

/// Installs a custom crypto provider globally.
///
/// Returns `true` if the provider was installed, `false` if a provider was
/// already installed or the default one was already in use.
pub fn install_crypto<C: Crypto + 'static>(crypto: C) -> bool {
    CRYPTO.set(Box::leak(Box::new(crypto))).is_ok()
}

/// Returns the installed crypto provider, or the default one.
pub fn crypto() -> &'static dyn Crypto {
    *CRYPTO.get_or_init(|| &DefaultCrypto)
}
