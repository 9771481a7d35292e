//! # ethion-precompile
//!
//! Ethereum compatible precompiled contracts: the dispatch and gas-accounting
//! layer plus every precompile from ECRECOVER (0x01) through the BLS12-381
//! suite (0x0b..=0x13).
//!
//! The single entry point is [`execute`]: it gates the target address on the
//! active [`Hardfork`], routes to the precompile, and returns either a
//! [`PrecompileOutput`] whose bytes the caller owns or one of the closed
//! [`PrecompileError`] kinds. Precompiles are pure; calls are independent and
//! the function is re-entrant. The only process-wide state is the KZG trusted
//! setup consumed by the point-evaluation precompile (see
//! [`kzg_point_evaluation`]).

/// BLAKE2F precompile (0x09).
pub mod blake2;
/// BLS12-381 precompile suite (0x0b..=0x13).
pub mod bls12_381;
/// BLS12-381 constants: addresses, encoded lengths, gas prices and the MSM
/// discount tables.
pub mod bls12_381_const;
/// BLS12-381 shared gas logic.
pub mod bls12_381_utils;
/// BN254 precompiles (0x06..=0x08).
pub mod bn254;
/// Cryptographic backend trait and default provider.
pub mod crypto;
/// SHA-256 and RIPEMD-160 precompiles (0x02, 0x03).
pub mod hash;
/// IDENTITY precompile (0x04).
pub mod identity;
mod interface;
/// KZG point evaluation precompile (0x0a) and the trusted-setup lifecycle.
pub mod kzg_point_evaluation;
/// MODEXP precompile (0x05).
pub mod modexp;
/// ECRECOVER precompile (0x01).
pub mod secp256k1;
/// Input shaping and output helpers.
pub mod utilities;

pub use crypto::{crypto, install_crypto, Crypto, DefaultCrypto};
pub use interface::{PrecompileError, PrecompileFn, PrecompileOutput, PrecompileResult};
pub use primitives::Hardfork;

use primitives::Address;
use std::sync::OnceLock;

/// Type alias for the precompile membership bitmask.
type PrecompileMask = u32;

/// One past the highest low-byte address a precompile can occupy in the
/// lookup table.
const MAX_PRECOMPILE_INDEX: usize = 32;

/// Frontier precompiles as a bitmask.
const FRONTIER_PRECOMPILES: PrecompileMask = (1 << 0x01) | // ECRECOVER
    (1 << 0x02) | // SHA2-256
    (1 << 0x03) | // RIPEMD-160
    (1 << 0x04); // IDENTITY

/// Byzantium precompiles: Frontier plus MODEXP and the BN254 operations.
const BYZANTIUM_PRECOMPILES: PrecompileMask = FRONTIER_PRECOMPILES |
    (1 << 0x05) | // MODEXP
    (1 << 0x06) | // BN254 ECADD
    (1 << 0x07) | // BN254 ECMUL
    (1 << 0x08); // BN254 ECPAIRING

/// Istanbul precompiles: Byzantium plus BLAKE2F.
const ISTANBUL_PRECOMPILES: PrecompileMask = BYZANTIUM_PRECOMPILES | (1 << 0x09);

/// Berlin precompiles: same addresses as Istanbul, MODEXP gas changes.
const BERLIN_PRECOMPILES: PrecompileMask = ISTANBUL_PRECOMPILES;

/// Cancun precompiles: Berlin plus point evaluation.
const CANCUN_PRECOMPILES: PrecompileMask = BERLIN_PRECOMPILES | (1 << 0x0a);

/// Prague precompiles: Cancun plus the BLS12-381 suite.
const PRAGUE_PRECOMPILES: PrecompileMask = CANCUN_PRECOMPILES |
    (1 << 0x0b) | // BLS12_G1ADD
    (1 << 0x0c) | // BLS12_G1MUL
    (1 << 0x0d) | // BLS12_G1MSM
    (1 << 0x0e) | // BLS12_G2ADD
    (1 << 0x0f) | // BLS12_G2MUL
    (1 << 0x10) | // BLS12_G2MSM
    (1 << 0x11) | // BLS12_PAIRING_CHECK
    (1 << 0x12) | // BLS12_MAP_FP_TO_G1
    (1 << 0x13); // BLS12_MAP_FP2_TO_G2

/// Executes the precompile at `address` under the `fork` activation rules.
///
/// This is the subsystem's single entry point. The 20-byte address is
/// compared numerically: the high 19 bytes must be zero and the low byte must
/// name a precompile active in `fork`, otherwise the call fails with
/// [`PrecompileError::NotImplemented`].
pub fn execute(
    address: &Address,
    input: &[u8],
    gas_limit: u64,
    fork: Hardfork,
) -> PrecompileResult {
    Precompiles::new(fork)
        .call(address, input, gas_limit)
        .ok_or(PrecompileError::NotImplemented)?
}

/// Precompile lookup table for one hardfork.
///
/// Uses a bitmask for O(1) membership testing and a low-byte-indexed function
/// table for O(1) execution. Tables for each fork are built once and shared.
#[derive(Clone, Debug)]
pub struct Precompiles {
    /// Membership bitmask over the low address byte.
    addresses: PrecompileMask,
    /// Lookup table indexed by the low address byte.
    table: [Option<PrecompileFn>; MAX_PRECOMPILE_INDEX],
}

impl Default for Precompiles {
    fn default() -> Self {
        Self {
            addresses: 0,
            table: [None; MAX_PRECOMPILE_INDEX],
        }
    }
}

impl Precompiles {
    /// Returns the precompile set active in the given hardfork.
    pub fn new(fork: Hardfork) -> &'static Self {
        match fork {
            Hardfork::Frontier | Hardfork::Homestead => Self::frontier(),
            Hardfork::Byzantium => Self::byzantium(),
            Hardfork::Istanbul => Self::istanbul(),
            Hardfork::Berlin => Self::berlin(),
            Hardfork::Cancun => Self::cancun(),
            Hardfork::Prague => Self::prague(),
        }
    }

    /// Returns precompiles for the Frontier spec (Homestead shares it).
    pub fn frontier() -> &'static Self {
        static INSTANCE: OnceLock<Precompiles> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Precompiles::default();
            precompiles.set(0x01, secp256k1::ec_recover_run);
            precompiles.set(0x02, hash::sha256_run);
            precompiles.set(0x03, hash::ripemd160_run);
            precompiles.set(0x04, identity::identity_run);
            debug_assert_eq!(precompiles.addresses, FRONTIER_PRECOMPILES);
            precompiles
        })
    }

    /// Returns precompiles for the Byzantium spec.
    pub fn byzantium() -> &'static Self {
        static INSTANCE: OnceLock<Precompiles> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::frontier().clone();
            // EIP-198: Big integer modular exponentiation.
            precompiles.set(0x05, modexp::byzantium_run);
            // EIP-196/197: BN254 curve operations.
            precompiles.set(0x06, bn254::add::byzantium_run);
            precompiles.set(0x07, bn254::mul::byzantium_run);
            precompiles.set(0x08, bn254::pair::byzantium_run);
            debug_assert_eq!(precompiles.addresses, BYZANTIUM_PRECOMPILES);
            precompiles
        })
    }

    /// Returns precompiles for the Istanbul spec.
    pub fn istanbul() -> &'static Self {
        static INSTANCE: OnceLock<Precompiles> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::byzantium().clone();
            // EIP-1108: Reduce alt_bn128 precompile gas costs.
            precompiles.set(0x06, bn254::add::istanbul_run);
            precompiles.set(0x07, bn254::mul::istanbul_run);
            precompiles.set(0x08, bn254::pair::istanbul_run);
            // EIP-152: Add BLAKE2 compression function `F` precompile.
            precompiles.set(0x09, blake2::run);
            debug_assert_eq!(precompiles.addresses, ISTANBUL_PRECOMPILES);
            precompiles
        })
    }

    /// Returns precompiles for the Berlin spec.
    pub fn berlin() -> &'static Self {
        static INSTANCE: OnceLock<Precompiles> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::istanbul().clone();
            // EIP-2565: ModExp gas cost.
            precompiles.set(0x05, modexp::berlin_run);
            debug_assert_eq!(precompiles.addresses, BERLIN_PRECOMPILES);
            precompiles
        })
    }

    /// Returns precompiles for the Cancun spec.
    pub fn cancun() -> &'static Self {
        static INSTANCE: OnceLock<Precompiles> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::berlin().clone();
            // EIP-4844: Shard blob transactions.
            precompiles.set(0x0a, kzg_point_evaluation::run);
            debug_assert_eq!(precompiles.addresses, CANCUN_PRECOMPILES);
            precompiles
        })
    }

    /// Returns precompiles for the Prague spec.
    pub fn prague() -> &'static Self {
        static INSTANCE: OnceLock<Precompiles> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::cancun().clone();
            // EIP-2537: BLS12-381 curve operations.
            precompiles.set(0x0b, bls12_381::g1_add::g1_add);
            precompiles.set(0x0c, bls12_381::g1_mul::g1_mul);
            precompiles.set(0x0d, bls12_381::g1_msm::g1_msm);
            precompiles.set(0x0e, bls12_381::g2_add::g2_add);
            precompiles.set(0x0f, bls12_381::g2_mul::g2_mul);
            precompiles.set(0x10, bls12_381::g2_msm::g2_msm);
            precompiles.set(0x11, bls12_381::pairing::pairing);
            precompiles.set(0x12, bls12_381::map_fp_to_g1::map_fp_to_g1);
            precompiles.set(0x13, bls12_381::map_fp2_to_g2::map_fp2_to_g2);
            debug_assert_eq!(precompiles.addresses, PRAGUE_PRECOMPILES);
            precompiles
        })
    }

    /// Returns the precompiles for the latest spec.
    pub fn latest() -> &'static Self {
        Self::prague()
    }

    /// Sets a precompile function at the given low-byte index.
    #[inline]
    fn set(&mut self, index: usize, f: PrecompileFn) {
        if index < MAX_PRECOMPILE_INDEX {
            self.table[index] = Some(f);
            self.addresses |= 1 << index;
        }
    }

    /// Checks if the given address is a precompile in this set.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        match address_to_index(address) {
            Some(index) => self.addresses & (1 << index) != 0,
            None => false,
        }
    }

    /// Executes the precompile at the given address.
    ///
    /// Returns `None` if the address is not in this set.
    #[inline]
    pub fn call(&self, address: &Address, input: &[u8], gas_limit: u64) -> Option<PrecompileResult> {
        let f = self.table[address_to_index(address)?]?;
        Some(f(input, gas_limit))
    }

    /// Returns the precompile function for the given address.
    #[inline]
    pub fn get(&self, address: &Address) -> Option<PrecompileFn> {
        self.table[address_to_index(address)?]
    }

    /// Returns the number of precompiles in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.addresses.count_ones() as usize
    }

    /// Checks if this set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.addresses == 0
    }

    /// Returns an iterator over the addresses in this set.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        (1..MAX_PRECOMPILE_INDEX)
            .filter(|index| self.addresses & (1 << index) != 0)
            .map(|index| u64_to_address(index as u64))
    }
}

/// Converts a u64 to an [`Address`] by padding with zeros on the left.
///
/// Note that 12 bytes of zeros + 8 bytes from the u64 = 20 bytes (address
/// length). This is a convenience for naming precompile addresses.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}

/// Converts an address to a lookup-table index.
///
/// Returns `Some(index)` if the address is of the form `0x00…00XX` with XX in
/// 1..32, otherwise `None`.
#[inline]
pub fn address_to_index(address: &Address) -> Option<usize> {
    let bytes = address.as_slice();
    if bytes[..19].iter().all(|&b| b == 0) {
        let last = bytes[19] as usize;
        if last > 0 && last < MAX_PRECOMPILE_INDEX {
            return Some(last);
        }
    }
    None
}
