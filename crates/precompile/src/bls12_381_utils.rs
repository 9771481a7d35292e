//! Shared gas logic for the BLS12-381 precompiles.
use crate::bls12_381_const::MSM_MULTIPLIER;

/// Implements the gas schedule for G1/G2 multi-scalar multiplication:
/// `k * multiplication_cost * discount(k) / 1000`, saturating.
///
/// The discount assumes a Pippenger-style MSM; `discount(1)` is 1000, so a
/// single pair prices exactly like the corresponding mul operation.
pub fn msm_required_gas(k: usize, discount_table: &[u16; 128], multiplication_cost: u64) -> u64 {
    if k == 0 {
        return 0;
    }

    let index = core::cmp::min(k, discount_table.len()) - 1;
    let discount = discount_table[index] as u64;

    (k as u64)
        .saturating_mul(multiplication_cost)
        .saturating_mul(discount)
        / MSM_MULTIPLIER
}
