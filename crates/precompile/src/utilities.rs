//! Helper routines shared by the precompile implementations: zero-padding
//! views over caller input, output shaping, and the linear gas formula used
//! by the hash and identity precompiles.
use primitives::{Bytes, B256};
use std::borrow::Cow;

/// Right-pads the given slice with zeroes until `LEN`.
///
/// Returns the first `LEN` bytes if it does not need padding. The original
/// input is never copied in that case and never mutated in either case.
#[inline]
pub fn right_pad<const LEN: usize>(data: &[u8]) -> Cow<'_, [u8; LEN]> {
    if let Some(data) = data.get(..LEN) {
        Cow::Borrowed(data.try_into().unwrap())
    } else {
        let mut padded = [0; LEN];
        padded[..data.len()].copy_from_slice(data);
        Cow::Owned(padded)
    }
}

/// Right-pads the given slice with zeroes until `len`.
///
/// Returns the first `len` bytes if it does not need padding.
#[inline]
pub fn right_pad_vec(data: &[u8], len: usize) -> Cow<'_, [u8]> {
    if let Some(data) = data.get(..len) {
        Cow::Borrowed(data)
    } else {
        let mut padded = vec![0; len];
        padded[..data.len()].copy_from_slice(data);
        Cow::Owned(padded)
    }
}

/// Left-pads the given slice with zeroes until `LEN`.
///
/// Returns the first `LEN` bytes if it does not need padding.
#[inline]
pub fn left_pad<const LEN: usize>(data: &[u8]) -> Cow<'_, [u8; LEN]> {
    if let Some(data) = data.get(..LEN) {
        Cow::Borrowed(data.try_into().unwrap())
    } else {
        let mut padded = [0; LEN];
        padded[LEN - data.len()..].copy_from_slice(data);
        Cow::Owned(padded)
    }
}

/// Converts a boolean to a 32-byte big-endian 0/1 word, the output shape of
/// the pairing precompiles.
#[inline]
pub fn bool_to_bytes32(value: bool) -> Bytes {
    B256::with_last_byte(value as u8).into()
}

/// Calculates `base + word * ceil(len / 32)`, saturating.
#[inline]
pub fn calc_linear_cost_u32(len: usize, base: u64, word: u64) -> u64 {
    (len as u64)
        .div_ceil(32)
        .saturating_mul(word)
        .saturating_add(base)
}
