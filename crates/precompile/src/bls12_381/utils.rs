//! Padding helpers for the EIP-2537 encodings.
use crate::{
    bls12_381_const::{
        FP_LENGTH, G1_LENGTH, G2_LENGTH, PADDED_FP_LENGTH, PADDED_G1_LENGTH, PADDED_G2_LENGTH,
        PADDING_LENGTH,
    },
    PrecompileError,
};

/// Removes the 16-byte zero prefix from a padded field element.
///
/// A non-zero prefix cannot be a valid encoding of an element of the 381-bit
/// field and is rejected as an invalid point.
pub(crate) fn remove_fp_padding(input: &[u8]) -> Result<&[u8; FP_LENGTH], PrecompileError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }
    if !input[..PADDING_LENGTH].iter().all(|&b| b == 0) {
        return Err(PrecompileError::InvalidPoint);
    }
    Ok(input[PADDING_LENGTH..].try_into().unwrap())
}

/// Removes the padding from both coordinates of a padded G1 point.
pub(crate) fn remove_g1_padding(input: &[u8]) -> Result<[&[u8; FP_LENGTH]; 2], PrecompileError> {
    if input.len() != PADDED_G1_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }
    let x = remove_fp_padding(&input[..PADDED_FP_LENGTH])?;
    let y = remove_fp_padding(&input[PADDED_FP_LENGTH..])?;
    Ok([x, y])
}

/// Removes the padding from all four coordinates of a padded G2 point.
pub(crate) fn remove_g2_padding(input: &[u8]) -> Result<[&[u8; FP_LENGTH]; 4], PrecompileError> {
    if input.len() != PADDED_G2_LENGTH {
        return Err(PrecompileError::InvalidInput);
    }
    let mut coords = [&[0u8; FP_LENGTH]; 4];
    for (i, coord) in coords.iter_mut().enumerate() {
        let start = i * PADDED_FP_LENGTH;
        *coord = remove_fp_padding(&input[start..start + PADDED_FP_LENGTH])?;
    }
    Ok(coords)
}

/// Pads an unpadded G1 point back into its 128-byte wire shape.
pub(crate) fn pad_g1_point(unpadded: &[u8; G1_LENGTH]) -> [u8; PADDED_G1_LENGTH] {
    let mut padded = [0u8; PADDED_G1_LENGTH];
    padded[PADDING_LENGTH..PADDED_FP_LENGTH].copy_from_slice(&unpadded[..FP_LENGTH]);
    padded[PADDED_FP_LENGTH + PADDING_LENGTH..].copy_from_slice(&unpadded[FP_LENGTH..]);
    padded
}

/// Pads an unpadded G2 point back into its 256-byte wire shape.
pub(crate) fn pad_g2_point(unpadded: &[u8; G2_LENGTH]) -> [u8; PADDED_G2_LENGTH] {
    let mut padded = [0u8; PADDED_G2_LENGTH];
    for i in 0..4 {
        padded[i * PADDED_FP_LENGTH + PADDING_LENGTH..(i + 1) * PADDED_FP_LENGTH]
            .copy_from_slice(&unpadded[i * FP_LENGTH..(i + 1) * FP_LENGTH]);
    }
    padded
}
