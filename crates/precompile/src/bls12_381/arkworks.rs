//! Curve arithmetic on BLS12-381 via arkworks.
//!
//! Parsing is strict: field elements must be canonical (less than the 381-bit
//! modulus) and points must satisfy the curve equation and lie in the
//! prime-order subgroup. The all-zero encoding is the point at infinity.
use super::{G1Point, G2Point};
use crate::{
    bls12_381_const::{FP_LENGTH, G1_LENGTH, G2_LENGTH, SCALAR_LENGTH},
    PrecompileError,
};
use ark_bls12_381::{Bls12_381, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{
    hashing::{curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurve},
    pairing::Pairing,
    AffineRepr, CurveGroup, VariableBaseMSM,
};
use ark_ff::{One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Reads a canonical base field element from 48 big-endian bytes.
fn read_fp(bytes: &[u8; FP_LENGTH]) -> Result<Fq, PrecompileError> {
    let mut le = *bytes;
    le.reverse();
    Fq::deserialize_uncompressed(&le[..]).map_err(|_| PrecompileError::InvalidPoint)
}

/// Reads an Fp2 element from its two coordinates.
fn read_fp2(c0: &[u8; FP_LENGTH], c1: &[u8; FP_LENGTH]) -> Result<Fq2, PrecompileError> {
    Ok(Fq2::new(read_fp(c0)?, read_fp(c1)?))
}

/// Creates a G1 point from affine coordinates, treating (0, 0) as the point
/// at infinity. Scalar multiplications, MSMs and pairings require points in
/// the prime-order subgroup, and the suite mandates the check everywhere.
fn new_g1_point(x: Fq, y: Fq) -> Result<G1Affine, PrecompileError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrecompileError::InvalidPoint);
    }
    Ok(point)
}

/// Creates a G2 point from affine coordinates, treating (0, 0) as the point
/// at infinity.
fn new_g2_point(x: Fq2, y: Fq2) -> Result<G2Affine, PrecompileError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrecompileError::InvalidPoint);
    }
    Ok(point)
}

fn read_g1_point(point: G1Point) -> Result<G1Affine, PrecompileError> {
    let (x, y) = point;
    new_g1_point(read_fp(&x)?, read_fp(&y)?)
}

fn read_g2_point(point: G2Point) -> Result<G2Affine, PrecompileError> {
    let (x0, x1, y0, y1) = point;
    new_g2_point(read_fp2(&x0, &x1)?, read_fp2(&y0, &y1)?)
}

/// Serializes a base field element into 48 big-endian bytes.
fn write_fp(element: &Fq, out: &mut [u8]) {
    debug_assert_eq!(out.len(), FP_LENGTH);
    let mut le = [0u8; FP_LENGTH];
    element
        .serialize_uncompressed(&mut le[..])
        .expect("field element fits the buffer");
    le.reverse();
    out.copy_from_slice(&le);
}

/// Encodes a G1 point as 96 big-endian bytes; infinity encodes as zeros.
fn encode_g1_point(point: G1Affine) -> [u8; G1_LENGTH] {
    let mut output = [0u8; G1_LENGTH];
    if let Some((x, y)) = point.xy() {
        write_fp(&x, &mut output[..FP_LENGTH]);
        write_fp(&y, &mut output[FP_LENGTH..]);
    }
    output
}

/// Encodes a G2 point as 192 big-endian bytes; infinity encodes as zeros.
fn encode_g2_point(point: G2Affine) -> [u8; G2_LENGTH] {
    let mut output = [0u8; G2_LENGTH];
    if let Some((x, y)) = point.xy() {
        write_fp(&x.c0, &mut output[..FP_LENGTH]);
        write_fp(&x.c1, &mut output[FP_LENGTH..2 * FP_LENGTH]);
        write_fp(&y.c0, &mut output[2 * FP_LENGTH..3 * FP_LENGTH]);
        write_fp(&y.c1, &mut output[3 * FP_LENGTH..]);
    }
    output
}

/// Reads an unreduced 32-byte big-endian scalar.
///
/// Reduction modulo the group order is exact for points in the prime-order
/// subgroup, which every parsed point is.
fn read_scalar(bytes: &[u8; SCALAR_LENGTH]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

/// Adds two G1 points.
pub(crate) fn g1_add_affine(a: G1Point, b: G1Point) -> Result<[u8; G1_LENGTH], PrecompileError> {
    let a = read_g1_point(a)?;
    let b = read_g1_point(b)?;
    Ok(encode_g1_point((a + b).into_affine()))
}

/// Multiplies a G1 point by a scalar.
pub(crate) fn g1_mul(
    p: G1Point,
    scalar: &[u8; SCALAR_LENGTH],
) -> Result<[u8; G1_LENGTH], PrecompileError> {
    let p = read_g1_point(p)?;
    Ok(encode_g1_point((p * read_scalar(scalar)).into_affine()))
}

/// Computes a G1 multi-scalar multiplication.
pub(crate) fn g1_msm(
    pairs: &[(G1Point, [u8; SCALAR_LENGTH])],
) -> Result<[u8; G1_LENGTH], PrecompileError> {
    let mut points = Vec::with_capacity(pairs.len());
    let mut scalars = Vec::with_capacity(pairs.len());
    for (point, scalar) in pairs {
        points.push(read_g1_point(*point)?);
        scalars.push(read_scalar(scalar));
    }

    let sum = G1Projective::msm(&points, &scalars).map_err(|_| PrecompileError::InvalidInput)?;
    Ok(encode_g1_point(sum.into_affine()))
}

/// Adds two G2 points.
pub(crate) fn g2_add_affine(a: G2Point, b: G2Point) -> Result<[u8; G2_LENGTH], PrecompileError> {
    let a = read_g2_point(a)?;
    let b = read_g2_point(b)?;
    Ok(encode_g2_point((a + b).into_affine()))
}

/// Multiplies a G2 point by a scalar.
pub(crate) fn g2_mul(
    p: G2Point,
    scalar: &[u8; SCALAR_LENGTH],
) -> Result<[u8; G2_LENGTH], PrecompileError> {
    let p = read_g2_point(p)?;
    Ok(encode_g2_point((p * read_scalar(scalar)).into_affine()))
}

/// Computes a G2 multi-scalar multiplication.
pub(crate) fn g2_msm(
    pairs: &[(G2Point, [u8; SCALAR_LENGTH])],
) -> Result<[u8; G2_LENGTH], PrecompileError> {
    let mut points = Vec::with_capacity(pairs.len());
    let mut scalars = Vec::with_capacity(pairs.len());
    for (point, scalar) in pairs {
        points.push(read_g2_point(*point)?);
        scalars.push(read_scalar(scalar));
    }

    let sum = G2Projective::msm(&points, &scalars).map_err(|_| PrecompileError::InvalidInput)?;
    Ok(encode_g2_point(sum.into_affine()))
}

/// Computes the product of pairings over the given pairs and compares it
/// against the identity of the target field.
pub(crate) fn pairing_check(pairs: &[(G1Point, G2Point)]) -> Result<bool, PrecompileError> {
    let mut g1_points = Vec::with_capacity(pairs.len());
    let mut g2_points = Vec::with_capacity(pairs.len());

    for (g1, g2) in pairs {
        let g1 = read_g1_point(*g1)?;
        let g2 = read_g2_point(*g2)?;
        // e(O, Q) = e(P, O) = 1 contributes nothing to the product.
        if g1.is_zero() || g2.is_zero() {
            continue;
        }
        g1_points.push(g1);
        g2_points.push(g2);
    }

    if g1_points.is_empty() {
        return Ok(true);
    }
    Ok(Bls12_381::multi_pairing(g1_points, g2_points).0.is_one())
}

/// Maps a base field element to a G1 point: the RFC 9380 simplified-SWU map
/// through the 11-isogeny, followed by cofactor clearing. No hashing is
/// involved; the element is mapped directly.
pub(crate) fn map_fp_to_g1(fp: &[u8; FP_LENGTH]) -> Result<[u8; G1_LENGTH], PrecompileError> {
    let fp = read_fp(fp)?;
    let point = WBMap::<ark_bls12_381::g1::Config>::map_to_curve(fp)
        .map_err(|_| PrecompileError::InvalidPoint)?;
    Ok(encode_g1_point(point.clear_cofactor()))
}

/// Maps an Fp2 element to a G2 point, as [`map_fp_to_g1`] does for G1.
pub(crate) fn map_fp2_to_g2(
    c0: &[u8; FP_LENGTH],
    c1: &[u8; FP_LENGTH],
) -> Result<[u8; G2_LENGTH], PrecompileError> {
    let fp2 = read_fp2(c0, c1)?;
    let point = WBMap::<ark_bls12_381::g2::Config>::map_to_curve(fp2)
        .map_err(|_| PrecompileError::InvalidPoint)?;
    Ok(encode_g2_point(point.clear_cofactor()))
}
