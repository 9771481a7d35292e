//! BN254 (alt-bn128) precompiles: ECADD (0x06), ECMUL (0x07) and
//! ECPAIRING (0x08), per EIP-196/197 with the EIP-1108 Istanbul repricing.
use crate::{
    crypto,
    utilities::{bool_to_bytes32, right_pad},
    PrecompileError, PrecompileOutput, PrecompileResult,
};
use primitives::Bytes;

/// Length of a base field element encoding.
pub const FQ_LEN: usize = 32;
/// Length of an uncompressed G1 point encoding.
pub const G1_LEN: usize = 2 * FQ_LEN;
/// Length of a scalar encoding.
pub const SCALAR_LEN: usize = 32;
/// Length of one (G1, G2) group in the pairing input.
pub const PAIR_ELEMENT_LEN: usize = 192;

/// ECADD precompile.
pub mod add {
    use super::*;

    /// ECADD gas cost under Byzantium.
    pub const BYZANTIUM_ADD_GAS_COST: u64 = 500;
    /// ECADD gas cost from Istanbul onward (EIP-1108).
    pub const ISTANBUL_ADD_GAS_COST: u64 = 150;

    /// ECADD run function with Byzantium pricing.
    pub fn byzantium_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
        run_add(input, BYZANTIUM_ADD_GAS_COST, gas_limit)
    }

    /// ECADD run function with Istanbul pricing.
    pub fn istanbul_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
        run_add(input, ISTANBUL_ADD_GAS_COST, gas_limit)
    }
}

/// ECMUL precompile.
pub mod mul {
    use super::*;

    /// ECMUL gas cost under Byzantium.
    pub const BYZANTIUM_MUL_GAS_COST: u64 = 40_000;
    /// ECMUL gas cost from Istanbul onward (EIP-1108).
    pub const ISTANBUL_MUL_GAS_COST: u64 = 6_000;

    /// ECMUL run function with Byzantium pricing.
    pub fn byzantium_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
        run_mul(input, BYZANTIUM_MUL_GAS_COST, gas_limit)
    }

    /// ECMUL run function with Istanbul pricing.
    pub fn istanbul_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
        run_mul(input, ISTANBUL_MUL_GAS_COST, gas_limit)
    }
}

/// ECPAIRING precompile.
pub mod pair {
    use super::*;

    /// ECPAIRING base gas cost under Byzantium.
    pub const BYZANTIUM_PAIR_BASE: u64 = 100_000;
    /// ECPAIRING per-pair gas cost under Byzantium.
    pub const BYZANTIUM_PAIR_PER_POINT: u64 = 80_000;
    /// ECPAIRING base gas cost from Istanbul onward (EIP-1108).
    pub const ISTANBUL_PAIR_BASE: u64 = 45_000;
    /// ECPAIRING per-pair gas cost from Istanbul onward (EIP-1108).
    pub const ISTANBUL_PAIR_PER_POINT: u64 = 34_000;

    /// ECPAIRING run function with Byzantium pricing.
    pub fn byzantium_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
        run_pair(input, BYZANTIUM_PAIR_PER_POINT, BYZANTIUM_PAIR_BASE, gas_limit)
    }

    /// ECPAIRING run function with Istanbul pricing.
    pub fn istanbul_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
        run_pair(input, ISTANBUL_PAIR_PER_POINT, ISTANBUL_PAIR_BASE, gas_limit)
    }
}

/// Runs the ECADD precompile with the given fixed cost.
///
/// The input is shaped to 128 bytes, two G1 points; the all-zero encoding is
/// the point at infinity, so adding it returns the other point.
pub fn run_add(input: &[u8], gas_cost: u64, gas_limit: u64) -> PrecompileResult {
    if gas_cost > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let input = right_pad::<{ 2 * G1_LEN }>(input);
    let output = crypto().bn254_g1_add(&input[..G1_LEN], &input[G1_LEN..])?;
    Ok(PrecompileOutput::new(gas_cost, Bytes::copy_from_slice(&output)))
}

/// Runs the ECMUL precompile with the given fixed cost.
///
/// The input is shaped to 96 bytes: a G1 point followed by a scalar.
pub fn run_mul(input: &[u8], gas_cost: u64, gas_limit: u64) -> PrecompileResult {
    if gas_cost > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let input = right_pad::<{ G1_LEN + SCALAR_LEN }>(input);
    let output = crypto().bn254_g1_mul(&input[..G1_LEN], &input[G1_LEN..])?;
    Ok(PrecompileOutput::new(gas_cost, Bytes::copy_from_slice(&output)))
}

/// Runs the ECPAIRING precompile with the given pricing.
///
/// The input length must be a multiple of 192; each group encodes one
/// (G1, G2) pair. The output is a 32-byte word whose last byte is 1 iff the
/// product of pairings is the identity. The empty input is valid and yields 1.
pub fn run_pair(
    input: &[u8],
    pair_per_point_cost: u64,
    pair_base_cost: u64,
    gas_limit: u64,
) -> PrecompileResult {
    let gas_used = pair_base_cost
        .saturating_add(((input.len() / PAIR_ELEMENT_LEN) as u64).saturating_mul(pair_per_point_cost));
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() % PAIR_ELEMENT_LEN != 0 {
        return Err(PrecompileError::InvalidInput);
    }

    let pairs: Vec<(&[u8], &[u8])> = input
        .chunks_exact(PAIR_ELEMENT_LEN)
        .map(|group| (&group[..G1_LEN], &group[G1_LEN..]))
        .collect();

    let success = crypto().bn254_pairing_check(&pairs)?;
    Ok(PrecompileOutput::new(gas_used, bool_to_bytes32(success)))
}

/// Curve arithmetic on BN254 via arkworks.
///
/// All parsing here is strict: field elements must be canonical (less than
/// the modulus) and points must satisfy the curve equation and lie in the
/// prime-order subgroup, otherwise [`PrecompileError::InvalidPoint`] is
/// returned.
pub(crate) mod arkworks {
    use super::{FQ_LEN, G1_LEN};
    use crate::PrecompileError;
    use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
    use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
    use ark_ff::{One, PrimeField, Zero};
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

    /// Reads a canonical base field element from 32 big-endian bytes.
    fn read_fq(bytes: &[u8]) -> Result<Fq, PrecompileError> {
        debug_assert_eq!(bytes.len(), FQ_LEN);
        let mut le = [0u8; FQ_LEN];
        le.copy_from_slice(bytes);
        le.reverse();
        Fq::deserialize_uncompressed(&le[..]).map_err(|_| PrecompileError::InvalidPoint)
    }

    /// Creates a G1 point from affine coordinates, treating (0, 0) as the
    /// point at infinity.
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

    /// Reads a G1 point from its 64-byte `x ‖ y` encoding.
    fn read_g1_point(bytes: &[u8]) -> Result<G1Affine, PrecompileError> {
        let x = read_fq(&bytes[..FQ_LEN])?;
        let y = read_fq(&bytes[FQ_LEN..G1_LEN])?;
        new_g1_point(x, y)
    }

    /// Reads a G2 point from its 128-byte encoding. Per EIP-197 each Fp2
    /// coordinate carries the imaginary part first: `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0`.
    fn read_g2_point(bytes: &[u8]) -> Result<G2Affine, PrecompileError> {
        let x_c1 = read_fq(&bytes[..FQ_LEN])?;
        let x_c0 = read_fq(&bytes[FQ_LEN..2 * FQ_LEN])?;
        let y_c1 = read_fq(&bytes[2 * FQ_LEN..3 * FQ_LEN])?;
        let y_c0 = read_fq(&bytes[3 * FQ_LEN..4 * FQ_LEN])?;

        let x = Fq2::new(x_c0, x_c1);
        let y = Fq2::new(y_c0, y_c1);
        if x.is_zero() && y.is_zero() {
            return Ok(G2Affine::identity());
        }
        let point = G2Affine::new_unchecked(x, y);
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(PrecompileError::InvalidPoint);
        }
        Ok(point)
    }

    /// Encodes a G1 point as 64 big-endian bytes; infinity encodes as zeros.
    fn encode_g1_point(point: G1Affine) -> [u8; G1_LEN] {
        let mut output = [0u8; G1_LEN];
        let Some((x, y)) = point.xy() else {
            return output;
        };

        let mut bytes = [0u8; FQ_LEN];
        x.serialize_uncompressed(&mut bytes[..])
            .expect("field element fits the buffer");
        bytes.reverse();
        output[..FQ_LEN].copy_from_slice(&bytes);

        y.serialize_uncompressed(&mut bytes[..])
            .expect("field element fits the buffer");
        bytes.reverse();
        output[FQ_LEN..].copy_from_slice(&bytes);
        output
    }

    /// Adds two encoded G1 points.
    pub(crate) fn g1_point_add(p1: &[u8], p2: &[u8]) -> Result<[u8; G1_LEN], PrecompileError> {
        let p1 = read_g1_point(p1)?;
        let p2 = read_g1_point(p2)?;
        Ok(encode_g1_point((p1 + p2).into_affine()))
    }

    /// Multiplies an encoded G1 point by a 32-byte big-endian scalar.
    ///
    /// The scalar is reduced modulo the group order, which is exact for
    /// points in the prime-order subgroup.
    pub(crate) fn g1_point_mul(point: &[u8], scalar: &[u8]) -> Result<[u8; G1_LEN], PrecompileError> {
        let p = read_g1_point(point)?;
        let fr = Fr::from_be_bytes_mod_order(scalar);
        Ok(encode_g1_point((p * fr).into_affine()))
    }

    /// Computes the product of optimal-ate pairings over the given pairs and
    /// compares it against the identity.
    pub(crate) fn pairing_check(pairs: &[(&[u8], &[u8])]) -> Result<bool, PrecompileError> {
        let mut g1_points = Vec::with_capacity(pairs.len());
        let mut g2_points = Vec::with_capacity(pairs.len());

        for (g1_bytes, g2_bytes) in pairs {
            let g1 = read_g1_point(g1_bytes)?;
            let g2 = read_g2_point(g2_bytes)?;
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
        Ok(Bn254::multi_pairing(g1_points, g2_points).0.is_one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::hex;

    /// The G1 generator (1, 2).
    const G1_GEN: [u8; 64] = hex!(
        "0000000000000000000000000000000000000000000000000000000000000001\
         0000000000000000000000000000000000000000000000000000000000000002"
    );

    /// 2 · (1, 2), the EIP-196 reference doubling.
    const G1_GEN_DOUBLED: [u8; 64] = hex!(
        "030644e072e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd\
         15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4"
    );

    /// -(1, 2), i.e. (1, p - 2).
    const G1_GEN_NEGATED: [u8; 64] = hex!(
        "0000000000000000000000000000000000000000000000000000000000000001\
         30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd45"
    );

    /// The G2 generator in EIP-197 encoding.
    const G2_GEN: [u8; 128] = hex!(
        "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2\
         1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed\
         090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b\
         12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"
    );

    #[test]
    fn add_two_infinities() {
        let input = [0u8; 128];
        let out = add::istanbul_run(&input, 200).unwrap();
        assert_eq!(out.gas_used, 150);
        assert_eq!(out.bytes.as_ref(), [0u8; 64]);

        let out = add::byzantium_run(&input, 500).unwrap();
        assert_eq!(out.gas_used, 500);
    }

    #[test]
    fn add_generator_to_itself() {
        let mut input = Vec::with_capacity(128);
        input.extend_from_slice(&G1_GEN);
        input.extend_from_slice(&G1_GEN);
        let out = add::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), G1_GEN_DOUBLED);
    }

    #[test]
    fn add_truncated_input_is_padded_with_infinity() {
        let out = add::istanbul_run(&G1_GEN, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), G1_GEN);
    }

    #[test]
    fn add_point_and_its_negation() {
        let mut input = Vec::with_capacity(128);
        input.extend_from_slice(&G1_GEN);
        input.extend_from_slice(&G1_GEN_NEGATED);
        let out = add::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; 64]);
    }

    #[test]
    fn add_rejects_point_off_curve() {
        let mut input = vec![0u8; 128];
        input[31] = 1;
        input[63] = 3;
        assert_eq!(
            add::istanbul_run(&input, 100_000),
            Err(PrecompileError::InvalidPoint)
        );
    }

    #[test]
    fn add_rejects_non_canonical_field_element() {
        // x = p is not a canonical encoding.
        let mut input = vec![0u8; 128];
        input[..32].copy_from_slice(&hex!(
            "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
        ));
        assert_eq!(
            add::istanbul_run(&input, 100_000),
            Err(PrecompileError::InvalidPoint)
        );
    }

    #[test]
    fn mul_generator_by_two() {
        let mut input = Vec::with_capacity(96);
        input.extend_from_slice(&G1_GEN);
        input.extend_from_slice(&{
            let mut scalar = [0u8; 32];
            scalar[31] = 2;
            scalar
        });
        let out = mul::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 6_000);
        assert_eq!(out.bytes.as_ref(), G1_GEN_DOUBLED);
    }

    #[test]
    fn mul_by_zero_is_infinity() {
        let mut input = vec![0u8; 96];
        input[..64].copy_from_slice(&G1_GEN);
        let out = mul::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; 64]);
    }

    #[test]
    fn mul_infinity_is_infinity() {
        let mut input = vec![0u8; 96];
        input[95] = 7;
        let out = mul::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; 64]);
    }

    #[test]
    fn mul_out_of_gas() {
        assert_eq!(
            mul::istanbul_run(&[0; 96], 5_999),
            Err(PrecompileError::OutOfGas)
        );
        assert_eq!(
            mul::byzantium_run(&[0; 96], 39_999),
            Err(PrecompileError::OutOfGas)
        );
    }

    #[test]
    fn pair_empty_input_is_one() {
        let out = pair::istanbul_run(&[], 100_000).unwrap();
        assert_eq!(out.gas_used, 45_000);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn pair_rejects_ragged_input() {
        assert_eq!(
            pair::istanbul_run(&[0; 191], 10_000_000),
            Err(PrecompileError::InvalidInput)
        );
    }

    #[test]
    fn pair_infinity_g1_is_one() {
        let mut input = Vec::with_capacity(192);
        input.extend_from_slice(&[0u8; 64]);
        input.extend_from_slice(&G2_GEN);
        let out = pair::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.gas_used, 79_000);
        assert_eq!(out.bytes[31], 1);
    }

    #[test]
    fn pair_cancels_with_negation() {
        // e(P, Q) * e(-P, Q) == 1
        let mut input = Vec::with_capacity(384);
        input.extend_from_slice(&G1_GEN);
        input.extend_from_slice(&G2_GEN);
        input.extend_from_slice(&G1_GEN_NEGATED);
        input.extend_from_slice(&G2_GEN);
        let out = pair::istanbul_run(&input, 200_000).unwrap();
        assert_eq!(out.gas_used, 113_000);
        assert_eq!(out.bytes[31], 1);
    }

    #[test]
    fn pair_single_generator_pair_is_not_one() {
        let mut input = Vec::with_capacity(192);
        input.extend_from_slice(&G1_GEN);
        input.extend_from_slice(&G2_GEN);
        let out = pair::istanbul_run(&input, 100_000).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; 32]);
    }

    #[test]
    fn pair_out_of_gas_before_length_check() {
        // Gas is evaluated before the multiple-of-192 assertion.
        assert_eq!(
            pair::istanbul_run(&[0; 191], 44_999),
            Err(PrecompileError::OutOfGas)
        );
    }
}
