//! Shared encodings used by the suite's unit tests: the curve generators in
//! their padded wire shape and the identity encodings.
use crate::bls12_381_const::{PADDED_G1_LENGTH, PADDED_G2_LENGTH};
use primitives::hex;

/// The padded all-zero G1 encoding, the point at infinity.
pub(crate) const G1_IDENTITY: [u8; PADDED_G1_LENGTH] = [0; PADDED_G1_LENGTH];

/// The padded all-zero G2 encoding, the point at infinity.
pub(crate) const G2_IDENTITY: [u8; PADDED_G2_LENGTH] = [0; PADDED_G2_LENGTH];

/// The padded G1 generator.
pub(crate) const G1_GENERATOR: [u8; PADDED_G1_LENGTH] = hex!(
    "00000000000000000000000000000000\
     17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb\
     00000000000000000000000000000000\
     08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
);

/// The padded G2 generator.
pub(crate) const G2_GENERATOR: [u8; PADDED_G2_LENGTH] = hex!(
    "00000000000000000000000000000000\
     024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8\
     00000000000000000000000000000000\
     13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e\
     00000000000000000000000000000000\
     0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801\
     00000000000000000000000000000000\
     0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"
);
