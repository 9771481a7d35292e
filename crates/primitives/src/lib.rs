//! # ethion-primitives
//!
//! Primitive types shared by the ethion crates: byte strings, fixed hashes,
//! addresses, 256-bit integers (re-exported from [`alloy_primitives`]), and
//! the [`hardfork`] activation tags.

pub mod hardfork;

pub use alloy_primitives::{
    self, address, b256, bytes, fixed_bytes, hex, keccak256, Address, Bytes, FixedBytes, B256,
    B512, U256,
};
pub use hardfork::Hardfork;
