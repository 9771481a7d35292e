//! Contains the [`Hardfork`] activation tag and its implementation.
use core::str::FromStr;

/// Hardfork activation tag.
///
/// Tags are ordered; a later tag strictly includes the precompile set of every
/// earlier one. Only the forks that change the precompile surface are listed.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardfork {
    /// Frontier: ECRECOVER, SHA-256, RIPEMD-160 and IDENTITY.
    Frontier = 0,
    /// Homestead: same precompile set as Frontier.
    Homestead,
    /// Byzantium: EIP-198 MODEXP and the EIP-196/197 BN254 operations.
    Byzantium,
    /// Istanbul: EIP-152 BLAKE2F; EIP-1108 reprices the BN254 operations.
    Istanbul,
    /// Berlin: EIP-2565 reprices MODEXP.
    Berlin,
    /// Cancun: EIP-4844 point evaluation.
    Cancun,
    /// Prague: the BLS12-381 operation suite.
    #[default]
    Prague,
}

impl Hardfork {
    /// Checks whether `self` is active at or after the `other` activation tag.
    #[inline]
    pub const fn is_enabled_in(self, other: Hardfork) -> bool {
        other as u8 <= self as u8
    }
}

/// Error returned when parsing an unknown hardfork name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownHardfork;

impl FromStr for Hardfork {
    type Err = UnknownHardfork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            name::FRONTIER => Ok(Self::Frontier),
            name::HOMESTEAD => Ok(Self::Homestead),
            name::BYZANTIUM => Ok(Self::Byzantium),
            name::ISTANBUL => Ok(Self::Istanbul),
            name::BERLIN => Ok(Self::Berlin),
            name::CANCUN => Ok(Self::Cancun),
            name::PRAGUE => Ok(Self::Prague),
            _ => Err(UnknownHardfork),
        }
    }
}

impl From<Hardfork> for &'static str {
    fn from(fork: Hardfork) -> Self {
        match fork {
            Hardfork::Frontier => name::FRONTIER,
            Hardfork::Homestead => name::HOMESTEAD,
            Hardfork::Byzantium => name::BYZANTIUM,
            Hardfork::Istanbul => name::ISTANBUL,
            Hardfork::Berlin => name::BERLIN,
            Hardfork::Cancun => name::CANCUN,
            Hardfork::Prague => name::PRAGUE,
        }
    }
}

/// String identifiers for the hardforks.
pub mod name {
    /// String identifier for the Frontier hardfork.
    pub const FRONTIER: &str = "Frontier";
    /// String identifier for the Homestead hardfork.
    pub const HOMESTEAD: &str = "Homestead";
    /// String identifier for the Byzantium hardfork.
    pub const BYZANTIUM: &str = "Byzantium";
    /// String identifier for the Istanbul hardfork.
    pub const ISTANBUL: &str = "Istanbul";
    /// String identifier for the Berlin hardfork.
    pub const BERLIN: &str = "Berlin";
    /// String identifier for the Cancun hardfork.
    pub const CANCUN: &str = "Cancun";
    /// String identifier for the Prague hardfork.
    pub const PRAGUE: &str = "Prague";
}
