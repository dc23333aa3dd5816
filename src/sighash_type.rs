// SPDX-License-Identifier: CC0-1.0

//! The sighash type selector byte.
//!
//! The byte is split into two fields:
//!
//! - bits 0-5: the base mode, selecting which outputs the signature commits
//!   to (`DEFAULT`, `ALL`, `NONE`, or `SINGLE`);
//! - bits 6-7: a two-bit flag field binding the signature to previous
//!   outputs, encoding exactly one of: no flag, `ANYONECANPAY` (`10`),
//!   `ANYPREVOUT` (`01`), or `ANYPREVOUTANYSCRIPT` (`11`).
//!
//! Because the three flags share the same two bits they are mutually
//! exclusive; a value never carries more than one of them.

use core::fmt;
#[cfg(feature = "alloc")]
use core::str;

#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};

#[cfg(feature = "alloc")]
use crate::error::SighashTypeParseError;
use crate::error::{InvalidSighashTypeError, SighashFlagError};
#[cfg(feature = "alloc")]
use crate::prelude::ToOwned;

/// SIGHASH_DEFAULT: the implicit Schnorr "sign all" mode, encoded on the wire
/// by the absence of a sighash byte.
pub const SIGHASH_DEFAULT: u8 = 0x00;
/// SIGHASH_ALL: sign all outputs.
pub const SIGHASH_ALL: u8 = 0x01;
/// SIGHASH_NONE: sign no outputs.
pub const SIGHASH_NONE: u8 = 0x02;
/// SIGHASH_SINGLE: sign the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u8 = 0x03;
/// SIGHASH_ANYONECANPAY: commit to only the input carrying the signature.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;
/// SIGHASH_ANYPREVOUT: allow the signature to be rebound to a different
/// previous output ([BIP-0118]).
///
/// [BIP-0118]: <https://github.com/bitcoin/bips/blob/master/bip-0118.mediawiki>
pub const SIGHASH_ANYPREVOUT: u8 = 0x40;
/// SIGHASH_ANYPREVOUTANYSCRIPT: allow the signature to be rebound to a
/// different previous output regardless of its script ([BIP-0118]).
///
/// [BIP-0118]: <https://github.com/bitcoin/bips/blob/master/bip-0118.mediawiki>
pub const SIGHASH_ANYPREVOUTANYSCRIPT: u8 = 0xc0;
/// Mask applied to extract the base mode from a sighash type byte.
pub const SIGHASH_BASE_MASK: u8 = 0x3f;

/// Mask covering the two-bit flag field.
const SIGHASH_FLAG_MASK: u8 = 0xc0;

/// A validated sighash type selector byte.
///
/// Construct one from the base mode constants ([`SighashType::ALL`] et al.)
/// plus the `with_*` flag combinators, or decode an untrusted byte with
/// [`SighashType::from_consensus_u8`]. Both paths accept exactly the same set
/// of bytes: those whose base mode bits are one of the four defined modes.
///
/// Values are cheap copyable tokens; equality, ordering, and hashing are
/// defined purely by the underlying byte.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SighashType(u8);

impl SighashType {
    /// The implicit Schnorr "sign all" mode (`0x00`).
    ///
    /// Semantically equivalent to [`SighashType::ALL`], but encoded on the
    /// wire by omitting the sighash byte. Whether to omit it is the
    /// signature serializer's decision, not this type's.
    pub const DEFAULT: Self = Self(SIGHASH_DEFAULT);
    /// Sign all outputs (`0x01`).
    pub const ALL: Self = Self(SIGHASH_ALL);
    /// Sign no outputs (`0x02`).
    pub const NONE: Self = Self(SIGHASH_NONE);
    /// Sign the output with the same index as the signed input (`0x03`).
    pub const SINGLE: Self = Self(SIGHASH_SINGLE);

    /// Constructs a new `SighashType` from a raw byte, e.g. the last byte of
    /// a script-embedded signature.
    ///
    /// # Errors
    ///
    /// If the base mode bits of `byte` are not one of the four defined base
    /// modes. The flag field always encodes exactly one of its four states,
    /// so it cannot be malformed on its own.
    #[inline]
    pub fn from_consensus_u8(byte: u8) -> Result<Self, InvalidSighashTypeError> {
        match byte & SIGHASH_BASE_MASK {
            SIGHASH_DEFAULT | SIGHASH_ALL | SIGHASH_NONE | SIGHASH_SINGLE => Ok(Self(byte)),
            _ => Err(InvalidSighashTypeError(byte)),
        }
    }

    /// Returns the byte that is serialized verbatim into the signature wire
    /// format.
    #[inline]
    pub fn to_consensus_u8(self) -> u8 { self.0 }

    /// Returns the base mode of this sighash type.
    #[inline]
    pub fn base(self) -> SighashBase {
        match self.0 & SIGHASH_BASE_MASK {
            SIGHASH_ALL => SighashBase::All,
            SIGHASH_NONE => SighashBase::None,
            SIGHASH_SINGLE => SighashBase::Single,
            // Construction rejects every other base pattern.
            _ => SighashBase::Default,
        }
    }

    /// Returns the input-binding flag carried by this sighash type, if any.
    #[inline]
    pub fn flag(self) -> Option<SighashFlag> {
        match self.0 & SIGHASH_FLAG_MASK {
            SIGHASH_ANYPREVOUT => Some(SighashFlag::AnyPrevout),
            SIGHASH_ANYONECANPAY => Some(SighashFlag::AnyoneCanPay),
            SIGHASH_ANYPREVOUTANYSCRIPT => Some(SighashFlag::AnyPrevoutAnyScript),
            _ => None,
        }
    }

    /// Returns a new value with the `ANYONECANPAY` flag set.
    ///
    /// # Errors
    ///
    /// If the flag is already set, or the value carries a flag that is
    /// mutually exclusive with it.
    #[inline]
    pub fn with_anyone_can_pay(self) -> Result<Self, SighashFlagError> {
        self.with_flag(SighashFlag::AnyoneCanPay)
    }

    /// Returns a new value with the `ANYPREVOUT` flag set.
    ///
    /// # Errors
    ///
    /// If the flag is already set, or the value carries a flag that is
    /// mutually exclusive with it.
    #[inline]
    pub fn with_any_prevout(self) -> Result<Self, SighashFlagError> {
        self.with_flag(SighashFlag::AnyPrevout)
    }

    /// Returns a new value with the `ANYPREVOUTANYSCRIPT` flag set.
    ///
    /// # Errors
    ///
    /// If the flag is already set, or the value carries a flag that is
    /// mutually exclusive with it.
    #[inline]
    pub fn with_any_prevout_any_script(self) -> Result<Self, SighashFlagError> {
        self.with_flag(SighashFlag::AnyPrevoutAnyScript)
    }

    /// Sets `flag` on the value, never altering the base mode bits.
    ///
    /// Re-applying a flag is an error, not a no-op; checked before the
    /// mutual-exclusivity conflict so the caller sees the more precise one.
    fn with_flag(self, flag: SighashFlag) -> Result<Self, SighashFlagError> {
        let bits = flag.to_consensus_u8();
        if self.0 & bits == bits {
            return Err(SighashFlagError::FlagAlreadySet { flag });
        }
        if let Some(set) = self.flag() {
            return Err(SighashFlagError::InvalidCombination { set, requested: flag });
        }
        Ok(Self(self.0 | bits))
    }

    /// Returns `true` if this is the implicit Schnorr default type (`0x00`).
    #[inline]
    pub fn is_schnorr_default(self) -> bool { self.0 == SIGHASH_DEFAULT }

    /// Returns `true` if the signature commits to all outputs.
    ///
    /// The Schnorr default type is semantically "sign all" even though its
    /// base mode bits are `0x00` rather than `SIGHASH_ALL`, so this returns
    /// `true` for it as well.
    #[inline]
    pub fn is_all(self) -> bool { self.base() == SighashBase::All || self.is_schnorr_default() }

    /// Returns `true` if the signature commits to no outputs.
    #[inline]
    pub fn is_none(self) -> bool { self.base() == SighashBase::None }

    /// Returns `true` if the signature commits to a single output.
    #[inline]
    pub fn is_single(self) -> bool { self.base() == SighashBase::Single }

    /// Returns `true` if bit `0x80` is set.
    ///
    /// Note that `ANYPREVOUTANYSCRIPT` sets both high bits, so this also
    /// returns `true` for any-prevout-any-script values; use
    /// [`SighashType::flag`] to distinguish the exact flag.
    #[inline]
    pub fn is_anyone_can_pay(self) -> bool { self.0 & SIGHASH_ANYONECANPAY != 0 }

    /// Returns `true` if this value carries the `ANYPREVOUT` flag (bit 6 set,
    /// bit 7 clear).
    #[inline]
    pub fn is_any_prevout(self) -> bool { self.0 & SIGHASH_FLAG_MASK == SIGHASH_ANYPREVOUT }

    /// Returns `true` if this value carries the `ANYPREVOUTANYSCRIPT` flag
    /// (both high bits set).
    #[inline]
    pub fn is_any_prevout_any_script(self) -> bool {
        self.0 & SIGHASH_FLAG_MASK == SIGHASH_ANYPREVOUTANYSCRIPT
    }
}

impl From<SighashType> for u8 {
    #[inline]
    fn from(ty: SighashType) -> Self { ty.to_consensus_u8() }
}

impl TryFrom<u8> for SighashType {
    type Error = InvalidSighashTypeError;

    #[inline]
    fn try_from(byte: u8) -> Result<Self, Self::Error> { Self::from_consensus_u8(byte) }
}

impl From<SighashBase> for SighashType {
    #[inline]
    fn from(base: SighashBase) -> Self { Self(base.to_consensus_u8()) }
}

impl fmt::Display for SighashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base(), f)?;
        if let Some(flag) = self.flag() {
            write!(f, "|{}", flag)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SighashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SighashType({:#04x})", self.0)
    }
}

impl fmt::LowerHex for SighashType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(&self.0, f) }
}

impl fmt::UpperHex for SighashType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::UpperHex::fmt(&self.0, f) }
}

#[cfg(feature = "alloc")]
impl str::FromStr for SighashType {
    type Err = SighashTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || SighashTypeParseError { unrecognized: s.to_owned() };

        let (base_s, flag_s) = match s.split_once('|') {
            Some((base_s, flag_s)) => (base_s, Some(flag_s)),
            None => (s, None),
        };

        let base = match base_s {
            "SIGHASH_DEFAULT" => SighashBase::Default,
            "SIGHASH_ALL" => SighashBase::All,
            "SIGHASH_NONE" => SighashBase::None,
            "SIGHASH_SINGLE" => SighashBase::Single,
            _ => return Err(unrecognized()),
        };

        let flag = match flag_s {
            None => 0,
            Some("SIGHASH_ANYONECANPAY") => SIGHASH_ANYONECANPAY,
            Some("SIGHASH_ANYPREVOUT") => SIGHASH_ANYPREVOUT,
            Some("SIGHASH_ANYPREVOUTANYSCRIPT") => SIGHASH_ANYPREVOUTANYSCRIPT,
            Some(_) => return Err(unrecognized()),
        };

        Ok(SighashType(base.to_consensus_u8() | flag))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SighashType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SighashType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = SighashType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a SIGHASH_* string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<SighashType>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> Arbitrary<'a> for SighashType {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let base = u.int_in_range(SIGHASH_DEFAULT..=SIGHASH_SINGLE)?;
        let flag = match u.int_in_range(0u8..=3)? {
            0 => 0,
            1 => SIGHASH_ANYONECANPAY,
            2 => SIGHASH_ANYPREVOUT,
            _ => SIGHASH_ANYPREVOUTANYSCRIPT,
        };
        Ok(Self(base | flag))
    }
}

/// The base mode of a sighash type, selecting which outputs are signed.
///
/// Fixed values so they can be cast as integer types for encoding.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SighashBase {
    /// 0x0: The implicit Schnorr "sign all" mode, encoded by the absence of
    /// a sighash byte.
    Default = 0x00,
    /// 0x1: Sign all outputs.
    All = 0x01,
    /// 0x2: Sign no outputs --- anyone can choose the destination.
    None = 0x02,
    /// 0x3: Sign the output whose index matches this input's index.
    Single = 0x03,
}

impl SighashBase {
    /// Returns the base mode as the low bits of a sighash type byte.
    #[inline]
    pub fn to_consensus_u8(self) -> u8 { self as u8 }
}

impl fmt::Display for SighashBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SighashBase::*;

        let s = match self {
            Default => "SIGHASH_DEFAULT",
            All => "SIGHASH_ALL",
            None => "SIGHASH_NONE",
            Single => "SIGHASH_SINGLE",
        };
        f.write_str(s)
    }
}

/// An input-binding flag layered over bits 6-7 of a sighash type byte.
///
/// The three flags overlap in the two high bits, which is what makes them
/// mutually exclusive: `ANYPREVOUTANYSCRIPT` shares bit 7 with
/// `ANYONECANPAY` and bit 6 with `ANYPREVOUT`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SighashFlag {
    /// 0x80: Commit to only the input carrying the signature.
    AnyoneCanPay = 0x80,
    /// 0x40: Allow the signature to be rebound to a different previous
    /// output.
    AnyPrevout = 0x40,
    /// 0xc0: Allow the signature to be rebound to a different previous
    /// output regardless of its script.
    AnyPrevoutAnyScript = 0xc0,
}

impl SighashFlag {
    /// Returns the flag as the high bits of a sighash type byte.
    #[inline]
    pub fn to_consensus_u8(self) -> u8 { self as u8 }
}

impl fmt::Display for SighashFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SighashFlag::*;

        let s = match self {
            AnyoneCanPay => "SIGHASH_ANYONECANPAY",
            AnyPrevout => "SIGHASH_ANYPREVOUT",
            AnyPrevoutAnyScript => "SIGHASH_ANYPREVOUTANYSCRIPT",
        };
        f.write_str(s)
    }
}
