// SPDX-License-Identifier: CC0-1.0

//! # Sighash types
//!
//! The signature hash type selector byte, encoded in the last byte of a
//! Bitcoin signature. The byte selects which parts of a transaction a
//! signature commits to: a base mode picking the outputs (`ALL`, `NONE`,
//! `SINGLE`, or the implicit Schnorr `DEFAULT`) plus at most one of the
//! input-binding flags `ANYONECANPAY`, `ANYPREVOUT`, or
//! `ANYPREVOUTANYSCRIPT` ([BIP-0118]).
//!
//! This crate only encodes, decodes, and validates the selector byte and
//! answers semantic queries about it; computing the signature hash itself is
//! the job of a transaction digest implementation.
//!
//! This crate can be used in a no-std environment; string parsing requires an
//! allocator.
//!
//! [BIP-0118]: <https://github.com/bitcoin/bips/blob/master/bip-0118.mediawiki>

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]
// Exclude lints we don't think are valuable.
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod sighash_type;

#[doc(inline)]
#[cfg(feature = "alloc")]
pub use self::error::SighashTypeParseError;
#[doc(inline)]
pub use self::{
    error::{InvalidSighashTypeError, SighashFlagError},
    sighash_type::{
        SighashBase, SighashFlag, SighashType, SIGHASH_ALL, SIGHASH_ANYONECANPAY,
        SIGHASH_ANYPREVOUT, SIGHASH_ANYPREVOUTANYSCRIPT, SIGHASH_BASE_MASK, SIGHASH_DEFAULT,
        SIGHASH_NONE, SIGHASH_SINGLE,
    },
};

#[rustfmt::skip]
#[allow(unused_imports)]
mod prelude {
    #[cfg(feature = "alloc")]
    pub use alloc::borrow::ToOwned;
    #[cfg(feature = "alloc")]
    pub use alloc::string::{String, ToString};
}
