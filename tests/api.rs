// SPDX-License-Identifier: CC0-1.0

//! Test the API surface of `sighash-types`.
//!
//! The point of these tests are to check the API surface as opposed to test
//! the API functionality.
//!
//! What this module tests:
//!
//! - The location of re-exports for various typical usage styles.
//! - Regressions in the API surface (things being accidentally moved).
//! - All public types implement Debug (C-DEBUG).
//! - For all non-error types:
//!     - `Debug` representation is never empty (C-DEBUG-NONEMPTY)
//! - Error types derive the standard traits.
//!
//! ref: <https://rust-lang.github.io/api-guidelines/about.html>

#![allow(dead_code)]
#![allow(unused_imports)]

// These imports test "typical" usage by user code.
use sighash_types::sighash_type; // Module-level constants live here too.
use sighash_types::{
    InvalidSighashTypeError, SighashBase, SighashFlag, SighashFlagError, SighashType, SIGHASH_ALL,
    SIGHASH_ANYONECANPAY, SIGHASH_ANYPREVOUT, SIGHASH_ANYPREVOUTANYSCRIPT, SIGHASH_BASE_MASK,
    SIGHASH_DEFAULT, SIGHASH_NONE, SIGHASH_SINGLE,
};
#[cfg(feature = "alloc")]
use sighash_types::SighashTypeParseError;

/// A struct that includes all public non-error enums.
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Enums {
    a: SighashBase,
    b: SighashFlag,
}

impl Enums {
    fn new() -> Self { Self { a: SighashBase::All, b: SighashFlag::AnyoneCanPay } }
}

/// A struct that includes all public non-error structs.
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Structs {
    a: SighashType,
}

impl Structs {
    fn new() -> Self { Self { a: SighashType::ALL } }
}

/// A struct that includes all public error types.
#[derive(Debug)]
struct Errors {
    a: InvalidSighashTypeError,
    b: SighashFlagError,
    #[cfg(feature = "alloc")]
    c: SighashTypeParseError,
}

#[test]
fn consensus_constants_are_exact() {
    assert_eq!(SIGHASH_DEFAULT, 0x00);
    assert_eq!(SIGHASH_ALL, 0x01);
    assert_eq!(SIGHASH_NONE, 0x02);
    assert_eq!(SIGHASH_SINGLE, 0x03);
    assert_eq!(SIGHASH_ANYONECANPAY, 0x80);
    assert_eq!(SIGHASH_ANYPREVOUT, 0x40);
    assert_eq!(SIGHASH_ANYPREVOUTANYSCRIPT, 0xc0);
    assert_eq!(SIGHASH_BASE_MASK, 0x3f);
}

#[test]
fn types_are_byte_ordered_and_copyable() {
    let a = SighashType::ALL;
    let b = a; // Copy.
    assert_eq!(a, b);
    assert!(SighashType::DEFAULT < SighashType::ALL);
    assert!(SighashType::ALL < SighashType::ALL.with_any_prevout().unwrap());
}

#[test]
fn debug_is_nonempty() {
    assert!(!format!("{:?}", Enums::new()).is_empty());
    assert!(!format!("{:?}", Structs::new()).is_empty());
}

#[cfg(feature = "std")]
#[test]
fn errors_implement_error_trait() {
    fn is_error<T: std::error::Error>() {}
    is_error::<InvalidSighashTypeError>();
    is_error::<SighashFlagError>();
    is_error::<SighashTypeParseError>();
}
