// SPDX-License-Identifier: CC0-1.0

//! Do basic regression tests on the `Display` and `FromStr` impls.

#![cfg(feature = "alloc")]

use sighash_types::SighashType;

macro_rules! check {
    ($($test_name:ident, $val:expr, $str:literal);* $(;)?) => {
        $(
            #[test]
            fn $test_name() {
                let got = format!("{}", $val);
                assert_eq!(got, $str);

                let got = $str.parse::<SighashType>().unwrap();
                assert_eq!(got, $val)
            }
        )*
    }
}

check! {
    default, SighashType::DEFAULT, "SIGHASH_DEFAULT";
    all, SighashType::ALL, "SIGHASH_ALL";
    none, SighashType::NONE, "SIGHASH_NONE";
    single, SighashType::SINGLE, "SIGHASH_SINGLE";

    all_anyone_can_pay,
        SighashType::ALL.with_anyone_can_pay().unwrap(),
        "SIGHASH_ALL|SIGHASH_ANYONECANPAY";
    none_anyone_can_pay,
        SighashType::NONE.with_anyone_can_pay().unwrap(),
        "SIGHASH_NONE|SIGHASH_ANYONECANPAY";
    single_anyone_can_pay,
        SighashType::SINGLE.with_anyone_can_pay().unwrap(),
        "SIGHASH_SINGLE|SIGHASH_ANYONECANPAY";

    default_any_prevout,
        SighashType::DEFAULT.with_any_prevout().unwrap(),
        "SIGHASH_DEFAULT|SIGHASH_ANYPREVOUT";
    all_any_prevout,
        SighashType::ALL.with_any_prevout().unwrap(),
        "SIGHASH_ALL|SIGHASH_ANYPREVOUT";

    all_any_prevout_any_script,
        SighashType::ALL.with_any_prevout_any_script().unwrap(),
        "SIGHASH_ALL|SIGHASH_ANYPREVOUTANYSCRIPT";
    single_any_prevout_any_script,
        SighashType::SINGLE.with_any_prevout_any_script().unwrap(),
        "SIGHASH_SINGLE|SIGHASH_ANYPREVOUTANYSCRIPT";
}

#[test]
fn parse_round_trips_all_valid_values() {
    for byte in 0..=255u8 {
        if let Ok(ty) = SighashType::from_consensus_u8(byte) {
            let parsed = ty.to_string().parse::<SighashType>().unwrap();
            assert_eq!(parsed, ty);
            assert_eq!(parsed.to_consensus_u8(), byte);
        }
    }
}

#[test]
fn parse_rejects_flag_without_base() {
    assert!("SIGHASH_ANYONECANPAY".parse::<SighashType>().is_err());
    assert!("SIGHASH_ANYPREVOUT|SIGHASH_ALL".parse::<SighashType>().is_err());
    assert!("|SIGHASH_ANYONECANPAY".parse::<SighashType>().is_err());
    assert!("".parse::<SighashType>().is_err());
}
