//! Integration tests for literal integer types

use mcl::foundation::IntegerType;

#[test]
fn default_type_is_u64() {
    assert_eq!(IntegerType::default(), IntegerType::U64);
}

#[test]
fn widths_and_signedness() {
    assert_eq!(IntegerType::I8.size(), 1);
    assert_eq!(IntegerType::U128.size(), 16);
    assert_eq!(IntegerType::I32.bits(), 32);
    assert!(IntegerType::I64.is_signed());
    assert!(!IntegerType::USize.is_signed());
}

#[test]
fn ranges() {
    assert_eq!(IntegerType::U8.max_value(), 255);
    assert_eq!(IntegerType::I8.max_value(), 127);
    assert_eq!(IntegerType::I8.min_value(), -128);
    assert_eq!(IntegerType::U64.max_value(), u128::from(u64::MAX));
    assert_eq!(IntegerType::U16.min_value(), 0);
}

#[test]
fn fits_respects_upper_bound() {
    assert!(IntegerType::U8.fits(255));
    assert!(!IntegerType::U8.fits(256));
    assert!(IntegerType::I16.fits(32767));
    assert!(!IntegerType::I16.fits(32768));
    assert!(IntegerType::U128.fits(u64::MAX));
}

#[test]
fn names_round_trip_through_from_str() {
    for ty in IntegerType::ALL {
        assert_eq!(ty.name().parse::<IntegerType>().unwrap(), ty);
        assert_eq!(ty.to_string(), ty.name());
    }
}

#[test]
fn unknown_name_is_rejected() {
    let err = "u7".parse::<IntegerType>().unwrap_err();
    assert!(err.to_string().contains("u7"));
}
