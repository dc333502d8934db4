//! Test vectors for the Luhn, Damm and Verhoeff engines.

use pruefziffer::ValidationError;
use pruefziffer::algorithms::{damm, luhn, verhoeff};

// ---------------------------------------------------------------------------
// Luhn
// ---------------------------------------------------------------------------

#[test]
fn luhn_checksum_vectors() {
    assert_eq!(luhn::checksum("7894").unwrap(), 6);
    assert_eq!(luhn::checksum("78949").unwrap(), 0);
    assert_eq!(luhn::checksum("0").unwrap(), 0);
}

#[test]
fn luhn_check_digit_vectors() {
    assert_eq!(luhn::calc_check_digit("7894").unwrap(), '9');
    assert!(luhn::is_valid("78949"));
    assert!(!luhn::is_valid("7894"));
}

#[test]
fn luhn_known_card_numbers() {
    assert!(luhn::is_valid("4111111111111111"));
    assert!(luhn::is_valid("5500005555555559"));
    assert!(!luhn::is_valid("4111111111111112"));
}

#[test]
fn luhn_error_kinds() {
    assert!(matches!(luhn::validate(""), Err(e) if e.is_format_error()));
    assert!(matches!(luhn::validate("78a9"), Err(e) if e.is_format_error()));
    assert_eq!(luhn::validate("7894"), Err(ValidationError::InvalidChecksum));
}

// ---------------------------------------------------------------------------
// Damm
// ---------------------------------------------------------------------------

#[test]
fn damm_vectors() {
    assert_eq!(damm::calc_check_digit("572").unwrap(), '4');
    assert!(damm::is_valid("5724"));
    assert!(!damm::is_valid("5734"));
    assert_eq!(damm::checksum("5724").unwrap(), 0);
}

#[test]
fn damm_error_kinds() {
    assert!(matches!(damm::validate(""), Err(e) if e.is_format_error()));
    assert_eq!(damm::validate("5723"), Err(ValidationError::InvalidChecksum));
}

// ---------------------------------------------------------------------------
// Verhoeff
// ---------------------------------------------------------------------------

#[test]
fn verhoeff_vectors() {
    assert_eq!(verhoeff::checksum("654").unwrap(), 1);
    assert!(verhoeff::is_valid("6548"));
    assert_eq!(verhoeff::calc_check_digit("654").unwrap(), '8');
    assert_eq!(verhoeff::checksum("1234").unwrap(), 1);
    assert!(!verhoeff::is_valid("1234"));
    assert!(verhoeff::is_valid("12340"));
}

#[test]
fn verhoeff_error_kinds() {
    assert!(matches!(verhoeff::validate(""), Err(e) if e.is_format_error()));
    assert_eq!(verhoeff::validate("654").unwrap_err(), ValidationError::InvalidChecksum);
}

// ---------------------------------------------------------------------------
// Cross-engine behavior
// ---------------------------------------------------------------------------

#[test]
fn all_engines_reject_non_digits_as_format_errors() {
    for result in [
        luhn::validate("12x4"),
        damm::validate("12x4"),
        verhoeff::validate("12x4"),
    ] {
        assert!(matches!(result, Err(e) if e.is_format_error()));
    }
}

#[test]
fn check_digits_agree_on_detection_but_not_on_value() {
    // All three make "572" valid with one extra digit, each in its own way.
    let number = "572";
    let l = luhn::calc_check_digit(number).unwrap();
    let d = damm::calc_check_digit(number).unwrap();
    let v = verhoeff::calc_check_digit(number).unwrap();
    assert!(luhn::is_valid(&format!("{number}{l}")));
    assert!(damm::is_valid(&format!("{number}{d}")));
    assert!(verhoeff::is_valid(&format!("{number}{v}")));
}
