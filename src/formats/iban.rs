//! IBAN (International Bank Account Number) validation.
//!
//! The first two letters are an ISO 3166-1 country code, followed by two
//! check digits for the ISO 7064 Mod 97, 10 checksum over the rearranged
//! number. Each country fixes the total length of its IBAN. Country-level
//! checksums inside the BBAN are not verified here.
//!
//! ```rust
//! use pruefziffer::formats::iban;
//!
//! assert!(iban::is_valid("BE31435411161155"));
//! assert_eq!(iban::format("GR1601101050000010547023795").unwrap(),
//!            "GR16 0110 1050 0000 1054 7023 795");
//! ```

use crate::core::{BASE36, NumberFormat, ValidationError, clean, isdigits};
use crate::iso7064::mod_97_10;

/// IBAN length per country, from the Swift IBAN registry. Sorted for
/// binary search.
static COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BI", 27), ("BR", 29), ("BY", 28),
    ("CH", 21), ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DJ", 27),
    ("DK", 18), ("DO", 28), ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18),
    ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18),
    ("GR", 27), ("GT", 28), ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23),
    ("IQ", 23), ("IS", 26), ("IT", 27), ("JO", 30), ("KW", 30), ("KZ", 20),
    ("LB", 28), ("LC", 32), ("LI", 21), ("LT", 20), ("LU", 20), ("LV", 21),
    ("LY", 25), ("MC", 27), ("MD", 24), ("ME", 22), ("MK", 19), ("MR", 27),
    ("MT", 31), ("MU", 30), ("NL", 18), ("NO", 15), ("PK", 24), ("PL", 28),
    ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("RU", 33),
    ("SA", 24), ("SC", 31), ("SD", 18), ("SE", 24), ("SI", 19), ("SK", 24),
    ("SM", 27), ("SO", 23), ("ST", 25), ("SV", 28), ("TL", 23), ("TN", 24),
    ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

fn country_length(code: &str) -> Option<usize> {
    COUNTRY_LENGTHS
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| COUNTRY_LENGTHS[i].1)
}

/// Strip spaces and hyphens and uppercase the number.
pub fn compact(number: &str) -> Result<String, ValidationError> {
    Ok(clean(number, " -").to_uppercase())
}

/// The country code and check digits moved behind the BBAN, ready for the
/// Mod 97, 10 checksum.
fn rearrange(number: &str) -> String {
    let mut rearranged = String::with_capacity(number.len());
    rearranged.push_str(&number[4..]);
    rearranged.push_str(&number[..4]);
    rearranged
}

/// Fully validate an IBAN and return its compacted form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if !(15..=34).contains(&number.len()) {
        return Err(ValidationError::length(format!(
            "expected 15 to 34 characters, got {}",
            number.len()
        )));
    }
    if !number.is_ascii() {
        return Err(ValidationError::format("unexpected non-ASCII character"));
    }
    if !number[..2].bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::format("country code must be two letters"));
    }
    if !isdigits(&number[2..4]) {
        return Err(ValidationError::format("check digits must be numeric"));
    }
    if !BASE36.contains_all(&number[4..]) {
        return Err(ValidationError::format("account number must be alphanumeric"));
    }
    let expected = country_length(&number[..2]).ok_or_else(|| {
        ValidationError::component(format!("unknown country code '{}'", &number[..2]))
    })?;
    if number.len() != expected {
        return Err(ValidationError::length(format!(
            "expected {expected} characters for country {}, got {}",
            &number[..2],
            number.len()
        )));
    }
    mod_97_10::validate(&rearrange(&number)).map_err(|_| ValidationError::InvalidChecksum)?;
    Ok(number)
}

/// Whether `number` is a valid IBAN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Calculate the two check digits for an IBAN whose check digit positions
/// hold a placeholder (conventionally "00").
pub fn calc_check_digits(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if number.len() < 5 {
        return Err(ValidationError::length("number too short"));
    }
    if !number.is_ascii() {
        return Err(ValidationError::format("unexpected non-ASCII character"));
    }
    let mut body = String::with_capacity(number.len() - 2);
    body.push_str(&number[4..]);
    body.push_str(&number[..2]);
    mod_97_10::calc_check_digits(&body)
}

/// Reformat a valid IBAN into the conventional blocks of four.
pub fn format(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    let blocks: Vec<&str> = number
        .as_bytes()
        .chunks(4)
        // compact() yields ASCII only, so the chunks stay on char boundaries
        .map(|b| std::str::from_utf8(b).unwrap_or_default())
        .collect();
    Ok(blocks.join(" "))
}

/// The IBAN format as a [`NumberFormat`] implementation.
pub struct Iban;

impl NumberFormat for Iban {
    fn compact(&self, number: &str) -> Result<String, ValidationError> {
        compact(number)
    }

    fn validate(&self, number: &str) -> Result<String, ValidationError> {
        validate(number)
    }

    fn format(&self, number: &str) -> Result<String, ValidationError> {
        format(number)
    }
}
