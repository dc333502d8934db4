//! Input normalization helpers.

/// Unicode characters that frequently leak into copy-pasted numbers,
/// mapped to their ASCII equivalents before separator stripping.
const CHAR_REPLACEMENTS: &[(char, char)] = &[
    ('\u{2010}', '-'), // hyphen
    ('\u{2011}', '-'), // non-breaking hyphen
    ('\u{2012}', '-'), // figure dash
    ('\u{2013}', '-'), // en dash
    ('\u{2014}', '-'), // em dash
    ('\u{2015}', '-'), // horizontal bar
    ('\u{2212}', '-'), // minus sign
    ('\u{00a0}', ' '), // no-break space
    ('\u{2019}', '\''),
];

/// Remove the characters in `delete_chars` from `number` and trim
/// surrounding whitespace.
///
/// Common Unicode dash and space variants are first mapped to their ASCII
/// counterparts so that e.g. an en dash is stripped by `delete_chars = " -"`.
///
/// ```rust
/// use pruefziffer::core::clean;
///
/// assert_eq!(clean("123-456:78 9", " -:"), "123456789");
/// assert_eq!(clean(" 12\u{2013}34 ", " -"), "1234");
/// ```
pub fn clean(number: &str, delete_chars: &str) -> String {
    number
        .trim()
        .chars()
        .map(|c| {
            CHAR_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .filter(|c| !delete_chars.contains(*c))
        .collect()
}

/// Whether `number` is non-empty and consists of ASCII digits only.
///
/// Unlike `char::is_numeric` this rejects non-ASCII digit characters, which
/// are never valid in the numbers handled here.
pub fn isdigits(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators() {
        assert_eq!(clean("35686800-004141-20", " -"), "3568680000414120");
        assert_eq!(clean("GR16 0110 1050 0000 1054 7023 795", " -"), "GR1601101050000010547023795");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(clean("  1234  ", ""), "1234");
    }

    #[test]
    fn maps_unicode_dashes() {
        assert_eq!(clean("1\u{2013}2\u{2014}3\u{2015}4", "-"), "1234");
        assert_eq!(clean("1\u{2212}2", ""), "1-2");
    }

    #[test]
    fn keeps_unlisted_characters() {
        assert_eq!(clean("12/34", " -"), "12/34");
    }

    #[test]
    fn isdigits_rejects_unicode_digits() {
        assert!(isdigits("0123456789"));
        assert!(!isdigits(""));
        assert!(!isdigits("12a4"));
        assert!(!isdigits("١٢٣٤")); // Arabic-Indic digits
    }
}
