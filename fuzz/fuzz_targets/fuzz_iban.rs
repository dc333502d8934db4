#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::formats::iban;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // validate → format → validate must not panic, and a number that
        // validates must keep validating after reformatting.
        if let Ok(canonical) = iban::validate(s) {
            let pretty = iban::format(&canonical).expect("valid IBAN must format");
            let revalidated = iban::validate(&pretty).expect("formatted IBAN must validate");
            assert_eq!(revalidated, canonical);
        }
        let _ = iban::compact(s);
        let _ = iban::calc_check_digits(s);
    }
});
