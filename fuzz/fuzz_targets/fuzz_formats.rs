#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::NumberFormat;
use pruefziffer::formats::{Aadhaar, Iban, Imei};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let formats: [&dyn NumberFormat; 3] = [&Iban, &Imei, &Aadhaar];
        for format in formats {
            // is_valid must never panic, whatever the input.
            let _ = format.is_valid(s);
            let _ = format.compact(s);
        }
    }
});
