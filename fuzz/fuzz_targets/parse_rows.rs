#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing must never panic; errors are the expected outcome for
        // most inputs.
        let _ = blot_opt::parse_rows(text);
    }
});
