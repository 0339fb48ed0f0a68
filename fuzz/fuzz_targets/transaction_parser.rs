#![no_main]

use canasta::loader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy conversion)
    if let Ok(input) = std::str::from_utf8(data) {
        // Attempt to parse and group the delimited records
        // This should not panic regardless of input
        let _ = loader::parse_transactions(input, ';', "Payment ID", "Item");
    }
});
