#![no_main]

use libfuzzer_sys::fuzz_target;
use rtlstat::extractor::FeatureExtractor;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy conversion)
    if let Ok(input) = std::str::from_utf8(data) {
        // Extraction must be total: any report text yields a record
        // without panicking
        let extractor = FeatureExtractor::new();
        let _ = extractor.extract(input);
    }
});
