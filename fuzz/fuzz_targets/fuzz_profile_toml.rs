#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Profile parsing and resolution should never panic
        if let Ok(profile) = toml::from_str::<embedgen::Profile>(content) {
            let _ = profile.resolve(&[]);
        }
    }
});
