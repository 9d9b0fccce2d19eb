//! Fuzz target for settings TOML parsing.
//!
//! Tests `PistesSettings::from_toml()` with arbitrary input and checks that
//! accepted settings survive a serialize/parse round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pistes_settings::PistesSettings;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(settings) = PistesSettings::from_toml(input) {
        assert!(settings.hints.top_percent <= 100);
        if let Ok(text) = toml::to_string(&settings) {
            let reparsed = PistesSettings::from_toml(&text).expect("round trip must parse");
            assert_eq!(settings, reparsed);
        }
    }
});
