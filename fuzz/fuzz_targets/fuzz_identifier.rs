#![no_main]

use embedgen::domain::value_objects::stem;
use embedgen::Identifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let name = String::from_utf8_lossy(data);
    let Ok(group) = Identifier::new("G") else {
        return;
    };
    // Any file name yields a valid identifier
    let ident = Identifier::resource(&group, stem(&name));
    assert!(Identifier::new(ident.as_str()).is_ok());
});
