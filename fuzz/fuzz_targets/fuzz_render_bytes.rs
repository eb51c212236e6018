#![no_main]

use embedgen::{render_array, Identifier};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(ident) = Identifier::new("FUZZ_data") else {
        return;
    };
    let terminator = data.first().is_some_and(|b| b & 1 == 1);
    let rendered = render_array(&ident, data, terminator);

    let expected = data.len() + usize::from(terminator);
    let separators = rendered.matches(", ").count();
    assert_eq!(separators, expected.saturating_sub(1));
    assert!(rendered.ends_with("};\n"));
});
