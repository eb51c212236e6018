//! Property tests for array and index rendering.

use std::collections::BTreeMap;
use std::fs;

use proptest::prelude::*;

use embedgen::{render_array, Embedder, Identifier, LocalFs, SourceDirectory};

fn parse_array(rendered: &str, ident: &str) -> Vec<u8> {
    let body = rendered
        .strip_prefix(&format!("const uint8_t {}[] = {{", ident))
        .and_then(|rest| rest.strip_suffix("};\n"))
        .expect("array framing");
    if body.is_empty() {
        return Vec::new();
    }
    body.split(", ").map(|b| b.parse().unwrap()).collect()
}

/// Distinct file names mapped to their contents
fn directory_contents() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let name = proptest::string::string_regex("[A-Za-z0-9]{1,8}\\.(sql|csv)").unwrap();
    proptest::collection::btree_map(name, proptest::collection::vec(any::<u8>(), 0..64), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the array lists every byte in order, plus one zero when terminated.
    #[test]
    fn property_array_preserves_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
        terminator in any::<bool>()
    ) {
        let ident = Identifier::new("G_f").unwrap();
        let parsed = parse_array(&render_array(&ident, &bytes, terminator), "G_f");

        if terminator {
            prop_assert_eq!(parsed.len(), bytes.len() + 1);
            prop_assert_eq!(parsed.last().copied(), Some(0));
            prop_assert_eq!(&parsed[..bytes.len()], &bytes[..]);
        } else {
            prop_assert_eq!(parsed, bytes);
        }
    }

    /// PROPERTY: rendering the same directory twice gives identical text,
    /// and the index follows ascending file-name byte order.
    #[test]
    fn property_directory_render_is_deterministic_and_ordered(
        contents in directory_contents()
    ) {
        let dir = tempfile::tempdir().unwrap();
        for (name, bytes) in &contents {
            fs::write(dir.path().join(name), bytes).unwrap();
        }

        let store = LocalFs::new();
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(Identifier::new("G").unwrap(), dir.path(), true);

        // Stems may collide ("a.sql" / "a.csv"); those are covered elsewhere.
        let first = match embedder.render_directory(&source) {
            Ok(text) => text,
            Err(_) => return Ok(()),
        };
        let second = embedder.render_directory(&source).unwrap();
        prop_assert_eq!(&first, &second);

        let files = embedder.scan(&source).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name().to_string()).collect();
        // BTreeMap<String> iterates in byte order for these ASCII names.
        let expected: Vec<_> = contents.keys().cloned().collect();
        prop_assert_eq!(names, expected);

        for file in &files {
            prop_assert_eq!(file.bytes(), &contents[file.file_name()][..]);
        }

        let index_start = first.find("const char *G[] = {\n").unwrap();
        let entries: Vec<_> = first[index_start..]
            .lines()
            .filter_map(|l| l.strip_prefix("\t(const char*) "))
            .map(|l| l.trim_end_matches(','))
            .collect();
        let identifiers: Vec<_> = files.iter().map(|f| f.identifier().to_string()).collect();
        prop_assert_eq!(entries, identifiers);
    }
}
