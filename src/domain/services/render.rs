//! Text rendering for generated headers
//!
//! Pure formatting functions. The layout is consumed by C/C++ code, so every
//! separator here is part of the output contract:
//!
//! ```text
//! const uint8_t Q_q1[] = {83, 69, 76, 0};
//! const char *Q[] = {
//! 	(const char*) Q_q1
//! };
//! ```

use std::fmt::Write;

use crate::domain::entities::HeaderConstant;
use crate::domain::value_objects::Identifier;

/// Provenance name used when a profile does not set one
pub const DEFAULT_GENERATOR: &str = "embedgen";

/// Header comment, include guard and constants.
pub fn render_preamble(generated_by: &str, constants: &[HeaderConstant]) -> String {
    let mut out = format!(
        "/* THIS FILE WAS AUTOMATICALLY GENERATED BY {} */\n\n#pragma once\n\n",
        generated_by
    );
    for constant in constants {
        let _ = writeln!(out, "const int {} = {};", constant.name, constant.value);
    }
    out
}

/// `const uint8_t <ident>[] = {b0, b1, ...[, 0]};` followed by a newline.
pub fn render_array(identifier: &Identifier, bytes: &[u8], terminator: bool) -> String {
    // "255, " is the widest element
    let mut out = String::with_capacity(identifier.as_str().len() + 32 + bytes.len() * 5);
    let _ = write!(out, "const uint8_t {}[] = {{", identifier);

    let mut first = true;
    let trailing = terminator.then_some(0u8);
    for byte in bytes.iter().copied().chain(trailing) {
        if !first {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", byte);
        first = false;
    }

    out.push_str("};\n");
    out
}

/// Aggregate pointer array over every per-file array of a group.
///
/// Entries are comma separated with no trailing comma; an empty group
/// renders as an empty initializer list.
pub fn render_index<'a, I>(group: &Identifier, members: I) -> String
where
    I: IntoIterator<Item = &'a Identifier>,
{
    let entries: Vec<String> = members
        .into_iter()
        .map(|ident| format!("\t(const char*) {}", ident))
        .collect();

    let mut out = format!("const char *{}[] = {{\n", group);
    if !entries.is_empty() {
        out.push_str(&entries.join(",\n"));
        out.push('\n');
    }
    out.push_str("};\n");
    out
}
