//! Identifier Value Object
//!
//! A validated C identifier used for generated array names.
//!
//! Group names come from configuration and must already be valid.
//! Resource identifiers are derived from file names, so their stem is
//! sanitized instead of rejected.

use std::fmt;

/// Error when identifier validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifier is empty
    Empty,
    /// Identifier starts with a digit
    LeadingDigit,
    /// Identifier contains a character outside `[A-Za-z0-9_]`
    InvalidChar(char),
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::Empty => write!(f, "identifier is empty"),
            IdentifierError::LeadingDigit => {
                write!(f, "identifier must not start with a digit")
            }
            IdentifierError::InvalidChar(ch) => {
                write!(f, "character {:?} is not allowed in an identifier", ch)
            }
        }
    }
}

impl std::error::Error for IdentifierError {}

/// A validated C identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `name` as a C identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        let mut chars = name.chars();
        let first = chars.next().ok_or(IdentifierError::Empty)?;

        if first.is_ascii_digit() {
            return Err(IdentifierError::LeadingDigit);
        }

        if let Some(bad) = name.chars().find(|c| !is_ident_char(*c)) {
            return Err(IdentifierError::InvalidChar(bad));
        }

        Ok(Self(name.to_string()))
    }

    /// Build the per-file identifier `{group}_{stem}`.
    ///
    /// The group is already valid and non-empty, so the result is valid for
    /// any stem once it has been sanitized.
    pub fn resource(group: &Identifier, stem: &str) -> Self {
        Self(format!("{}_{}", group.0, sanitize(stem)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// File name with its last extension removed.
///
/// `q01.sql` becomes `q01`, `lineitem.tbl.csv` becomes `lineitem.tbl`, and a
/// name without a dot is returned unchanged.
pub fn stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn sanitize(fragment: &str) -> String {
    fragment
        .chars()
        .map(|c| if is_ident_char(c) { c } else { '_' })
        .collect()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
