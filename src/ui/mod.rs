//! Terminal and machine-readable output

pub mod json;
