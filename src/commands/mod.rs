//! Command handlers
//!
//! Each handler resolves the profile, runs one use case and renders the
//! result as text or NDJSON.

mod check;
mod generate;
mod list;
mod profile;

pub use check::cmd_check;
pub use generate::cmd_generate;
pub use list::cmd_list;
