//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod collision_policy;
mod hash;
mod identifier;

pub use collision_policy::CollisionPolicy;
pub use hash::ContentHash;
pub use identifier::{sanitize, stem, Identifier, IdentifierError};
