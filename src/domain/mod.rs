//! Domain Layer
//!
//! The core of embedgen: identifiers, resources, artifacts and the
//! rendering rules for generated headers.
//!
//! ## Structure
//!
//! - `entities/` - Source directories, resource files, artifacts
//! - `value_objects/` - Identifier, ContentHash, CollisionPolicy
//! - `services/` - Header rendering and the Embedder
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the `ResourceStore` port.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
