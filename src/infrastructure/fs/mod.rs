//! File System Implementations
//!
//! Concrete implementations of the ResourceStore port.

mod local;
#[cfg(test)]
mod mock;

pub use local::{atomic_write, LocalFs};
#[cfg(test)]
pub use mock::MockStore;
