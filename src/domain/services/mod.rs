//! Domain Services
//!
//! Rendering is pure text formatting; the embedder reaches the file system
//! only through the `ResourceStore` port.

mod embedder;
pub mod render;

pub use embedder::Embedder;
pub use render::{render_array, render_index, render_preamble, DEFAULT_GENERATOR};
