//! A Huffman coding compression engine.
//!
//! Builds a frequency model over a byte buffer, derives an optimal
//! prefix-free variable-length code from a min-heap-driven binary tree,
//! and serializes the result into a compact binary container. The decoder
//! reconstructs the original bytes exactly from that container.
//!
//! The two entry points operate purely on in-memory buffers:
//!
//! - [`compress`] turns a byte buffer into a container.
//! - [`decompress`] turns a container back into the original bytes.
//!
//! Both are synchronous and single-threaded, and either return a complete
//! output buffer or fail atomically with a [`HuffError`]. The container
//! format is private to this engine; it is not compatible with DEFLATE or
//! any other standard format.

#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use error::HuffError;
