//! The huffman_coding module builds the optimal prefix-free code for one
//! input buffer.
//!
//! Construction runs in three stages. A min-heap orders the weighted
//! nodes; the tree builder repeatedly merges the two lightest nodes until a
//! single root remains; the code table deriver walks the finished tree and
//! records a (bits, length) codeword for every symbol. Shorter codewords go
//! to more frequent symbols, and because only leaves carry symbols the
//! codewords form a prefix code.
//!
//! Equal weights are resolved by insertion order, so the same input always
//! produces the same tree shape and the same container bytes.

pub mod code_table;
pub mod min_heap;
pub mod tree;
