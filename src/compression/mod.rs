//! The compression module assembles and parses the huffzip container.
//!
//! Container layout, all multi-byte integers little-endian:
//! - 4 bytes: total container length, including these four bytes.
//! - 1 byte: dictionary entry count (0-255).
//! - Per entry, ascending symbol order: 1 byte symbol, 1 byte codeword bit
//!   length, then ceil(bits/8) bytes of the codeword value, least
//!   significant byte first.
//! - 4 bytes: count of symbols in the original input. This is what makes
//!   payload-end detection unambiguous in the presence of zero padding.
//! - Bit-packed payload: each input symbol's codeword, most significant
//!   bit first, final byte zero-padded.
//!
//! The format is private to this engine. A container is fully materialized
//! in memory before the caller sees it; a failed call returns an error and
//! no partial output.

pub mod compress;
pub mod decompress;

/// Size of the leading total-length field.
pub(crate) const LEN_FIELD: usize = 4;
/// Size of the dictionary-entry-count field.
pub(crate) const COUNT_FIELD: usize = 1;
/// Size of the original-symbol-count field.
pub(crate) const SYMBOLS_FIELD: usize = 4;
/// Longest codeword the engine will pack or replay. The encoder cannot
/// exceed this (see code_table), so a longer length on decode is corrupt.
pub(crate) const MAX_CODE_BITS: u8 = 64;
