//! The bitstream module packs and replays the bit-level payload of the
//! huffzip container.
//!
//! Codewords have variable bit lengths, so the payload is a running bit
//! cursor that fills 8 bits per output byte and continues across byte
//! boundaries, most significant bit first. The final byte is zero-padded.
//!
//! The module is designed to interface with the huffman coding stages of
//! this engine. It has not been generalized for wider use.

pub mod bitpacker;
pub mod bitreader;
