use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::HuffError;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::{distinct_symbols, freqs};

use super::{COUNT_FIELD, LEN_FIELD, SYMBOLS_FIELD};

/// Compress a byte buffer into a self-contained container: length header,
/// codeword dictionary, original symbol count, bit-packed payload.
///
/// Fails with `HuffError::Capacity` when the input cannot be represented:
/// all 256 byte values in use (the dictionary count field holds at most
/// 255), or a buffer too large for the 4-byte length fields. Nothing is
/// emitted on failure.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    if data.len() > u32::MAX as usize {
        return Err(HuffError::Capacity(format!(
            "input of {} bytes exceeds the 4-byte symbol count field",
            data.len()
        )));
    }

    let freq_table = freqs(data);
    let symbol_count = distinct_symbols(&freq_table);
    if symbol_count > 255 {
        return Err(HuffError::Capacity(
            "input uses all 256 byte values; the dictionary holds at most 255".to_string(),
        ));
    }
    debug!(
        "Found {} distinct symbols in {} input bytes.",
        symbol_count,
        data.len()
    );

    let table = match build_tree(&freq_table) {
        Some(root) => CodeTable::from_tree(root),
        None => CodeTable::empty(),
    };

    // Dictionary entries in ascending symbol order.
    let mut dict = Vec::with_capacity(symbol_count * 3);
    for (symbol, code) in table.iter() {
        dict.push(symbol);
        dict.push(code.len);
        let n = (code.len as usize + 7) / 8;
        dict.extend_from_slice(&code.bits.to_le_bytes()[..n]);
    }

    // Bit-pack the payload in original symbol order.
    let mut bp = BitPacker::new(data.len() / 2 + 1);
    for &byte in data {
        // Every input byte was counted, so it has a codeword.
        let code = table.get(byte).unwrap();
        bp.out_bits(code.bits, code.len);
    }
    bp.flush();
    debug!("Packed payload ends at {}.", bp.loc());

    let total = LEN_FIELD + COUNT_FIELD + dict.len() + SYMBOLS_FIELD + bp.output.len();
    if total > u32::MAX as usize {
        return Err(HuffError::Capacity(format!(
            "container of {} bytes exceeds the 4-byte length field",
            total
        )));
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.push(symbol_count as u8);
    out.extend_from_slice(&dict);
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&bp.output);

    info!(
        "Compressed {} bytes into {} ({} dictionary entries).",
        data.len(),
        out.len(),
        symbol_count
    );
    Ok(out)
}
