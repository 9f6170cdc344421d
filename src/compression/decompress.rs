use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;

use super::{COUNT_FIELD, LEN_FIELD, MAX_CODE_BITS, SYMBOLS_FIELD};

/// Decompress a container back into the original byte buffer.
///
/// Every structural inconsistency is a `HuffError::Format`: a length header
/// that disagrees with the buffer, a dictionary count inconsistent with the
/// bytes actually present, codewords that are not a prefix code, or a
/// payload that runs out before the declared symbol count is reached. A
/// failed call returns no partial output.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    if data.len() < LEN_FIELD + COUNT_FIELD {
        return Err(HuffError::Format(format!(
            "container of {} bytes is shorter than the header",
            data.len()
        )));
    }
    let declared = u32::from_le_bytes(data[0..4].try_into().unwrap()) as usize;
    if declared != data.len() {
        return Err(HuffError::Format(format!(
            "container declares {} bytes but {} are present",
            declared,
            data.len()
        )));
    }

    let entry_count = data[4] as usize;
    let mut pos = LEN_FIELD + COUNT_FIELD;

    // Parse the dictionary, building both directions: a symbol-ordered list
    // to validate the entries, and the codeword-to-symbol map keyed by
    // (bit length, bits) that the decode loop probes.
    let mut codes: Vec<(u8, u64)> = Vec::with_capacity(entry_count);
    let mut decode_map: FxHashMap<(u8, u64), u8> = FxHashMap::default();
    let mut seen = [false; 256];
    let mut max_len = 0_u8;
    for _ in 0..entry_count {
        if pos + 2 > data.len() {
            return Err(HuffError::Format(format!(
                "dictionary truncated after {} of {} entries",
                codes.len(),
                entry_count
            )));
        }
        let symbol = data[pos];
        let len = data[pos + 1];
        pos += 2;
        if len == 0 {
            return Err(HuffError::Format(format!(
                "zero-length codeword for symbol {}",
                symbol
            )));
        }
        if len > MAX_CODE_BITS {
            return Err(HuffError::Format(format!(
                "codeword length {} for symbol {} exceeds the supported {} bits",
                len, symbol, MAX_CODE_BITS
            )));
        }
        let n = (len as usize + 7) / 8;
        if pos + n > data.len() {
            return Err(HuffError::Format(format!(
                "codeword bytes for symbol {} run past the end of the container",
                symbol
            )));
        }
        let mut raw = [0_u8; 8];
        raw[..n].copy_from_slice(&data[pos..pos + n]);
        pos += n;
        let bits = u64::from_le_bytes(raw);
        if len < 64 && bits >> len != 0 {
            return Err(HuffError::Format(format!(
                "codeword for symbol {} is wider than its declared {} bits",
                symbol, len
            )));
        }
        if seen[symbol as usize] {
            return Err(HuffError::Format(format!(
                "symbol {} appears twice in the dictionary",
                symbol
            )));
        }
        seen[symbol as usize] = true;
        if decode_map.insert((len, bits), symbol).is_some() {
            return Err(HuffError::Format(format!(
                "two dictionary entries share the codeword {:b}",
                bits
            )));
        }
        codes.push((len, bits));
        max_len = max_len.max(len);
    }

    // A codeword that is a bit-prefix of another makes decoding ambiguous.
    for &(la, ba) in &codes {
        for &(lb, bb) in &codes {
            if la < lb && bb >> (lb - la) == ba {
                return Err(HuffError::Format(
                    "dictionary codewords are not a prefix code".to_string(),
                ));
            }
        }
    }

    if pos + SYMBOLS_FIELD > data.len() {
        return Err(HuffError::Format(
            "container ends before the original-symbol-count field".to_string(),
        ));
    }
    let expected = u32::from_le_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
    pos += SYMBOLS_FIELD;
    debug!(
        "Dictionary holds {} entries; expecting {} symbols.",
        entry_count, expected
    );

    if expected == 0 {
        return Ok(Vec::new());
    }
    if entry_count == 0 {
        return Err(HuffError::Format(format!(
            "container expects {} symbols but the dictionary is empty",
            expected
        )));
    }

    // Replay the payload bit by bit. Each appended bit grows the
    // accumulator; an exact (length, bits) match emits a symbol and resets
    // it. Stop exactly at the declared symbol count - any bits after that
    // are padding and are ignored.
    let mut out = Vec::with_capacity(expected);
    let mut br = BitReader::new(&data[pos..]);
    let mut acc = 0_u64;
    let mut acc_len = 0_u8;
    while out.len() < expected {
        let bit = match br.bit() {
            Some(bit) => bit,
            None => {
                return Err(HuffError::Format(format!(
                    "payload exhausted after {} of {} symbols",
                    out.len(),
                    expected
                )))
            }
        };
        acc = acc << 1 | bit as u64;
        acc_len += 1;
        if let Some(&symbol) = decode_map.get(&(acc_len, acc)) {
            out.push(symbol);
            acc = 0;
            acc_len = 0;
        } else if acc_len >= max_len {
            return Err(HuffError::Format(format!(
                "no codeword matches the payload bits before {}",
                br.loc()
            )));
        }
    }
    trace!("Payload replay stopped at {}.", br.loc());

    info!("Decompressed {} bytes.", out.len());
    Ok(out)
}
