//! Derives the symbol-to-codeword table from the Huffman tree.
//!
//! The walk carries a bit-path accumulator: descending left appends a 0,
//! descending right a 1. Only leaves carry symbols, and every leaf sits at
//! a unique path, so the resulting codewords form a prefix code by
//! construction. The bit length is carried explicitly beside the bits;
//! encoding the length inside the integer value itself cannot represent a
//! zero-length root path and is harder to test.

use super::tree::{Node, NodeData};

/// A single codeword: the bit pattern right-aligned in `bits`, and how many
/// of its low bits are meaningful. With at most 255 dictionary entries and
/// a 4-byte symbol count, tree depth stays well under 64, so u64 holds any
/// code the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codeword {
    pub bits: u64,
    pub len: u8,
}

/// Symbol-indexed codeword table, fixed at 256 slots.
#[derive(Debug)]
pub struct CodeTable {
    codes: [Option<Codeword>; 256],
}

impl CodeTable {
    /// A table with no codewords, for the empty input.
    pub fn empty() -> Self {
        CodeTable { codes: [None; 256] }
    }

    /// Derive the table from the tree, consuming it. A root that is itself
    /// a leaf gets an explicit 1-bit codeword; a zero-length code could not
    /// round-trip.
    pub fn from_tree(root: Node) -> Self {
        let mut codes = [None; 256];
        match root.node_data {
            NodeData::Leaf(sym) => codes[sym as usize] = Some(Codeword { bits: 0, len: 1 }),
            NodeData::Kids(left, right) => {
                walk(&left, 0, 1, &mut codes);
                walk(&right, 1, 1, &mut codes);
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<Codeword> {
        self.codes[symbol as usize]
    }

    /// Iterate the assigned codewords in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Codeword)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, c)| c.map(|c| (sym as u8, c)))
    }

    /// How many symbols have a codeword.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }
}

fn walk(node: &Node, bits: u64, len: u8, codes: &mut [Option<Codeword>; 256]) {
    match &node.node_data {
        NodeData::Leaf(sym) => codes[*sym as usize] = Some(Codeword { bits, len }),
        NodeData::Kids(left, right) => {
            walk(left, bits << 1, len + 1, codes);
            walk(right, (bits << 1) | 1, len + 1, codes);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CodeTable, Codeword};
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(build_tree(&freqs(data)).unwrap())
    }

    #[test]
    fn single_leaf_gets_one_bit_test() {
        let table = table_for("zzzz".as_bytes());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'z'), Some(Codeword { bits: 0, len: 1 }));
    }

    #[test]
    fn shortest_code_to_most_frequent_test() {
        let table = table_for("aaaabbbcc".as_bytes());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'a').unwrap().len, 1);
        assert_eq!(table.get(b'b').unwrap().len, 2);
        assert_eq!(table.get(b'c').unwrap().len, 2);
    }

    #[test]
    fn optimality_test() {
        // freq(a) > freq(b) must imply len(a) <= len(b), pairwise.
        let mut data = Vec::new();
        for (sym, count) in [(b'e', 400), (b't', 250), (b'a', 120), (b'o', 60), (b'q', 9), (b'z', 1)] {
            data.extend(std::iter::repeat(sym).take(count));
        }
        let f = freqs(&data);
        let table = table_for(&data);
        let codes: Vec<(u8, Codeword)> = table.iter().collect();
        for &(a, ca) in &codes {
            for &(b, cb) in &codes {
                if f[a as usize] > f[b as usize] {
                    assert!(ca.len <= cb.len, "len({}) > len({})", a, b);
                }
            }
        }
    }

    #[test]
    fn prefix_code_test() {
        // No codeword may be a bit-prefix of any other.
        let data = "the quick brown fox jumps over the lazy dog".as_bytes();
        let table = table_for(data);
        let codes: Vec<Codeword> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j && a.len <= b.len {
                    assert_ne!(b.bits >> (b.len - a.len), a.bits);
                }
            }
        }
    }

    #[test]
    fn empty_table_test() {
        let table = CodeTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
