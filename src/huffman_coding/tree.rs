//! Builds the Huffman code tree from a frequency table.
//!
//! Leaves for every symbol with a nonzero count go into a min-heap; the two
//! lightest nodes are merged repeatedly until a single root remains. Every
//! node is exclusively owned by its parent, so the whole tree is torn down
//! by scope when the code table deriver is finished with it.

use std::cmp::Ordering;

use super::min_heap::MinHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }
}

/// A node waiting in the build heap. Equal weights order by the sequence in
/// which the nodes entered the heap, which keeps the tree shape reproducible
/// for any given input.
#[derive(Eq, PartialEq, Debug)]
struct Weighted {
    weight: u64,
    seq: u32,
    node: Node,
}

impl Ord for Weighted {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Weighted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table. Returns None when no
/// symbol has a nonzero count. A single distinct symbol yields a tree that
/// is one bare leaf; the code table deriver special-cases it.
pub fn build_tree(freqs: &[u64; 256]) -> Option<Node> {
    let leaves: Vec<Weighted> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .enumerate()
        .map(|(seq, (sym, &f))| Weighted {
            weight: f,
            seq: seq as u32,
            node: Node::new(f, NodeData::Leaf(sym as u8)),
        })
        .collect();

    let mut seq = leaves.len() as u32;
    let mut heap = MinHeap::from_vec(leaves);

    // Merge the two lightest nodes until one root remains. The first pop
    // becomes the right child, the second the left.
    while heap.len() > 1 {
        let a = heap.pop().unwrap();
        let b = heap.pop().unwrap();
        let node = Node::new(
            a.weight + b.weight,
            NodeData::Kids(Box::new(b.node), Box::new(a.node)),
        );
        heap.push(Weighted {
            weight: node.weight,
            seq,
            node,
        });
        seq += 1;
    }

    heap.pop().map(|w| w.node)
}
