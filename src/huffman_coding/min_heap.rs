//! An array-backed binary min-heap used to drive the Huffman tree build.
//!
//! Ordering comes entirely from `T: Ord`. Entries that need to break weight
//! ties deterministically carry their own sequence number inside their
//! ordering, so no two live entries ever compare equal.

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    /// Heapify a vec bottom-up, from the last internal index to the root.
    /// O(n), unlike pushing the elements one at a time.
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut heap = MinHeap { elements };
        let n = heap.len();
        if n > 1 {
            for i in (0..=(n - 2) / 2).rev() {
                heap.sift_down(i);
            }
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append and sift up, swapping with the parent while the parent is
    /// strictly greater. O(log n).
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.elements.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[parent] > self.elements[i] {
                self.elements.swap(parent, i);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Capture the root, move the last element into its place and sift it
    /// down. Returns None on an empty heap. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let top = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Swap with the smaller child while that child is strictly smaller.
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = i * 2 + 1;
            let right = i * 2 + 2;
            let mut smallest = i;
            if left < self.elements.len() && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < self.elements.len() && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[(i - 1) / 2] <= self.elements[i])
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::MinHeap;

    #[test]
    fn push_pop_sorted_test() {
        let mut heap = MinHeap::new();
        for w in [9_u32, 4, 7, 1, 8, 3, 2, 6, 5] {
            heap.push(w);
            assert!(heap.is_valid());
        }
        let mut out = vec![];
        while let Some(w) = heap.pop() {
            assert!(heap.is_valid());
            out.push(w);
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn from_vec_test() {
        let heap = MinHeap::from_vec(vec![5_u32, 3, 8, 1, 9, 2]);
        assert!(heap.is_valid());
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn empty_pop_test() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn randomized_invariant_test() {
        // Small multiplicative congruential generator, good enough to mix
        // up the weights without pulling in a dependency.
        let mut state = 0x2545f491_u64;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as u32 % 1000
        };

        let mut heap = MinHeap::new();
        for _ in 0..500 {
            heap.push(next());
            assert!(heap.is_valid());
        }
        let mut last = 0;
        for _ in 0..250 {
            let w = heap.pop().unwrap();
            assert!(heap.is_valid());
            assert!(w >= last);
            last = w;
        }
        for _ in 0..250 {
            heap.push(next());
            assert!(heap.is_valid());
        }
        while heap.pop().is_some() {
            assert!(heap.is_valid());
        }
    }

    #[test]
    fn ties_keep_insertion_order_test() {
        // Entries ordered by (weight, seq) pop in insertion order when the
        // weights are all equal.
        let mut heap = MinHeap::new();
        for seq in 0..10_u32 {
            heap.push((7_u32, seq));
        }
        for seq in 0..10_u32 {
            assert_eq!(heap.pop(), Some((7, seq)));
        }
    }
}
