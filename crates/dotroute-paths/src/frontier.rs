use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry: node `node` queued with priority `f`.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    pub f: f64,
    pub node: usize,
    seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then the
        // earliest insertion among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-priority queue of search candidates ordered by `f`, FIFO on ties.
///
/// A node may be queued several times; callers skip the stale copies when
/// they come out.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` with priority `f`.
    pub fn push(&mut self, f: f64, node: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { f, node, seq });
    }

    /// Remove and return the entry with the smallest `f`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
