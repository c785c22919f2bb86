//! Random-priority frontier of pending tree edges
//!
//! The frontier is a min-heap keyed by a uniformly drawn priority, which turns
//! breadth-first expansion into a randomized Prim-style growth: whichever
//! pending edge drew the smallest key is taken next.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::spatial::Cell;

/// Directed edge from a committed cell to a cell discovered as unvisited
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    // Field order defines the heap order: priority first
    priority: OrderedFloat<f64>,
    source: Cell,
    target: Cell,
    hops: i64,
}

impl Candidate {
    /// Zero-length edge from the root to itself that starts growth
    pub const fn seed(root: Cell, priority: f64) -> Self {
        Self {
            priority: OrderedFloat(priority),
            source: root,
            target: root,
            hops: 0,
        }
    }

    /// One-step edge from `source` to its neighbour `target`
    pub const fn step(source: Cell, target: Cell, priority: f64) -> Self {
        Self {
            priority: OrderedFloat(priority),
            source,
            target,
            hops: 1,
        }
    }

    /// Random key in `[0, 1)` drawn when the edge was discovered
    pub const fn priority(&self) -> f64 {
        self.priority.0
    }

    /// Committed cell the edge leaves from
    pub const fn source(&self) -> Cell {
        self.source
    }

    /// Cell the edge commits when popped
    pub const fn target(&self) -> Cell {
        self.target
    }

    /// Depth added to the source depth on commit
    pub const fn hops(&self) -> i64 {
        self.hops
    }
}

/// Min-priority collection of pending candidates
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    pushed: usize,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a candidate
    pub fn push(&mut self, candidate: Candidate) {
        self.pushed += 1;
        self.heap.push(Reverse(candidate));
    }

    /// Remove and return the candidate with the smallest priority
    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    /// Number of pending candidates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if no candidates are pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total candidates ever pushed, including duplicates
    pub const fn pushed(&self) -> usize {
        self.pushed
    }
}
