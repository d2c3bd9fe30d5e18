// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Frequency counting and Huffman tree construction.
//!
//! The tree is arena-backed: nodes live in a flat `Vec` and reference their
//! children by index, so construction and traversal are iterative and immune
//! to call-stack depth limits even for very large alphabets.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Symbol-to-count mapping built once per encode operation.
///
/// Remembers first-seen order so that heap tie-breaks (and therefore the
/// generated codes) are deterministic for a given input.
///
/// Invariant: every counted symbol has a strictly positive count; the table
/// is empty iff the input was empty.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<char, u64>,
    order: Vec<char>,
}

impl FrequencyTable {
    /// Count occurrences of each distinct symbol. Empty input produces an
    /// empty table; there are no error conditions.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut table = FrequencyTable::default();
        for symbol in symbols {
            let count = table.counts.entry(symbol).or_insert(0);
            if *count == 0 {
                table.order.push(symbol);
            }
            *count += 1;
        }
        table
    }

    /// Count the characters of a text buffer.
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }

    /// Occurrence count for `symbol`, 0 if it never appeared.
    pub fn count(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(symbol, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.order.iter().map(move |&s| (s, self.counts[&s]))
    }
}

/// Index of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

/// A Huffman tree node. Leaves own a symbol; internal nodes own children by
/// arena index and a weight equal to the sum of their children's weights.
///
/// `right` is `None` only for the root produced by the single-symbol policy
/// (see [`HuffmanTree::build`]); every merged internal node has two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf { symbol: char, weight: u64 },
    Internal {
        weight: u64,
        left: NodeId,
        right: Option<NodeId>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }
}

/// An arena-backed prefix-code tree. Built bottom-up from a frequency table;
/// each parent exclusively owns its children (strict binary tree, no cycles).
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<HuffNode>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree by repeated lowest-weight merges.
    ///
    /// A min-priority queue is seeded with one leaf per distinct symbol; the
    /// two lowest-weight nodes are merged into an internal parent until one
    /// node remains. Ties are broken by insertion order (first-seen symbols
    /// first, merged nodes after), which makes the result deterministic.
    ///
    /// Edge cases:
    /// - Empty table → `None` (downstream code tables come out empty).
    /// - Exactly one distinct symbol → a single internal root wrapping one
    ///   leaf, so the symbol still receives the length-1 code `"0"` rather
    ///   than a zero-length code. The leaf is never used directly as root.
    /// - k ≥ 2 symbols → exactly k−1 internal nodes.
    pub fn build(freqs: &FrequencyTable) -> Option<HuffmanTree> {
        if freqs.is_empty() {
            return None;
        }

        let mut nodes: Vec<HuffNode> = Vec::with_capacity(2 * freqs.len());
        // Entries order by (weight, insertion sequence); Reverse turns the
        // std max-heap into a min-heap.
        let mut heap: BinaryHeap<Reverse<(u64, u32, u32)>> =
            BinaryHeap::with_capacity(freqs.len());
        let mut seq: u32 = 0;

        for (symbol, weight) in freqs.iter() {
            let id = nodes.len() as u32;
            nodes.push(HuffNode::Leaf { symbol, weight });
            heap.push(Reverse((weight, seq, id)));
            seq += 1;
        }

        if nodes.len() == 1 {
            let weight = nodes[0].weight();
            let root = NodeId(1);
            nodes.push(HuffNode::Internal {
                weight,
                left: NodeId(0),
                right: None,
            });
            return Some(HuffmanTree { nodes, root });
        }

        while heap.len() > 1 {
            let Reverse((wa, _, a)) = heap.pop()?;
            let Reverse((wb, _, b)) = heap.pop()?;
            let id = nodes.len() as u32;
            nodes.push(HuffNode::Internal {
                weight: wa + wb,
                left: NodeId(a),
                right: Some(NodeId(b)),
            });
            heap.push(Reverse((wa + wb, seq, id)));
            seq += 1;
        }

        let Reverse((_, _, root)) = heap.pop()?;
        Some(HuffmanTree {
            nodes,
            root: NodeId(root),
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &HuffNode {
        &self.nodes[id.0 as usize]
    }

    /// Total node count (leaves + internal).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, HuffNode::Leaf { .. }))
            .count()
    }
}
