// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix trie over segment texts, stored as a node arena.

use rustc_hash::FxHashMap;

/// Index of a node in the arena.
pub type NodeId = u32;

/// The root is always the first node.
pub const ROOT: NodeId = 0;

/// Trie node.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Trie edges (goto function before failure resolution).
    pub links: FxHashMap<char, NodeId>,
    /// Set once the node emits at least one segment.
    pub terminal: bool,
    /// Segment indices ending at this node, sorted and deduplicated.
    pub output: Vec<usize>,
    /// Failure link; the root links to itself.
    pub fail: NodeId,
}

/// Prefix trie. Nodes are owned by the arena, edges and failure links are
/// plain indices into it.
#[derive(Debug, Clone)]
pub struct Trie {
    pub(crate) nodes: Vec<Node>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Insert `word`, tagging its final node with segment `index`.
    ///
    /// Identical words share a node and accumulate their indices.
    pub fn insert(&mut self, word: &[char], index: usize) {
        let mut current = ROOT;
        for &c in word {
            current = match self.nodes[current as usize].links.get(&c) {
                Some(&next) => next,
                None => {
                    // Patterns are capped at MAX_SUPPORTED_LEN characters
                    debug_assert!(self.nodes.len() <= NodeId::MAX as usize);
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[current as usize].links.insert(c, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        node.terminal = true;
        if let Err(pos) = node.output.binary_search(&index) {
            node.output.insert(pos, index);
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
