// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick automaton over a pattern's literal segments.
//!
//! Construction follows Aho & Corasick (1975): the goto function is the
//! segment trie (algorithm 2), failure links and merged output sets are
//! computed breadth-first (algorithm 3). The automaton is built once and is
//! read-only afterwards; lazily resolved transitions are cached by the
//! matcher, not here.

pub mod trie;

pub use trie::{Node, NodeId, ROOT, Trie};

use std::collections::VecDeque;

use crate::pattern::Pattern;

/// Pattern matching machine for segment texts.
#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
}

impl Automaton {
    /// Build the automaton for every segment of `pattern`.
    pub fn build(pattern: &Pattern) -> Self {
        let mut trie = Trie::new();
        for segment in pattern.segments() {
            trie.insert(&segment.text, segment.index);
        }
        let automaton = Self::from_trie(trie);

        tracing::debug!(
            segments = pattern.segments().len(),
            nodes = automaton.len(),
            "built segment automaton"
        );
        automaton
    }

    /// Add failure links and output propagation to a finished trie.
    pub fn from_trie(trie: Trie) -> Self {
        let mut automaton = Self { nodes: trie.nodes };
        automaton.build_failure();
        automaton
    }

    fn build_failure(&mut self) {
        let mut queue = VecDeque::new();

        // Depth-1 nodes fail to the root
        let children: Vec<NodeId> = self.nodes[ROOT as usize].links.values().copied().collect();
        for child in children {
            self.nodes[child as usize].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(node) = queue.pop_front() {
            let links: Vec<(char, NodeId)> = self.nodes[node as usize]
                .links
                .iter()
                .map(|(&c, &next)| (c, next))
                .collect();

            for (c, next) in links {
                let mut state = self.nodes[node as usize].fail;
                let fail = loop {
                    match self.goto(state, c) {
                        Some(target) => break target,
                        None => state = self.nodes[state as usize].fail,
                    }
                };
                self.nodes[next as usize].fail = fail;

                // Shallower nodes are finished first, so the failure
                // target's output already includes its own suffixes.
                if !self.nodes[fail as usize].output.is_empty() {
                    let inherited = self.nodes[fail as usize].output.clone();
                    let output = &mut self.nodes[next as usize].output;
                    output.extend(inherited);
                    output.sort_unstable();
                    output.dedup();
                }
                if !self.nodes[next as usize].output.is_empty() {
                    self.nodes[next as usize].terminal = true;
                }

                queue.push_back(next);
            }
        }
    }

    /// Goto function. The root never fails: unknown characters loop back
    /// to it.
    #[inline]
    pub fn goto(&self, state: NodeId, c: char) -> Option<NodeId> {
        match self.nodes[state as usize].links.get(&c) {
            Some(&next) => Some(next),
            None if state == ROOT => Some(ROOT),
            None => None,
        }
    }

    /// Failure function.
    #[inline]
    pub fn failure(&self, state: NodeId) -> NodeId {
        self.nodes[state as usize].fail
    }

    /// Output function: segment indices ending at `state`, if any.
    #[inline]
    pub fn output(&self, state: NodeId) -> Option<&[usize]> {
        let node = &self.nodes[state as usize];
        if node.terminal {
            Some(&node.output)
        } else {
            None
        }
    }

    /// Number of states, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
