// Copyright 2025 Rowdex Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generalized suffix tree for substring (`contains`) search
//!
//! Online Ukkonen-style construction shared across many texts: `put` feeds
//! one text at a time and tags every node on every suffix path with the
//! text's row id. Nodes and edges live in arenas addressed by u32 ids, which
//! keeps the suffix-link cycles pointer-free. Edge labels are char sequences
//! sliced from the inserted text.
//!
//! Payload propagation: tagging a node also walks its suffix-link chain and
//! tags every node along it, stopping at the first node that already carries
//! the id.
//!
//! `delete` strips an id along the walked path and through all descendants
//! of the terminal node, and drops the outgoing edges of any node whose
//! payload empties. This is deliberately the dual the engine was specified
//! with: it can leave the id on suffix paths not under the walked key and can
//! over-strip when the id was inserted under another text.

use rustc_hash::FxHashMap;

use crate::common::IdSet;
use crate::core::RowId;

/// Null arena id
const NIL: u32 = u32::MAX;

/// A tree node: outgoing edges keyed by first label char, suffix link, payload
#[derive(Debug)]
struct SuffixNode {
    edges: FxHashMap<char, u32>,
    suffix: u32,
    data: IdSet,
}

/// An edge: label characters and target node
#[derive(Debug)]
struct SuffixEdge {
    label: Vec<char>,
    target: u32,
}

/// Generalized suffix tree with row-id payloads
#[derive(Debug)]
pub struct SuffixTree {
    nodes: Vec<SuffixNode>,
    edges: Vec<SuffixEdge>,
    root: u32,
    /// Most recently added leaf of the current insertion; chains suffix links
    active_leaf: u32,
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTree {
    /// Create an empty tree
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            root: 0,
            active_leaf: 0,
        };
        tree.root = tree.alloc_node();
        tree.active_leaf = tree.root;
        tree
    }

    fn alloc_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(SuffixNode {
            edges: FxHashMap::default(),
            suffix: NIL,
            data: IdSet::new(),
        });
        id
    }

    fn alloc_edge(&mut self, label: Vec<char>, target: u32) -> u32 {
        let id = self.edges.len() as u32;
        self.edges.push(SuffixEdge { label, target });
        id
    }

    #[inline]
    fn node(&self, id: u32) -> &SuffixNode {
        &self.nodes[id as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: u32) -> &mut SuffixNode {
        &mut self.nodes[id as usize]
    }

    #[inline]
    fn edge(&self, id: u32) -> &SuffixEdge {
        &self.edges[id as usize]
    }

    /// Tag a node and its suffix-link chain with an id
    ///
    /// Stops at the first node that already contains the id.
    fn add_ref(&mut self, node: u32, id: RowId) {
        let mut current = node;
        while current != NIL {
            if self.node(current).data.contains(id) {
                break;
            }
            self.node_mut(current).data.insert(id);
            current = self.node(current).suffix;
        }
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert every suffix of `text`, tagging the paths with `id`
    pub fn put(&mut self, text: &str, id: RowId) {
        self.active_leaf = self.root;
        let chars: Vec<char> = text.chars().collect();

        let mut s = self.root;
        let mut text_part: Vec<char> = Vec::new();
        for i in 0..chars.len() {
            text_part.push(chars[i]);
            let (next_s, next_part) = self.update(s, &text_part, &chars[i..], id);
            let (canon_s, canon_part) = self.canonize(next_s, &next_part);
            s = canon_s;
            text_part = canon_part;
        }

        if self.node(self.active_leaf).suffix == NIL
            && self.active_leaf != self.root
            && self.active_leaf != s
        {
            self.node_mut(self.active_leaf).suffix = s;
        }
    }

    /// Extend the tree with the transitions the newest character requires
    ///
    /// Returns the new active point; `oldroot` chains the suffix links of the
    /// internal nodes created while walking down the boundary path.
    fn update(
        &mut self,
        input_node: u32,
        string_part: &[char],
        rest: &[char],
        id: RowId,
    ) -> (u32, Vec<char>) {
        let mut s = input_node;
        let mut tempstr: Vec<char> = string_part.to_vec();
        let new_char = *string_part
            .last()
            .unwrap_or_else(|| panic!("bug: update without a new character"));

        let mut oldroot = self.root;
        let (mut endpoint, mut r) =
            self.test_and_split(s, cut_last(&tempstr), new_char, rest, id);

        while !endpoint {
            let leaf = match self.node(r).edges.get(&new_char).copied() {
                // a deeper node can already exist here because other texts
                // were inserted before this one
                Some(edge) => self.edge(edge).target,
                None => {
                    let leaf = self.alloc_node();
                    self.add_ref(leaf, id);
                    let edge = self.alloc_edge(rest.to_vec(), leaf);
                    self.node_mut(r).edges.insert(new_char, edge);
                    leaf
                }
            };

            if self.active_leaf != self.root {
                self.node_mut(self.active_leaf).suffix = leaf;
            }
            self.active_leaf = leaf;

            if oldroot != self.root {
                self.node_mut(oldroot).suffix = r;
            }
            oldroot = r;

            if self.node(s).suffix == NIL {
                // the bottom node of the paper: drop the first character
                debug_assert_eq!(s, self.root, "bug: only the root lacks a suffix link");
                if !tempstr.is_empty() {
                    tempstr.remove(0);
                }
            } else {
                let suffix = self.node(s).suffix;
                let last = *tempstr
                    .last()
                    .unwrap_or_else(|| panic!("bug: empty active string off the root"));
                let (canon_s, mut canon_part) = self.canonize(suffix, cut_last(&tempstr));
                s = canon_s;
                canon_part.push(last);
                tempstr = canon_part;
            }

            let (next_endpoint, next_r) =
                self.test_and_split(s, cut_last(&tempstr), new_char, rest, id);
            endpoint = next_endpoint;
            r = next_r;
        }

        if oldroot != self.root {
            self.node_mut(oldroot).suffix = r;
        }

        (s, tempstr)
    }

    /// Check whether the active point already has the wanted transition,
    /// splitting an edge in two when the point sits mid-label
    fn test_and_split(
        &mut self,
        input: u32,
        string_part: &[char],
        t: char,
        remainder: &[char],
        id: RowId,
    ) -> (bool, u32) {
        let (s, str_part) = self.canonize(input, string_part);

        if !str_part.is_empty() {
            let edge = self
                .node(s)
                .edges
                .get(&str_part[0])
                .copied()
                .unwrap_or_else(|| panic!("bug: canonical point lost its edge"));
            let label = self.edge(edge).label.clone();

            if label.len() > str_part.len() && label[str_part.len()] == t {
                return (true, s);
            }

            // split the edge: an intermediate node takes the matched part
            debug_assert!(
                label.starts_with(&str_part),
                "bug: edge label diverged from the canonical point"
            );
            let trailing: Vec<char> = label[str_part.len()..].to_vec();
            let r = self.alloc_node();
            let new_edge = self.alloc_edge(str_part.clone(), r);
            self.edges[edge as usize].label = trailing.clone();
            self.node_mut(r).edges.insert(trailing[0], edge);
            self.node_mut(s).edges.insert(str_part[0], new_edge);
            return (false, r);
        }

        let Some(edge) = self.node(s).edges.get(&t).copied() else {
            return (false, s);
        };
        let label = self.edge(edge).label.clone();

        if remainder == label.as_slice() {
            let target = self.edge(edge).target;
            self.add_ref(target, id);
            (true, s)
        } else if remainder.starts_with(&label) {
            (true, s)
        } else if label.starts_with(remainder) {
            // the inserted suffix ends inside this edge
            let new_node = self.alloc_node();
            self.add_ref(new_node, id);
            let new_edge = self.alloc_edge(remainder.to_vec(), new_node);
            let trailing: Vec<char> = label[remainder.len()..].to_vec();
            self.edges[edge as usize].label = trailing.clone();
            self.node_mut(new_node).edges.insert(trailing[0], edge);
            self.node_mut(s).edges.insert(t, new_edge);
            (false, s)
        } else {
            // different words sharing no prefix here
            (true, s)
        }
    }

    /// Advance through edges whose label is fully consumed by the string
    fn canonize(&self, node: u32, input: &[char]) -> (u32, Vec<char>) {
        if input.is_empty() {
            return (node, Vec::new());
        }
        let mut current = node;
        let mut str_part = input.to_vec();
        let mut edge = self.node(current).edges.get(&str_part[0]).copied();
        while let Some(g) = edge {
            let label = &self.edge(g).label;
            if !str_part.starts_with(label) {
                break;
            }
            str_part.drain(..label.len());
            current = self.edge(g).target;
            if str_part.is_empty() {
                break;
            }
            edge = self.node(current).edges.get(&str_part[0]).copied();
        }
        (current, str_part)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Ids of all texts containing `pattern` as a substring
    ///
    /// Descends matching edge labels, then unions the terminating node's
    /// payload with the payloads of all its descendants - a substring hit
    /// includes every longer context.
    pub fn find(&self, pattern: &str) -> Option<IdSet> {
        let chars: Vec<char> = pattern.chars().collect();
        let node = self.search_node(&chars)?;
        let mut out = IdSet::new();
        self.collect(node, &mut out);
        Some(out)
    }

    fn search_node(&self, pattern: &[char]) -> Option<u32> {
        let mut node = self.root;
        let mut i = 0;
        while i < pattern.len() {
            let edge = self.node(node).edges.get(&pattern[i]).copied()?;
            let label = &self.edge(edge).label;
            let len_to_match = std::cmp::min(pattern.len() - i, label.len());
            if pattern[i..i + len_to_match] != label[..len_to_match] {
                return None;
            }
            if label.len() >= pattern.len() - i {
                return Some(self.edge(edge).target);
            }
            node = self.edge(edge).target;
            i += len_to_match;
        }
        None
    }

    fn collect(&self, node: u32, out: &mut IdSet) {
        for id in self.node(node).data.iter() {
            out.insert(id);
        }
        for edge in self.node(node).edges.values() {
            self.collect(self.edge(*edge).target, out);
        }
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Strip `id` along the path spelled by `key` and from all descendants
    /// of the terminal node
    ///
    /// A node whose payload empties drops all of its outgoing edges.
    pub fn delete(&mut self, key: &str, id: RowId) {
        let chars: Vec<char> = key.chars().collect();

        // walk the path first; stripping as we go could clear the very edges
        // the walk still needs
        let mut path = Vec::new();
        let mut terminal = None;
        let mut node = self.root;
        let mut i = 0;
        while i < chars.len() {
            let Some(edge) = self.node(node).edges.get(&chars[i]).copied() else {
                break;
            };
            let label = &self.edge(edge).label;
            let len_to_match = std::cmp::min(chars.len() - i, label.len());
            if chars[i..i + len_to_match] != label[..len_to_match] {
                break;
            }
            let target = self.edge(edge).target;
            path.push(target);
            if label.len() >= chars.len() - i {
                terminal = Some(target);
                break;
            }
            node = target;
            i += len_to_match;
        }

        for node in path {
            self.strip(node, id);
        }
        if let Some(terminal) = terminal {
            self.strip_descendants(terminal, id);
        }
    }

    fn strip(&mut self, node: u32, id: RowId) {
        let n = self.node_mut(node);
        n.data.remove(id);
        if n.data.is_empty() {
            n.edges.clear();
        }
    }

    fn strip_descendants(&mut self, node: u32, id: RowId) {
        let targets: Vec<u32> = self
            .node(node)
            .edges
            .values()
            .map(|&edge| self.edge(edge).target)
            .collect();
        for target in targets {
            self.strip(target, id);
            self.strip_descendants(target, id);
        }
    }
}

fn cut_last(s: &[char]) -> &[char] {
    if s.is_empty() {
        s
    } else {
        &s[..s.len() - 1]
    }
}
