// This file is part of WordGridSolver.
//
// WordGridSolver is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGridSolver is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGridSolver. If
// not, see <https://www.gnu.org/licenses/>.
//

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    is_word: bool,
}

/// Prefix tree over uppercased words.
///
/// Nodes live in one arena and refer to their children by index; the root is
/// node 0 and stands for the empty sequence. The index is filled once and then
/// only read, so a shared reference can be handed to any number of threads.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    words: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        return Self { nodes: vec![Node::default()], words: 0 };
    }

    /// Inserts the uppercased form of `word`. Inserting a word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node_idx = 0;
        for c in word.chars().flat_map(char::to_uppercase) {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node_idx].children.insert(c, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[node_idx];
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
    }

    fn walk(&self, sequence: &str) -> Option<&Node> {
        let mut node = &self.nodes[0];
        for c in sequence.chars() {
            node = &self.nodes[*node.children.get(&c)?];
        }
        return Some(node);
    }

    /// True if some inserted word starts with `sequence` (the sequence itself included).
    pub fn is_prefix(&self, sequence: &str) -> bool {
        return self.walk(sequence).is_some();
    }

    pub fn is_word(&self, sequence: &str) -> bool {
        return self.walk(sequence).is_some_and(|node| node.is_word);
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize { return self.words; }

    pub fn is_empty(&self) -> bool { return self.words == 0; }
}

impl Default for PrefixIndex {
    fn default() -> Self { return Self::new(); }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        for word in iter {
            index.insert(word.as_ref());
        }
        return index;
    }
}
