//! Prefix tree over sequences of synonym classes.

use std::collections::HashMap;

use crate::types::ClassId;

/// A trie node: its own class plus edges to the classes that followed it.
#[derive(Debug)]
struct TupleNode {
    class: ClassId,
    /// next class → child node index
    children: HashMap<ClassId, usize>,
}

impl TupleNode {
    fn new(class: ClassId) -> Self {
        Self {
            class,
            children: HashMap::new(),
        }
    }
}

/// Arena-backed trie of class tuples.
///
/// Nodes are addressed by index into one `Vec`; edges only point from parent
/// to child, so dropping the trie drops everything.
#[derive(Debug)]
pub struct TupleTrie {
    nodes: Vec<TupleNode>,
    /// first class → root node index
    roots: HashMap<ClassId, usize>,
    /// Number of tuples inserted, duplicates included.
    tuple_count: u64,
}

impl TupleTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: HashMap::new(),
            tuple_count: 0,
        }
    }

    /// Insert one tuple, reusing every node already on its path.
    /// An empty tuple is ignored.
    pub fn insert(&mut self, tuple: &[ClassId]) {
        let Some((&first, rest)) = tuple.split_first() else {
            return;
        };

        let mut current = match self.roots.get(&first) {
            Some(&idx) => idx,
            None => {
                let idx = self.push_node(first);
                self.roots.insert(first, idx);
                idx
            }
        };

        for &class in rest {
            current = match self.nodes[current].children.get(&class) {
                Some(&idx) => idx,
                None => {
                    let idx = self.push_node(class);
                    self.nodes[current].children.insert(class, idx);
                    idx
                }
            };
        }

        self.tuple_count += 1;
    }

    /// Whether `tuple` is a path from some root: an inserted tuple or a prefix
    /// of one. Never creates nodes.
    pub fn contains(&self, tuple: &[ClassId]) -> bool {
        let Some((first, rest)) = tuple.split_first() else {
            return false;
        };
        let Some(&root) = self.roots.get(first) else {
            return false;
        };

        let mut current = root;
        for class in rest {
            match self.nodes[current].children.get(class) {
                Some(&idx) => current = idx,
                None => return false,
            }
        }
        debug_assert_eq!(self.nodes[current].class, *tuple.last().unwrap_or(first));
        true
    }

    /// Number of tuples inserted, duplicates included.
    pub fn tuple_count(&self) -> u64 {
        self.tuple_count
    }

    /// Number of nodes (distinct prefixes).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct first classes.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, class: ClassId) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(TupleNode::new(class));
        idx
    }
}

impl Default for TupleTrie {
    fn default() -> Self {
        Self::new()
    }
}
