//! Provides Trie iterators.
//!
//! Both iterators walk the Trie depth first, visiting a node before its
//! children and children in the order they were created. Only keys stored
//! with `put` are yielded.
//!
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.put("to".chars(), Some(1)).unwrap();
//! trie.put("tea".chars(), Some(2)).unwrap();
//! trie.put("ten".chars(), None).unwrap();
//!
//! let pairs: Vec<(String, Option<&i32>)> = trie
//!     .iter()
//!     .map(|kv| (kv.key.into_iter().collect(), kv.value))
//!     .collect();
//! assert_eq!(
//!     pairs,
//!     vec![
//!         ("to".to_string(), Some(&1)),
//!         ("tea".to_string(), Some(&2)),
//!         ("ten".to_string(), None)
//!     ]
//! );
//! ```
use crate::trie::{Node, Trie, TrieAtom, TrieValue};

/// Iterator Item
#[derive(Debug)]
pub struct KeyValue<A, V> {
    pub key: Vec<A>,
    pub value: Option<V>,
}

/// Iterator Item
#[derive(Debug)]
pub struct KeyValueRef<'a, A, V> {
    pub key: Vec<A>,
    pub value: Option<&'a V>,
}

/// Iterator over a Trie, or over the part of a Trie below a prefix.
#[derive(Debug)]
pub struct Iter<'a, A, V> {
    // The key of the most recently visited node.
    key: Vec<A>,
    // Pending nodes, paired with the length of their key.
    stack: Vec<(usize, &'a Node<A, V>)>,
}

impl<'a, A: TrieAtom, V: TrieValue> Iter<'a, A, V> {
    /// Iterate from `start`, which is reached from the root by `prefix`.
    pub(crate) fn new(start: &'a Node<A, V>, prefix: &[A]) -> Self {
        // The start node pushes its own atom when visited, unless it is the root.
        let key = match prefix.split_last() {
            Some((_, rest)) => rest.to_vec(),
            None => vec![],
        };
        Self {
            key,
            stack: vec![(prefix.len(), start)],
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            key: vec![],
            stack: vec![],
        }
    }
}

impl<'a, A: TrieAtom, V: TrieValue> Iterator for Iter<'a, A, V> {
    type Item = KeyValueRef<'a, A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node)) = self.stack.pop() {
            if depth > 0 {
                self.key.truncate(depth - 1);
                self.key.push(node.pair.atom);
            }
            self.stack
                .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
            if node.occupied {
                return Some(KeyValueRef {
                    key: self.key.clone(),
                    value: node.pair.value.as_ref(),
                });
            }
        }
        None
    }
}

// Iterator
impl<'a, A: TrieAtom, V: TrieValue> IntoIterator for &'a Trie<A, V> {
    type Item = KeyValueRef<'a, A, V>;
    type IntoIter = Iter<'a, A, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator over a Trie.
#[derive(Debug)]
pub struct TrieIntoIterator<A, V> {
    key: Vec<A>,
    stack: Vec<(usize, Node<A, V>)>,
}

impl<A: TrieAtom, V: TrieValue> IntoIterator for Trie<A, V> {
    type Item = KeyValue<A, V>;
    type IntoIter = TrieIntoIterator<A, V>;

    fn into_iter(self) -> Self::IntoIter {
        TrieIntoIterator {
            key: vec![],
            stack: vec![(0, self.head)],
        }
    }
}

impl<A: TrieAtom, V: TrieValue> Iterator for TrieIntoIterator<A, V> {
    type Item = KeyValue<A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node)) = self.stack.pop() {
            let Node {
                children,
                pair,
                occupied,
                ..
            } = node;
            if depth > 0 {
                self.key.truncate(depth - 1);
                self.key.push(pair.atom);
            }
            self.stack
                .extend(children.into_iter().rev().map(|child| (depth + 1, child)));
            if occupied {
                return Some(KeyValue {
                    key: self.key.clone(),
                    value: pair.value,
                });
            }
        }
        None
    }
}
