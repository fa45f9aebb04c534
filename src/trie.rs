//! Provides a Trie for storing keys composed of sequences of atoms.
//!
//! Atoms must support the TrieAtom trait. Atom values must support the
//! TrieValue trait.
//!
//! A Trie has two independent ways of marking that a key ends at a node:
//!  - `put` stores the key with an (optional) value. These keys are
//!    counted by `size`, returned by `get`, `keys` and `keys_with_prefix`,
//!    and removed by `delete`.
//!  - `insert` marks the key as a word. Words are used when searching for
//!    the common prefix of a set of words, and do not affect `size`.
//!
//! Keys are supplied as anything which implements `IntoIterator<Item = A>`
//! and keys are returned as anything which implements `FromIterator<A>`,
//! so with `char` atoms a `String` goes in as `s.chars()` and comes back out
//! as a `String`. Every operation which takes a key rejects an empty key
//! with [`TrieError::InvalidKey`] before touching the Trie.
//!
//! Example 1
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.put("shore".chars(), Some(1)).unwrap();
//! trie.put("short".chars(), Some(2)).unwrap();
//!
//! assert_eq!(trie.get("short".chars()).unwrap(), Some(&2));
//! assert_eq!(trie.size(), 2);
//!
//! let longest: String = trie.longest_prefix_of("shortage".chars()).unwrap();
//! assert_eq!(longest, "short");
//!
//! let keys: Vec<String> = trie.keys_with_prefix("sho".chars()).unwrap();
//! assert_eq!(keys, vec!["shore", "short"]);
//!
//! assert!(trie.delete("shore".chars()).unwrap());
//! assert!(!trie.delete("shore".chars()).unwrap());
//! assert_eq!(trie.keys::<String>(), vec!["short"]);
//! ```
//!
//! Example 2
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = "the quick brown fox".split_whitespace();
//! trie.put(input.clone(), Some(4)).unwrap();
//!
//! // Atoms can be words rather than chars
//! assert!(trie.contains(input.clone()).unwrap());
//! assert_eq!(trie.keys_with_prefix::<_, Vec<&str>>("the quick".split_whitespace()).unwrap().len(), 1);
//! assert!(trie.delete(input.clone()).unwrap());
//! assert!(trie.is_empty());
//! ```

use log::{debug, trace};

use crate::error::{validate_key, TrieError};
use crate::iterator::{Iter, KeyValueRef};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + PartialEq + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Copy + Default + PartialEq + Ord,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// Values which we wish to store in a Trie must implement
/// TrieValue.
pub trait TrieValue: Default {}

// Blanket implementation which satisfies the compiler
impl<V> TrieValue for V where V: Default {}

/// A Trie keyed by the chars of a string.
pub type TrieString<V> = Trie<char, V>;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct AtomValue<A, V> {
    pub(crate) atom: A,
    pub(crate) value: Option<V>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A, V> {
    /// Children in insertion order, at most one per atom.
    pub(crate) children: Vec<Node<A, V>>,
    pub(crate) pair: AtomValue<A, V>,
    /// A key was stored here by `put`.
    pub(crate) occupied: bool,
    /// A word ends here, set by `insert`.
    pub(crate) terminated: bool,
}

/// Stores a key of atoms as individual nodes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<A, V> {
    pub(crate) head: Node<A, V>,
    size: usize,
}

impl<A: TrieAtom, V: TrieValue> Node<A, V> {
    fn new(atom: A) -> Self {
        Self {
            pair: AtomValue { atom, value: None },
            ..Default::default()
        }
    }

    pub(crate) fn child(&self, atom: A) -> Option<&Self> {
        self.children.iter().find(|x| x.pair.atom == atom)
    }

    fn position(&self, atom: A) -> Option<usize> {
        self.children.iter().position(|x| x.pair.atom == atom)
    }

    fn child_or_insert(&mut self, atom: A) -> &mut Self {
        let index = match self.position(atom) {
            Some(i) => i,
            None => {
                self.children.push(Node::new(atom));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Follow `atoms` from this node, if the whole path exists.
    fn descend(&self, atoms: &[A]) -> Option<&Self> {
        atoms.iter().try_fold(self, |node, &atom| node.child(atom))
    }

    /// Follow `atoms` from this node, creating any missing nodes.
    fn descend_or_create(&mut self, atoms: &[A]) -> &mut Self {
        let mut node = self;
        for &atom in atoms {
            node = node.child_or_insert(atom);
        }
        node
    }

    /// Either kind of key ends here.
    fn is_marked(&self) -> bool {
        self.occupied || self.terminated
    }
}

impl<A: TrieAtom, V: TrieValue> Trie<A, V> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self {
            head: Node::default(),
            size: 0,
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::default();
        self.size = 0;
    }

    /// How many keys have been stored with `put`?
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is the Trie free of keys stored with `put`?
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Store the key with the supplied value. If the key is already present
    /// the value is overwritten. A value of `None` still makes the key
    /// present.
    pub fn put<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Result<(), TrieError> {
        let atoms = validate_key(key)?;
        let node = self.head.descend_or_create(&atoms);
        let fresh = !node.occupied;
        node.occupied = true;
        node.pair.value = value;
        if fresh {
            self.size += 1;
        }
        trace!("put key of {} atoms, new: {}", atoms.len(), fresh);
        Ok(())
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Result<Option<&V>, TrieError> {
        let atoms = validate_key(key)?;
        Ok(self
            .head
            .descend(&atoms)
            .filter(|n| n.occupied)
            .and_then(|n| n.pair.value.as_ref()))
    }

    /// Was the key stored with `put`? Unlike `get`, this is true for keys
    /// stored with a value of `None`.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> Result<bool, TrieError> {
        let atoms = validate_key(key)?;
        Ok(self.head.descend(&atoms).is_some_and(|n| n.occupied))
    }

    /// Was the word added with `insert`?
    pub fn contains_word<K: IntoIterator<Item = A>>(&self, word: K) -> Result<bool, TrieError> {
        let atoms = validate_key(word)?;
        Ok(self.head.descend(&atoms).is_some_and(|n| n.terminated))
    }

    /// Remove a key stored with `put`. Returns true if the key was present.
    ///
    /// Nodes left with no children and no key of either kind are removed
    /// from the Trie. Nothing is created or modified if the key is missing.
    pub fn delete<K: IntoIterator<Item = A>>(&mut self, key: K) -> Result<bool, TrieError> {
        let atoms = validate_key(key)?;

        // Record the child taken at each depth, and the deepest node which
        // must survive if everything below it along the path is dead.
        let mut path = Vec::with_capacity(atoms.len());
        let mut anchor = 0;
        let mut node = &self.head;
        for (depth, &atom) in atoms.iter().enumerate() {
            if depth > 0 && (node.is_marked() || node.children.len() > 1) {
                anchor = depth;
            }
            let Some(index) = node.position(atom) else {
                return Ok(false);
            };
            path.push(index);
            node = &node.children[index];
        }
        if !node.occupied {
            return Ok(false);
        }
        let detach = node.children.is_empty() && !node.terminated;

        let stop = if detach { anchor } else { path.len() };
        let mut node = &mut self.head;
        for &index in &path[..stop] {
            node = &mut node.children[index];
        }
        if detach {
            node.children.remove(path[anchor]);
            debug!(
                "deleted key of {} atoms, pruned {} nodes",
                atoms.len(),
                atoms.len() - anchor
            );
        } else {
            node.occupied = false;
            node.pair.value = None;
            debug!("deleted key of {} atoms, no pruning", atoms.len());
        }
        self.size -= 1;
        Ok(true)
    }

    /// Find the longest stored key which is a prefix of `query`. If no
    /// stored key matches, the result is empty.
    pub fn longest_prefix_of<K, P>(&self, query: K) -> Result<P, TrieError>
    where
        K: IntoIterator<Item = A>,
        P: FromIterator<A>,
    {
        let atoms = validate_key(query)?;
        let mut node = &self.head;
        let mut longest = 0;
        for (depth, &atom) in atoms.iter().enumerate() {
            match node.child(atom) {
                Some(n) => {
                    node = n;
                    if node.occupied {
                        longest = depth + 1;
                    }
                }
                None => break,
            }
        }
        Ok(atoms.into_iter().take(longest).collect())
    }

    /// Collect every stored key which starts with `prefix`, including
    /// `prefix` itself.
    pub fn keys_with_prefix<K, P>(&self, prefix: K) -> Result<Vec<P>, TrieError>
    where
        K: IntoIterator<Item = A>,
        P: FromIterator<A>,
    {
        Ok(self
            .iter_prefix(prefix)?
            .map(|kv| kv.key.into_iter().collect())
            .collect())
    }

    /// Collect every stored key.
    pub fn keys<P: FromIterator<A>>(&self) -> Vec<P> {
        self.iter().map(|kv| kv.key.into_iter().collect()).collect()
    }

    /// Mark the word as present. This is independent of `put`: the word
    /// has no value and is not counted by `size`.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, word: K) -> Result<(), TrieError> {
        let atoms = validate_key(word)?;
        self.head.descend_or_create(&atoms).terminated = true;
        trace!("inserted word of {} atoms", atoms.len());
        Ok(())
    }

    /// Follow the chain of only-children down from the root, stopping at
    /// the first branch or at the end of a word.
    pub fn common_prefix<P: FromIterator<A>>(&self) -> P {
        let mut prefix = vec![];
        let mut node = &self.head;
        while node.children.len() == 1 && !node.terminated {
            node = &node.children[0];
            prefix.push(node.pair.atom);
        }
        prefix.into_iter().collect()
    }

    /// Create an iterator over the stored keys, in insertion order of each
    /// node's children.
    pub fn iter(&self) -> Iter<'_, A, V> {
        Iter::new(&self.head, &[])
    }

    /// Create an iterator over the stored keys which start with `prefix`.
    pub fn iter_prefix<K: IntoIterator<Item = A>>(
        &self,
        prefix: K,
    ) -> Result<Iter<'_, A, V>, TrieError> {
        let atoms = validate_key(prefix)?;
        Ok(match self.head.descend(&atoms) {
            Some(node) => Iter::new(node, &atoms),
            None => Iter::empty(),
        })
    }

    /// Create a sorted iterator over the Trie.
    pub fn iter_sorted(&self) -> impl Iterator<Item = KeyValueRef<'_, A, V>> {
        let mut v = self.iter().collect::<Vec<KeyValueRef<'_, A, V>>>();
        v.sort_by_cached_key(|x| x.key.clone());
        v.into_iter()
    }
}
