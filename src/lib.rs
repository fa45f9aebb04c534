//! Provides a Trie for storing keys composed of sequences of atoms, with
//! prefix-aware queries on top.
//!
//! A key may have an associated (optional) value. Keys are supplied as
//! anything implementing `IntoIterator<Item = A>`, so the user decides the
//! atom granularity: `chars`, grapheme clusters, whitespace separated words,
//! numbers...
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::TrieString`] is provided.
//!
//! The Trie supports:
//!  - storing, reading and deleting keys (`put`, `get`, `delete`)
//!  - finding the longest stored key which prefixes a query
//!    (`longest_prefix_of`)
//!  - listing stored keys, optionally below a prefix (`keys`,
//!    `keys_with_prefix`)
//!  - marking words (`insert`) and finding their longest common prefix
//!    ([`crate::words::longest_common_prefix`])
//!  - counting keys by suffix and checking prefixes
//!    (`count_words_with_suffix`, `has_prefix`)
//!
//! Any operation taking a key rejects an empty key with
//! [`crate::error::TrieError::InvalidKey`].
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * words : [`crate::words`]

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod trie;

pub mod words;
