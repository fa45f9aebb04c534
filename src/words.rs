//! Word queries built on top of the Trie's public operations.
//!
//! ```
//! use wordtrie::trie::Trie;
//! use wordtrie::words::longest_common_prefix;
//!
//! let mut trie = Trie::new();
//! for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
//!     trie.put(word.chars(), Some(i)).unwrap();
//! }
//! assert_eq!(trie.count_words_with_suffix("ion".chars()), 1);
//! assert!(trie.has_prefix("app".chars()).unwrap());
//!
//! let lcp: String = longest_common_prefix(["flower", "flow", "flight"].map(str::chars)).unwrap();
//! assert_eq!(lcp, "fl");
//! ```

use log::trace;

use crate::error::TrieError;
use crate::trie::{Trie, TrieAtom, TrieValue};

impl<A: TrieAtom, V: TrieValue> Trie<A, V> {
    /// Count the stored keys which end with `pattern`. An empty pattern
    /// matches every key.
    pub fn count_words_with_suffix<S: IntoIterator<Item = A>>(&self, pattern: S) -> usize {
        let pattern: Vec<A> = pattern.into_iter().collect();
        self.iter().filter(|kv| kv.key.ends_with(&pattern)).count()
    }

    /// Is at least one key stored under `prefix`?
    pub fn has_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> Result<bool, TrieError> {
        Ok(self.iter_prefix(prefix)?.next().is_some())
    }
}

/// Find the longest prefix shared by every word.
///
/// The words are inserted into a fresh Trie, which is then walked from the
/// root for as long as there is a single path and no word has ended. An
/// empty list of words has an empty common prefix, while an empty word is
/// rejected.
pub fn longest_common_prefix<I, W, A, P>(words: I) -> Result<P, TrieError>
where
    I: IntoIterator<Item = W>,
    W: IntoIterator<Item = A>,
    A: TrieAtom,
    P: FromIterator<A>,
{
    let mut words = words.into_iter().peekable();
    if words.peek().is_none() {
        return Ok(std::iter::empty().collect());
    }

    let mut trie: Trie<A, ()> = Trie::new();
    let mut count = 0;
    for word in words {
        trie.insert(word)?;
        count += 1;
    }
    trace!("searching common prefix of {} words", count);
    Ok(trie.common_prefix())
}
