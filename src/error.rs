//! Errors reported by Trie operations.

use thiserror::Error;

/// Raised when an argument cannot be used as a key.
///
/// Lookups of keys which are simply absent are not errors: they are
/// reported as `None`, `false` or an empty result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    #[error("illegal argument: key must be a non-empty sequence of atoms")]
    InvalidKey,
}

/// Collect a key into atoms, rejecting empty keys before any traversal.
pub(crate) fn validate_key<A, K: IntoIterator<Item = A>>(key: K) -> Result<Vec<A>, TrieError> {
    let atoms: Vec<A> = key.into_iter().collect();
    if atoms.is_empty() {
        return Err(TrieError::InvalidKey);
    }
    Ok(atoms)
}
