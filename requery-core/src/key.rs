//! Query key type.
//!
//! [`QueryKey`] is the identity of one unit of asynchronous work. The machine
//! watches a key and re-runs its operation only when the watched key changes;
//! the shared result cache is indexed by the same key.
//!
//! ```
//! use requery_core::QueryKey;
//!
//! let key = QueryKey::new("pikachu");
//! assert_eq!(key.as_str(), "pikachu");
//! assert_eq!(format!("{key}"), "pikachu");
//! assert!(!key.is_empty());
//! ```
//!
//! ## Performance
//!
//! [`QueryKey`] wraps [`SmolStr`], so short keys (≤23 bytes) are stored
//! inline and cloning never allocates.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The identity of a query.
///
/// An empty key means "nothing requested": operation factories return no
/// operation for it and the machine settles in the idle phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryKey(SmolStr);

impl QueryKey {
    /// Creates a key from anything convertible into a [`SmolStr`].
    pub fn new(key: impl Into<SmolStr>) -> Self {
        QueryKey(key.into())
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether this key identifies no query at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for QueryKey {
    fn from(key: &str) -> Self {
        QueryKey::new(key)
    }
}

impl From<String> for QueryKey {
    fn from(key: String) -> Self {
        QueryKey::new(key)
    }
}

impl From<SmolStr> for QueryKey {
    fn from(key: SmolStr) -> Self {
        QueryKey(key)
    }
}
