//! Deterministic short slugs for generated stylesheet filenames.

use crate::hash::ContentHash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex characters a slug keeps from the full content hash.
const SLUG_LEN: usize = 8;

/// A short, deterministic digest of stylesheet text.
///
/// Slugs name generated `.css` files uniquely and reproducibly: identical
/// CSS text always yields the same slug, so re-running a build produces the
/// same synthetic module paths. Derived from the leading bytes of the
/// XXH3-128 [`ContentHash`] of the text.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Computes the slug of the given stylesheet text.
    pub fn of(text: &str) -> Self {
        let hash = ContentHash::from_bytes(text.as_bytes());
        let mut s = String::with_capacity(SLUG_LEN);
        for byte in &hash.as_bytes()[..SLUG_LEN / 2] {
            s.push_str(&format!("{byte:02x}"));
        }
        Self(s)
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slug({})", self.0)
    }
}
