//! Ranks and rank generation.
//!
//! A [`Rank`] is a non-empty string whose plain lexicographic order defines the
//! order of items in a list. New ranks are produced by [`RankGenerator`], either
//! after an existing rank (append mode) or strictly between two ranks
//! (midpoint mode), so inserting or moving an item never rewrites its neighbors.

mod errors;
mod generator;


use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use errors::RankError;
pub use generator::RankGenerator;

/// A sortable string key.
///
/// Ordering is byte-by-byte (identical to codepoint order for the ASCII
/// alphabets the generator accepts). A `Rank` is never empty; whether its
/// characters fall inside a given alphabet is checked by
/// [`RankGenerator::validate`], since the alphabet is configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rank(String);

impl Rank {
    /// Parse a rank, rejecting the empty string.
    pub fn parse(value: impl Into<String>) -> Result<Self, RankError> {
        let value = value.into();
        if value.is_empty() {
            return Err(RankError::Empty);
        }
        Ok(Rank(value))
    }

    /// Wrap a string the generator just built. Callers guarantee it is non-empty.
    pub(crate) fn from_generated(value: String) -> Self {
        debug_assert!(!value.is_empty());
        Rank(value)
    }

    /// Borrow the rank as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the rank.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the rank and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::parse(s)
    }
}

impl TryFrom<String> for Rank {
    type Error = RankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rank::parse(value)
    }
}

impl TryFrom<&str> for Rank {
    type Error = RankError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Rank::parse(value)
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl AsRef<str> for Rank {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Rank {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Rank {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Rank {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Rank> for &str {
    fn eq(&self, other: &Rank) -> bool {
        *self == other.0
    }
}
