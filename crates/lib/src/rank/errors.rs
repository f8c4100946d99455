//! Error types for rank parsing and generation.

use thiserror::Error;

/// Errors that can occur while parsing or generating ranks.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A rank must contain at least one character.
    #[error("Rank cannot be empty")]
    Empty,

    /// Midpoint mode was called with a lower bound that does not sort before the upper bound.
    #[error("Invalid bounds: lower '{lower}' must sort before upper '{upper}'")]
    InvalidBounds {
        /// The lower bound that was passed in
        lower: String,
        /// The upper bound that was passed in
        upper: String,
    },

    /// The bounds are adjacent, so no rank fits strictly between them.
    #[error("No rank fits between '{lower}' and '{upper}'")]
    NoRoom {
        /// The lower bound, empty when absent
        lower: String,
        /// The upper bound, empty when absent
        upper: String,
    },

    /// A stored rank contains a character outside the configured alphabet.
    #[error("Rank '{rank}' contains {found:?} outside the alphabet [{min:?}, {max:?}]")]
    CharOutOfAlphabet {
        /// The offending rank
        rank: String,
        /// The first character found outside the alphabet
        found: char,
        /// Lowest character of the alphabet
        min: char,
        /// Highest character of the alphabet
        max: char,
    },

    /// The alphabet configuration is unusable.
    #[error("Invalid alphabet configuration: {reason}")]
    InvalidAlphabet {
        /// Description of what is wrong with the configuration
        reason: String,
    },
}

impl RankError {
    /// Check if this error is a caller precondition violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RankError::Empty | RankError::InvalidBounds { .. } | RankError::NoRoom { .. }
        )
    }

    /// Check if this error indicates corrupted rank data.
    pub fn is_corruption(&self) -> bool {
        matches!(self, RankError::CharOutOfAlphabet { .. })
    }

    /// Check if this error comes from the alphabet configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, RankError::InvalidAlphabet { .. })
    }

    /// Get the offending rank if this error is about a single stored rank.
    pub fn rank(&self) -> Option<&str> {
        match self {
            RankError::CharOutOfAlphabet { rank, .. } => Some(rank),
            _ => None,
        }
    }
}

// Conversion from RankError to the main Error type
impl From<RankError> for crate::Error {
    fn from(err: RankError) -> Self {
        crate::Error::Rank(err)
    }
}
