//! Alphabet configuration for rank generation.
//!
//! [`RankConfig`] describes the contiguous character range ranks are drawn
//! from. It is plain serde data so it can live in a host application's config
//! file; [`RankGenerator::new`](crate::RankGenerator::new) validates it.
//!
//! # Example
//!
//! ```
//! use lexorank::RankConfig;
//!
//! let config = RankConfig::from_json_str(r#"{ "min_char": "A", "max_char": "Z", "seed_char": "B" }"#).unwrap();
//! assert_eq!(config.max_char, 'Z');
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    constants::{DEFAULT_MAX_CHAR, DEFAULT_MIN_CHAR, DEFAULT_SEED_CHAR, MIN_ALPHABET_SPAN},
    rank::RankError,
};

/// Character range and seed used by a [`RankGenerator`](crate::RankGenerator).
///
/// Missing fields fall back to the defaults (`'0'`, `'z'`, `'a'`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Lowest character a rank may contain. Absent lower bounds behave as this character.
    pub min_char: char,

    /// Highest character a rank may contain. Absent upper bounds behave as an
    /// endless run of this character.
    pub max_char: char,

    /// First rank handed out in append mode, and the character appended once
    /// the last character of a rank reaches `max_char`.
    pub seed_char: char,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            min_char: DEFAULT_MIN_CHAR,
            max_char: DEFAULT_MAX_CHAR,
            seed_char: DEFAULT_SEED_CHAR,
        }
    }
}

impl RankConfig {
    /// Create a configuration with the given range and the default seed character.
    pub fn new(min_char: char, max_char: char) -> Self {
        Self {
            min_char,
            max_char,
            ..Self::default()
        }
    }

    /// Replace the seed character.
    pub fn with_seed_char(mut self, seed_char: char) -> Self {
        self.seed_char = seed_char;
        self
    }

    /// Check that the configuration describes a usable alphabet.
    ///
    /// All characters must be ASCII, `min_char` must sort before `max_char`
    /// with at least one character between them, and `seed_char` must lie in
    /// `(min_char, max_char]`.
    pub fn validate(&self) -> std::result::Result<(), RankError> {
        let invalid = |reason: String| Err(RankError::InvalidAlphabet { reason });

        for (name, ch) in [
            ("min_char", self.min_char),
            ("max_char", self.max_char),
            ("seed_char", self.seed_char),
        ] {
            if !ch.is_ascii() {
                return invalid(format!("{name} {ch:?} is not ASCII"));
            }
        }

        let (min, max) = (self.min_char as u8, self.max_char as u8);
        if min >= max {
            return invalid(format!(
                "min_char {:?} must sort before max_char {:?}",
                self.min_char, self.max_char
            ));
        }
        if max - min < MIN_ALPHABET_SPAN {
            return invalid(format!(
                "alphabet [{:?}, {:?}] needs at least {} characters",
                self.min_char,
                self.max_char,
                MIN_ALPHABET_SPAN + 1
            ));
        }
        if self.seed_char <= self.min_char || self.seed_char > self.max_char {
            return invalid(format!(
                "seed_char {:?} must lie in ({:?}, {:?}]",
                self.seed_char, self.min_char, self.max_char
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// If the file does not exist, the default configuration is returned.
    /// Other read failures are [`Error::Io`](crate::Error::Io) and malformed JSON is
    /// [`Error::Serialize`](crate::Error::Serialize).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_str(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Saves the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
