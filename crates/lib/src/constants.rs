//! Constants used throughout the lexorank library.
//!
//! This module provides central definitions for the default alphabet and
//! other fixed values shared between the generator, the list policy and the
//! reference store.

/// Lowest character of the default rank alphabet.
pub const DEFAULT_MIN_CHAR: char = '0';

/// Highest character of the default rank alphabet.
pub const DEFAULT_MAX_CHAR: char = 'z';

/// Default seed character.
///
/// The first rank handed out in append mode, and the character appended when
/// the last character of a rank is already the highest in the alphabet.
pub const DEFAULT_SEED_CHAR: char = 'a';

/// Smallest usable alphabet span (`max - min`).
///
/// With two adjacent characters there is never a distinct midpoint, so the
/// midpoint search would descend forever.
pub const MIN_ALPHABET_SPAN: u8 = 2;

/// Current file format version for persisted stores.
/// v0 indicates this is an unstable format subject to breaking changes.
pub const PERSISTENCE_VERSION: u8 = 0;
