//! The rank generation algorithm.

use super::{Rank, RankError};
use crate::config::RankConfig;

/// Produces new ranks relative to existing ones.
///
/// The generator is a pure function of its inputs and its alphabet. It holds no
/// mutable state, so one instance can be shared freely across threads.
///
/// Two modes are supported:
///
/// * **Append** ([`after`](Self::after)): the next rank after a lower bound.
///   The last character is bumped by one (`"b"` → `"c"`); once it is already
///   the highest character, the seed character is appended instead
///   (`"z"` → `"za"`).
/// * **Midpoint** ([`between`](Self::between)): a rank strictly between two
///   bounds, keeping their common prefix and descending one level whenever two
///   characters are adjacent (`"a"`, `"b"` → `"aU"`).
///
/// ```
/// use lexorank::RankGenerator;
///
/// let generator = RankGenerator::default();
/// assert_eq!(generator.after(Some("z")).unwrap(), "za");
/// assert_eq!(generator.between(Some("a"), Some("b")).unwrap(), "aU");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGenerator {
    config: RankConfig,
    min: u8,
    max: u8,
    seed: u8,
}

impl Default for RankGenerator {
    fn default() -> Self {
        Self::from_validated(RankConfig::default())
    }
}

impl RankGenerator {
    /// Create a generator for the given alphabet.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidAlphabet`] if the configuration fails
    /// [`RankConfig::validate`].
    pub fn new(config: RankConfig) -> Result<Self, RankError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: RankConfig) -> Self {
        // validate() guarantees all three characters are ASCII
        Self {
            min: config.min_char as u8,
            max: config.max_char as u8,
            seed: config.seed_char as u8,
            config,
        }
    }

    /// The alphabet this generator works with.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// The rank given to the first item of an empty list.
    pub fn first(&self) -> Rank {
        Rank::from_generated(char::from(self.seed).to_string())
    }

    /// Check that every character of `rank` lies inside the alphabet.
    ///
    /// # Errors
    /// Returns [`RankError::CharOutOfAlphabet`] naming the first offending character.
    pub fn validate(&self, rank: &str) -> Result<(), RankError> {
        match rank
            .chars()
            .find(|&c| !c.is_ascii() || (c as u8) < self.min || (c as u8) > self.max)
        {
            Some(found) => Err(RankError::CharOutOfAlphabet {
                rank: rank.to_string(),
                found,
                min: self.config.min_char,
                max: self.config.max_char,
            }),
            None => Ok(()),
        }
    }

    /// Generate a rank in either mode.
    ///
    /// With `insert_between` false this is [`after`](Self::after) and `upper`
    /// is ignored; otherwise it is [`between`](Self::between). Empty strings
    /// are treated as absent bounds.
    pub fn generate(
        &self,
        lower: Option<&str>,
        upper: Option<&str>,
        insert_between: bool,
    ) -> Result<Rank, RankError> {
        if insert_between {
            self.between(lower, upper)
        } else {
            self.after(lower)
        }
    }

    /// The next rank after `lower`, as short as possible.
    ///
    /// An absent or empty `lower` yields [`first`](Self::first).
    ///
    /// # Errors
    /// Returns [`RankError::CharOutOfAlphabet`] if `lower` is outside the alphabet.
    pub fn after(&self, lower: Option<&str>) -> Result<Rank, RankError> {
        let Some(lower) = present(lower) else {
            return Ok(self.first());
        };
        self.validate(lower)?;

        // ASCII was just checked, so every byte index is a char boundary
        let (prefix, last) = lower.split_at(lower.len() - 1);
        let last = last.as_bytes()[0];

        let mut next = String::with_capacity(lower.len() + 1);
        if last < self.max {
            next.push_str(prefix);
            next.push(char::from(last + 1));
        } else {
            next.push_str(lower);
            next.push(char::from(self.seed));
        }

        tracing::trace!(lower, rank = %next, "Generated append rank");
        Ok(Rank::from_generated(next))
    }

    /// A rank strictly between `lower` and `upper`.
    ///
    /// An absent lower bound behaves as the lowest character and an absent
    /// upper bound as an endless run of the highest character, so
    /// `between(None, None)` is the midpoint of the alphabet.
    ///
    /// # Errors
    /// * [`RankError::CharOutOfAlphabet`] if either bound is outside the alphabet.
    /// * [`RankError::InvalidBounds`] if both bounds are present and `lower >= upper`.
    /// * [`RankError::NoRoom`] if nothing fits between the bounds, which only
    ///   happens when `upper` is `lower` followed by lowest characters
    ///   (`"a"` and `"a0"`).
    pub fn between(&self, lower: Option<&str>, upper: Option<&str>) -> Result<Rank, RankError> {
        let lower = present(lower);
        let upper = present(upper);
        if let Some(lower) = lower {
            self.validate(lower)?;
        }
        if let Some(upper) = upper {
            self.validate(upper)?;
        }
        if let (Some(lower), Some(upper)) = (lower, upper)
            && lower >= upper
        {
            return Err(RankError::InvalidBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        let lo = lower.unwrap_or_default().as_bytes();
        let hi = upper.unwrap_or_default().as_bytes();
        let mut rank = String::new();

        // Past the end of both bounds the pair is (min, max), which always has a
        // distinct midpoint, so this runs at most max(len) + 1 times.
        for i in 0.. {
            let lo_c = lo.get(i).copied().unwrap_or(self.min);
            let hi_c = hi.get(i).copied().unwrap_or(self.max);

            // Shared prefix, or the result is already below upper at a shallower
            // depth and only lower still constrains it.
            if lo_c >= hi_c {
                rank.push(char::from(lo_c));
                continue;
            }

            let mid = midpoint(lo_c, hi_c);
            if mid == lo_c || mid == hi_c {
                // Adjacent characters: keep the lower one and descend.
                rank.push(char::from(lo_c));
                continue;
            }

            rank.push(char::from(mid));
            break;
        }

        let below_lower = lower.is_some_and(|lower| rank.as_str() <= lower);
        let above_upper = upper.is_some_and(|upper| rank.as_str() >= upper);
        if below_lower || above_upper {
            return Err(RankError::NoRoom {
                lower: lower.unwrap_or_default().to_string(),
                upper: upper.unwrap_or_default().to_string(),
            });
        }

        tracing::trace!(
            lower = lower.unwrap_or_default(),
            upper = upper.unwrap_or_default(),
            rank = %rank,
            "Generated midpoint rank"
        );
        Ok(Rank::from_generated(rank))
    }

    /// Renumber a sequence of items from scratch.
    ///
    /// Items are assigned [`first`](Self::first) and then successive
    /// [`after`](Self::after) ranks (`"a"`, `"b"`, ..., `"z"`, `"za"`, ...), in
    /// the order the iterator yields them. The first error returned by
    /// `assign` stops the renumbering and is returned unchanged.
    ///
    /// Returns the number of items assigned.
    pub fn reset_all<I, F, E>(&self, items: I, mut assign: F) -> Result<usize, E>
    where
        I: IntoIterator,
        F: FnMut(I::Item, Rank) -> Result<(), E>,
        E: From<RankError>,
    {
        let mut rank = self.first();
        let mut count = 0;
        for item in items {
            let next = self.after(Some(rank.as_str()))?;
            assign(item, rank)?;
            rank = next;
            count += 1;
        }
        Ok(count)
    }
}

/// Empty bounds mean "no bound".
fn present(bound: Option<&str>) -> Option<&str> {
    bound.filter(|s| !s.is_empty())
}

fn midpoint(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) / 2) as u8
}
