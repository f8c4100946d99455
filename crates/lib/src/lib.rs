//!
//! Lexorank: sortable string ranks for ordered lists.
//! This library assigns and maintains the sort keys of items in a list so that
//! items can be appended, inserted between neighbors or moved without
//! rewriting the rank of any other item.
//!
//! ## Core Concepts
//!
//! * **Ranks (`rank::Rank`)**: Non-empty strings over a bounded ASCII alphabet. List order is plain lexicographic order of ranks.
//! * **Generator (`rank::RankGenerator`)**: The pure rank algorithm. Append mode produces the next rank after a lower bound; midpoint mode produces a rank strictly between two bounds.
//! * **Configuration (`config::RankConfig`)**: The alphabet (`'0'`..=`'z'` by default) and seed character, as serde data.
//! * **Stores (`store::OrderedStore`)**: The persistence collaborator: neighbor queries, saves and transactions. `store::InMemory` is a thread-safe reference implementation.
//! * **Ordered lists (`list::OrderedList`)**: The policy layer that turns create / move / reset intents into generator calls using neighbor ranks from a store.
//!
//! ```
//! use lexorank::{OrderedList, store::InMemory};
//!
//! let list = OrderedList::new(InMemory::new());
//! for id in ["a", "b", "c"] {
//!     list.create(id).unwrap();
//! }
//! assert_eq!(list.move_after(&"a", &"b").unwrap(), "bU");
//! ```

pub mod config;
pub mod constants;
pub mod list;
pub mod rank;
pub mod store;

pub use config::RankConfig;
pub use list::OrderedList;
pub use rank::{Rank, RankGenerator};

/// Result type used throughout the lexorank library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the lexorank library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be parsed or written
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured rank errors from the rank module
    #[error(transparent)]
    Rank(rank::RankError),

    /// Structured list errors from the list module
    #[error(transparent)]
    List(list::ListError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Rank(_) => "rank",
            Error::List(_) => "list",
            Error::Store(_) => "store",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates an item was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::List(list_err) => list_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a caller precondition violation (bad bounds, empty rank).
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Rank(rank_err) => rank_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error indicates corrupted or untrustworthy data.
    pub fn is_integrity_error(&self) -> bool {
        match self {
            Error::Rank(rank_err) => rank_err.is_corruption(),
            Error::Store(store_err) => store_err.is_integrity_error(),
            _ => false,
        }
    }

    /// Check if this error is a configuration problem.
    pub fn is_config_error(&self) -> bool {
        match self {
            Error::Rank(rank_err) => rank_err.is_config_error(),
            _ => false,
        }
    }

    /// Check if this error came from the store.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }
}
