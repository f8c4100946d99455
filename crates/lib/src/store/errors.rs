//! Error types for ordered stores.
//!
//! Stores are the collaborators that persist ranks. [`StoreError`] covers the
//! reference [`InMemory`](super::InMemory) store and gives external stores a
//! way to hand their own errors back through the crate's `Result` unchanged.

use thiserror::Error;

/// Errors that can occur inside an ordered store.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with this ID is stored.
    #[error("Item not found in store: {id}")]
    ItemNotFound {
        /// The ID of the missing item
        id: String,
    },

    /// A lock protecting store state was poisoned by a panicking thread.
    #[error("Store lock poisoned: {what}")]
    LockPoisoned {
        /// Which piece of state the lock protects
        what: &'static str,
    },

    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error raised by an external store implementation, passed through as-is.
    #[error(transparent)]
    Backend {
        /// The store's own error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    /// Wrap an external store error so it can travel through [`crate::Result`].
    pub fn backend(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        StoreError::Backend {
            source: source.into(),
        }
    }

    /// Check if this error indicates an item was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ItemNotFound { .. })
    }

    /// Check if this error is related to I/O or (de)serialization.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StoreError::FileIo { .. }
                | StoreError::SerializationFailed { .. }
                | StoreError::DeserializationFailed { .. }
        )
    }

    /// Check if this error indicates store state can no longer be trusted.
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, StoreError::LockPoisoned { .. })
    }

    /// Check if this error came from an external store implementation.
    pub fn is_backend_error(&self) -> bool {
        matches!(self, StoreError::Backend { .. })
    }

    /// Get the item ID if this error is about a specific item.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            StoreError::ItemNotFound { id } => Some(id),
            _ => None,
        }
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
