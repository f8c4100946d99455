//! Error types for ordered list operations.

use thiserror::Error;

/// Errors raised by [`OrderedList`](super::OrderedList) itself.
///
/// Failures from the store are not wrapped here; they reach the caller as the
/// store returned them.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An item the operation refers to is not in the list.
    #[error("Item not found in list: {id}")]
    ItemNotFound {
        /// The ID of the missing item
        id: String,
    },
}

impl ListError {
    /// Check if this error indicates an item was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListError::ItemNotFound { .. })
    }

    /// Get the item ID this error is about.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            ListError::ItemNotFound { id } => Some(id),
        }
    }
}

// Conversion from ListError to the main Error type
impl From<ListError> for crate::Error {
    fn from(err: ListError) -> Self {
        crate::Error::List(err)
    }
}
