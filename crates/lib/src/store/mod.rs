//! Ordered stores: the persistence side of an ordered list.
//!
//! This module provides the [`OrderedStore`] trait and an [`InMemory`]
//! implementation of it.
//!
//! The rank algorithm never touches storage itself. An [`OrderedList`](crate::OrderedList)
//! asks its store for neighbor ranks, computes a new rank and hands it back to
//! the store to persist, all inside [`OrderedStore::transaction`]. Anything
//! that can answer range queries over a rank column (a SQL table with an index,
//! a sorted key-value store) can implement the trait.

mod errors;
mod in_memory;

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{Rank, Result};

pub use errors::StoreError;
pub use in_memory::InMemory;

/// Which side of an item to look at or move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Lower ranks.
    Before,
    /// Higher ranks.
    After,
}

/// An item ID together with its current rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem<Id> {
    /// The item's ID
    pub id: Id,
    /// The item's rank
    pub rank: Rank,
}

impl<Id> RankedItem<Id> {
    /// Pair an ID with a rank.
    pub fn new(id: Id, rank: Rank) -> Self {
        Self { id, rank }
    }
}

/// Storage capabilities an ordered list needs.
///
/// One store value represents one list: any scoping (per board, per project)
/// is the implementation's business. Items are ordered by ascending rank.
///
/// Errors from the underlying storage should be returned as
/// [`StoreError`] (use [`StoreError::backend`] for foreign error types); the
/// list layer propagates them without retrying.
pub trait OrderedStore {
    /// Identifier of an item in the list.
    type Id: Clone + Debug + Display + PartialEq;

    /// The current rank of an item, or `None` if the item is not stored.
    fn rank_of(&self, id: &Self::Id) -> Result<Option<Rank>>;

    /// The item with the lowest rank, if any.
    fn first(&self) -> Result<Option<RankedItem<Self::Id>>>;

    /// The item with the highest rank, if any.
    fn last(&self) -> Result<Option<RankedItem<Self::Id>>>;

    /// Items strictly on one side of `rank`, nearest first.
    ///
    /// `After` yields ranks strictly greater than `rank` in ascending order,
    /// `Before` yields ranks strictly less in descending order. `limit` caps
    /// the number of items returned.
    fn siblings(
        &self,
        rank: &Rank,
        direction: Direction,
        limit: Option<usize>,
    ) -> Result<Vec<RankedItem<Self::Id>>>;

    /// Every item in ascending rank order.
    fn sorted(&self) -> Result<Vec<RankedItem<Self::Id>>>;

    /// Store an item with the given rank, inserting it if it is new.
    fn save(&self, id: &Self::Id, rank: Rank) -> Result<()>;

    /// Run `f` atomically with respect to other transactions on this store.
    ///
    /// Reads made inside `f` must not be invalidated by concurrent writers
    /// before `f` returns. If `f` fails, its writes must not become visible.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>;

    /// The lowest rank in the list.
    fn min_rank(&self) -> Result<Option<Rank>> {
        Ok(self.first()?.map(|item| item.rank))
    }

    /// The highest rank in the list.
    fn max_rank(&self) -> Result<Option<Rank>> {
        Ok(self.last()?.map(|item| item.rank))
    }

    /// The nearest item strictly on one side of `rank`.
    fn neighbor(&self, rank: &Rank, direction: Direction) -> Result<Option<RankedItem<Self::Id>>> {
        Ok(self.siblings(rank, direction, Some(1))?.into_iter().next())
    }
}
