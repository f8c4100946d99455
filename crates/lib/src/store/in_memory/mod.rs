//! In-memory ordered store implementation
//!
//! This module provides an in-memory implementation of the [`OrderedStore`]
//! trait, suitable for testing, development, or single-process lists whose
//! persistence is handled by saving and loading the whole list.

mod persistence;

use std::collections::{BTreeSet, HashMap};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::path::Path;
use std::sync::{
    Condvar, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use std::thread::{self, ThreadId};

use serde::{Serialize, de::DeserializeOwned};

use super::{Direction, OrderedStore, RankedItem, StoreError};
use crate::{Error, Rank, Result};

/// Ranks keyed by item, plus a sorted index over `(rank, id)`.
#[derive(Debug, Clone)]
pub(crate) struct ListState<Id> {
    ranks: HashMap<Id, Rank>,
    index: BTreeSet<(Rank, Id)>,
}

impl<Id> Default for ListState<Id> {
    fn default() -> Self {
        Self {
            ranks: HashMap::new(),
            index: BTreeSet::new(),
        }
    }
}

impl<Id: Clone + Ord + Hash> ListState<Id> {
    pub(crate) fn insert(&mut self, id: Id, rank: Rank) -> Option<Rank> {
        let previous = self.ranks.insert(id.clone(), rank.clone());
        if let Some(old) = &previous {
            self.index.remove(&(old.clone(), id.clone()));
        }
        self.index.insert((rank, id));
        previous
    }

    fn remove(&mut self, id: &Id) -> Option<Rank> {
        let rank = self.ranks.remove(id)?;
        self.index.remove(&(rank.clone(), id.clone()));
        Some(rank)
    }

    /// Set or clear an item's rank, returning the rank it had.
    fn apply(&mut self, id: &Id, rank: Option<Rank>) -> Option<Rank> {
        match rank {
            Some(rank) => self.insert(id.clone(), rank),
            None => self.remove(id),
        }
    }

    pub(crate) fn sorted(&self) -> Vec<RankedItem<Id>> {
        collect(self.index.iter(), None)
    }
}

fn collect<'a, Id: Clone + 'a>(
    items: impl Iterator<Item = &'a (Rank, Id)>,
    limit: Option<usize>,
) -> Vec<RankedItem<Id>> {
    items
        .take(limit.unwrap_or(usize::MAX))
        .map(|(rank, id)| RankedItem::new(id.clone(), rank.clone()))
        .collect()
}

/// Who may write, and what the running transaction has overwritten.
#[derive(Debug)]
struct WriteGate<Id> {
    /// Thread running a transaction, if any
    owner: Option<ThreadId>,
    /// Rank each item had before the transaction first wrote it
    undo: HashMap<Id, Option<Rank>>,
}

impl<Id> Default for WriteGate<Id> {
    fn default() -> Self {
        Self {
            owner: None,
            undo: HashMap::new(),
        }
    }
}

/// Clears transaction ownership when dropped, including on panic.
struct Ownership<'a, Id> {
    store: &'a InMemory<Id>,
}

impl<Id> Drop for Ownership<'_, Id> {
    fn drop(&mut self) {
        let mut gate = self
            .store
            .gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        gate.owner = None;
        gate.undo.clear();
        drop(gate);
        self.store.released.notify_all();
    }
}

fn poisoned(what: &'static str) -> Error {
    StoreError::LockPoisoned { what }.into()
}

/// A simple in-memory ordered store.
///
/// Ranks live in a `HashMap` for lookup by ID and in a `BTreeSet` ordered by
/// `(rank, id)` for neighbor queries. State sits behind a `RwLock`, so a store
/// can be shared between threads (e.g. in an `Arc`).
///
/// Every write goes through a gate. While one thread runs a
/// [`transaction`](OrderedStore::transaction), writes from other threads
/// (transactional or not) wait until it finishes, so reads made inside the
/// transaction stay valid. If the closure fails, only the items it wrote are
/// restored. A `transaction` call made from inside a transaction on the same
/// thread joins the outer one.
///
/// It provides basic persistence via [`save_to_file`](Self::save_to_file) and
/// [`load_from_file`](Self::load_from_file), serializing the list to JSON.
#[derive(Debug)]
pub struct InMemory<Id> {
    state: RwLock<ListState<Id>>,
    gate: Mutex<WriteGate<Id>>,
    released: Condvar,
}

impl<Id> Default for InMemory<Id> {
    fn default() -> Self {
        Self::from_state(ListState::default())
    }
}

impl<Id> InMemory<Id> {
    pub(crate) fn from_state(state: ListState<Id>) -> Self {
        Self {
            state: RwLock::new(state),
            gate: Mutex::new(WriteGate::default()),
            released: Condvar::new(),
        }
    }
}

impl<Id> InMemory<Id>
where
    Id: Clone + Ord + Hash + Debug + Display,
{
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ListState<Id>>> {
        self.state.read().map_err(|_| poisoned("list state"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ListState<Id>>> {
        self.state.write().map_err(|_| poisoned("list state"))
    }

    fn lock_gate(&self) -> Result<MutexGuard<'_, WriteGate<Id>>> {
        self.gate.lock().map_err(|_| poisoned("write gate"))
    }

    /// Block until no other thread owns a transaction.
    fn wait_for_gate<'a>(
        &'a self,
        mut gate: MutexGuard<'a, WriteGate<Id>>,
    ) -> Result<MutexGuard<'a, WriteGate<Id>>> {
        while gate.owner.is_some() {
            gate = self
                .released
                .wait(gate)
                .map_err(|_| poisoned("write gate"))?;
        }
        Ok(gate)
    }

    /// Set or clear one item's rank through the gate.
    fn write_item(&self, id: &Id, rank: Option<Rank>) -> Result<Option<Rank>> {
        let mut gate = self.lock_gate()?;
        if gate.owner == Some(thread::current().id()) {
            let previous = self.write()?.apply(id, rank);
            gate.undo
                .entry(id.clone())
                .or_insert_with(|| previous.clone());
            return Ok(previous);
        }

        // Holding the gate keeps transactions from starting mid-write
        let gate = self.wait_for_gate(gate)?;
        let previous = self.write()?.apply(id, rank);
        drop(gate);
        Ok(previous)
    }

    /// Restore every item the running transaction wrote.
    fn roll_back(&self) -> Result<usize> {
        let mut gate = self.lock_gate()?;
        let undo = std::mem::take(&mut gate.undo);
        let mut state = self.write()?;
        let count = undo.len();
        for (id, rank) in undo {
            state.apply(&id, rank);
        }
        Ok(count)
    }

    /// Number of items in the list.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.ranks.len())
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.ranks.is_empty())
    }

    /// Whether an item with this ID is stored.
    pub fn contains(&self, id: &Id) -> Result<bool> {
        Ok(self.read()?.ranks.contains_key(id))
    }

    /// Remove an item, returning the rank it had.
    ///
    /// Waits for a transaction running on another thread. Inside a
    /// transaction the removal is undone if the transaction fails.
    pub fn remove(&self, id: &Id) -> Result<Option<Rank>> {
        let removed = self.write_item(id, None)?;
        if removed.is_some() {
            tracing::debug!(id = %id, "Removed item from in-memory list");
        }
        Ok(removed)
    }
}

impl<Id> InMemory<Id>
where
    Id: Clone + Ord + Hash + Debug + Display + Serialize + DeserializeOwned,
{
    /// Saves the whole list to a file as JSON, in rank order.
    ///
    /// # Arguments
    /// * `path` - The path to the file where the list should be saved.
    ///
    /// # Returns
    /// A `Result` indicating success or an I/O or serialization error.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let items = self.read()?.sorted();
        persistence::save_to_file(items, path)
    }

    /// Loads a list from a JSON file written by [`save_to_file`](Self::save_to_file).
    ///
    /// If the file does not exist, a new, empty store is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load_from_file(path)
    }
}

impl<Id> OrderedStore for InMemory<Id>
where
    Id: Clone + Ord + Hash + Debug + Display,
{
    type Id = Id;

    fn rank_of(&self, id: &Id) -> Result<Option<Rank>> {
        Ok(self.read()?.ranks.get(id).cloned())
    }

    fn first(&self) -> Result<Option<RankedItem<Id>>> {
        Ok(collect(self.read()?.index.iter(), Some(1)).pop())
    }

    fn last(&self) -> Result<Option<RankedItem<Id>>> {
        Ok(collect(self.read()?.index.iter().rev(), Some(1)).pop())
    }

    fn siblings(
        &self,
        rank: &Rank,
        direction: Direction,
        limit: Option<usize>,
    ) -> Result<Vec<RankedItem<Id>>> {
        let state = self.read()?;
        let items = match direction {
            Direction::After => collect(
                state.index.iter().skip_while(|(other, _)| other <= rank),
                limit,
            ),
            Direction::Before => collect(
                state.index.iter().rev().skip_while(|(other, _)| other >= rank),
                limit,
            ),
        };
        Ok(items)
    }

    fn sorted(&self) -> Result<Vec<RankedItem<Id>>> {
        Ok(self.read()?.sorted())
    }

    fn save(&self, id: &Id, rank: Rank) -> Result<()> {
        tracing::trace!(id = %id, rank = %rank, "Saving item rank");
        self.write_item(id, Some(rank))?;
        Ok(())
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let me = thread::current().id();
        {
            let gate = self.lock_gate()?;
            if gate.owner == Some(me) {
                drop(gate);
                return f(self);
            }
            let mut gate = self.wait_for_gate(gate)?;
            gate.owner = Some(me);
        }
        let _ownership = Ownership { store: self };

        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                match self.roll_back() {
                    Ok(restored) => {
                        tracing::warn!(error = %err, restored, "Rolled back in-memory transaction")
                    }
                    Err(rollback_err) => tracing::warn!(
                        error = %err,
                        rollback_error = %rollback_err,
                        "Failed to roll back in-memory transaction"
                    ),
                }
                Err(err)
            }
        }
    }
}
