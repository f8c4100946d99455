//! Ordered lists built on top of rank generation.
//!
//! [`OrderedList`] turns list-level intents (append a new item, move an item
//! before or after another, renumber everything) into bound pairs for the
//! [`RankGenerator`], using neighbor ranks read from an [`OrderedStore`].
//!
//! Every write runs inside [`OrderedStore::transaction`], so the neighbor read
//! and the save it depends on are atomic with respect to other writers.

mod errors;


use tracing::{debug, info};

use crate::{
    Rank, RankGenerator, Result,
    store::{Direction, OrderedStore, RankedItem},
};

pub use errors::ListError;

/// The rules for ranking items in one list.
///
/// ```
/// use lexorank::{OrderedList, store::InMemory};
///
/// let list = OrderedList::new(InMemory::new());
/// list.create("first").unwrap();
/// list.create("second").unwrap();
/// let rank = list.move_before(&"second", &"first").unwrap();
/// assert_eq!(rank, "H");
/// ```
#[derive(Debug)]
pub struct OrderedList<S> {
    store: S,
    generator: RankGenerator,
}

impl<S: OrderedStore> OrderedList<S> {
    /// Wrap a store, using the default alphabet.
    pub fn new(store: S) -> Self {
        Self::with_generator(store, RankGenerator::default())
    }

    /// Wrap a store with a specific generator.
    pub fn with_generator(store: S, generator: RankGenerator) -> Self {
        Self { store, generator }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The generator used for new ranks.
    pub fn generator(&self) -> &RankGenerator {
        &self.generator
    }

    /// Give up the list and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn require_rank(store: &S, id: &S::Id) -> Result<Rank> {
        store.rank_of(id)?.ok_or_else(|| {
            ListError::ItemNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    fn append_rank(&self, store: &S) -> Result<Rank> {
        let max = store.max_rank()?;
        Ok(self.generator.after(max.as_ref().map(Rank::as_str))?)
    }

    /// The rank a newly created item would receive right now.
    ///
    /// This only reads the store. Use [`create`](Self::create) to assign and
    /// save the rank atomically.
    pub fn next_rank(&self) -> Result<Rank> {
        self.append_rank(&self.store)
    }

    /// Append an item at the end of the list and save it.
    ///
    /// The item receives the append-mode rank after the current maximum
    /// (`"a"` for an empty list). An item that is already stored is moved to
    /// the end.
    pub fn create(&self, id: S::Id) -> Result<Rank> {
        let rank = self.store.transaction(|store| {
            let rank = self.append_rank(store)?;
            store.save(&id, rank.clone())?;
            Ok(rank)
        })?;
        debug!(id = %id, rank = %rank, "Created item");
        Ok(rank)
    }

    /// Move `id` directly after `target`.
    pub fn move_after(&self, id: &S::Id, target: &S::Id) -> Result<Rank> {
        self.move_to(id, target, Direction::After)
    }

    /// Move `id` directly before `target`.
    pub fn move_before(&self, id: &S::Id, target: &S::Id) -> Result<Rank> {
        self.move_to(id, target, Direction::Before)
    }

    /// Move `id` to one side of `target` and save its new rank.
    ///
    /// The new rank lies between `target` and target's nearest neighbor in
    /// `direction` (unbounded when there is none). The neighbor lookup does not
    /// skip `id` itself.
    ///
    /// # Errors
    /// * [`ListError::ItemNotFound`] if `id` or `target` is not stored.
    /// * Any rank or store error, unchanged.
    pub fn move_to(&self, id: &S::Id, target: &S::Id, direction: Direction) -> Result<Rank> {
        let rank = self.store.transaction(|store| {
            Self::require_rank(store, id)?;
            let target_rank = Self::require_rank(store, target)?;
            let neighbor = store
                .neighbor(&target_rank, direction)?
                .map(|item| item.rank);

            let (lower, upper) = match direction {
                Direction::After => (Some(target_rank), neighbor),
                Direction::Before => (neighbor, Some(target_rank)),
            };
            let rank = self.generator.between(
                lower.as_ref().map(Rank::as_str),
                upper.as_ref().map(Rank::as_str),
            )?;

            store.save(id, rank.clone())?;
            Ok(rank)
        })?;
        debug!(id = %id, target = %target, ?direction, rank = %rank, "Moved item");
        Ok(rank)
    }

    /// Renumber every item from `"a"` in current list order.
    ///
    /// Shortens ranks that have grown long after many insertions at the same
    /// spot. Runs as one transaction and returns the number of items.
    pub fn reset_all(&self) -> Result<usize> {
        let count = self.store.transaction(|store| {
            let items = store.sorted()?;
            self.generator
                .reset_all(items, |item, rank| store.save(&item.id, rank))
        })?;
        info!(count, "Reset all ranks");
        Ok(count)
    }

    /// Items on one side of `id`, nearest first.
    pub fn siblings(
        &self,
        id: &S::Id,
        direction: Direction,
        limit: Option<usize>,
    ) -> Result<Vec<RankedItem<S::Id>>> {
        let rank = Self::require_rank(&self.store, id)?;
        let items = self.store.siblings(&rank, direction, limit)?;
        debug!(id = %id, ?direction, count = items.len(), "Looked up siblings");
        Ok(items)
    }

    /// Items before `id`, nearest first (descending rank).
    pub fn previous(&self, id: &S::Id, limit: Option<usize>) -> Result<Vec<RankedItem<S::Id>>> {
        self.siblings(id, Direction::Before, limit)
    }

    /// Items after `id`, nearest first (ascending rank).
    pub fn next(&self, id: &S::Id, limit: Option<usize>) -> Result<Vec<RankedItem<S::Id>>> {
        self.siblings(id, Direction::After, limit)
    }

    /// The `limit` items before `id`, in list order.
    pub fn preceding(&self, id: &S::Id, limit: Option<usize>) -> Result<Vec<RankedItem<S::Id>>> {
        let mut items = self.previous(id, limit)?;
        items.reverse();
        Ok(items)
    }

    /// Every item in list order.
    pub fn sorted(&self) -> Result<Vec<RankedItem<S::Id>>> {
        self.store.sorted()
    }

    /// Whether `id` holds the lowest rank in the list.
    pub fn is_first(&self, id: &S::Id) -> Result<bool> {
        let rank = Self::require_rank(&self.store, id)?;
        Ok(self.store.min_rank()?.as_ref() == Some(&rank))
    }

    /// Whether `id` holds the highest rank in the list.
    pub fn is_last(&self, id: &S::Id) -> Result<bool> {
        let rank = Self::require_rank(&self.store, id)?;
        Ok(self.store.max_rank()?.as_ref() == Some(&rank))
    }
}
