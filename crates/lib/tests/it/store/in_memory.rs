//! InMemory store behavior through the OrderedStore trait.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use lexorank::{
    Rank,
    store::{Direction, InMemory, OrderedStore, StoreError},
};

fn rank(s: &str) -> Rank {
    Rank::parse(s).unwrap()
}

fn store_with(items: &[(&str, &str)]) -> InMemory<String> {
    let store = InMemory::new();
    for (id, r) in items {
        store.save(&id.to_string(), rank(r)).unwrap();
    }
    store
}

#[test]
fn test_neighbor_lookup() {
    let store = store_with(&[("1", "a"), ("2", "aU"), ("3", "b")]);

    let next = store.neighbor(&rank("a"), Direction::After).unwrap().unwrap();
    assert_eq!(next.id, "2");
    let prev = store.neighbor(&rank("b"), Direction::Before).unwrap().unwrap();
    assert_eq!(prev.id, "2");

    assert!(store.neighbor(&rank("b"), Direction::After).unwrap().is_none());
    assert!(store.neighbor(&rank("a"), Direction::Before).unwrap().is_none());
}

#[test]
fn test_remove_item() {
    let store = store_with(&[("1", "a"), ("2", "b")]);

    assert_eq!(store.remove(&"1".to_string()).unwrap(), Some(rank("a")));
    assert_eq!(store.remove(&"1".to_string()).unwrap(), None);
    assert!(!store.contains(&"1".to_string()).unwrap());
    assert_eq!(store.min_rank().unwrap(), Some(rank("b")));
}

#[test]
fn test_integer_ids() {
    let store: InMemory<u64> = InMemory::new();
    store.save(&7, rank("b")).unwrap();
    store.save(&3, rank("a")).unwrap();

    let ids: Vec<u64> = store.sorted().unwrap().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 7]);
}

#[test]
fn test_transaction_commits() {
    let store: InMemory<String> = InMemory::new();
    let value = store
        .transaction(|s| {
            s.save(&"x".to_string(), rank("m"))?;
            Ok(42)
        })
        .unwrap();

    assert_eq!(value, 42);
    assert_eq!(store.rank_of(&"x".to_string()).unwrap(), Some(rank("m")));
}

#[test]
fn test_transaction_rolls_back_on_error() {
    let store = store_with(&[("x", "a")]);

    let result: lexorank::Result<()> = store.transaction(|s| {
        s.save(&"x".to_string(), rank("q"))?;
        s.save(&"y".to_string(), rank("r"))?;
        Err(StoreError::ItemNotFound {
            id: "z".to_string(),
        }
        .into())
    });

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_store_error());

    assert_eq!(store.len().unwrap(), 1);
    assert_eq!(store.rank_of(&"x".to_string()).unwrap(), Some(rank("a")));
    assert_eq!(store.rank_of(&"y".to_string()).unwrap(), None);
}

#[test]
fn test_backend_error_passes_through() {
    let err: lexorank::Error =
        StoreError::backend(std::io::Error::other("connection reset")).into();

    assert!(err.is_store_error());
    assert!(!err.is_io_error());
    assert_eq!(err.to_string(), "connection reset");
}

#[test]
fn test_rollback_keeps_writes_from_other_threads() {
    let store = store_with(&[("gone", "a"), ("kept", "b")]);
    let (entered, wait_for_entry) = mpsc::channel();

    thread::scope(|scope| {
        let store = &store;
        scope.spawn(move || {
            wait_for_entry.recv().unwrap();
            // Both writes wait for the failing transaction, then apply
            store.remove(&"gone".to_string()).unwrap();
            store.save(&"other".to_string(), rank("c")).unwrap();
        });

        let result: lexorank::Result<()> = store.transaction(|s| {
            s.save(&"kept".to_string(), rank("x"))?;
            entered.send(()).unwrap();
            thread::sleep(Duration::from_millis(50));
            // Writers on other threads cannot change what this transaction read
            assert!(s.contains(&"gone".to_string())?);
            assert!(!s.contains(&"other".to_string())?);
            Err(StoreError::ItemNotFound {
                id: "missing".to_string(),
            }
            .into())
        });
        assert!(result.unwrap_err().is_not_found());
    });

    assert!(!store.contains(&"gone".to_string()).unwrap());
    assert_eq!(store.rank_of(&"other".to_string()).unwrap(), Some(rank("c")));
    assert_eq!(store.rank_of(&"kept".to_string()).unwrap(), Some(rank("b")));
}

#[test]
fn test_writes_inside_transaction_do_not_block() {
    let store = store_with(&[("a", "a")]);

    let removed = store
        .transaction(|s| {
            let removed = s.remove(&"a".to_string())?;
            s.save(&"b".to_string(), rank("b"))?;
            Ok(removed)
        })
        .unwrap();

    assert_eq!(removed, Some(rank("a")));
    assert_eq!(store.len().unwrap(), 1);
    assert!(store.contains(&"b".to_string()).unwrap());
}
