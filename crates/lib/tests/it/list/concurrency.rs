//! Shared lists under concurrent writers.

use std::sync::Arc;
use std::thread;

use crate::helpers::{id, list_with, new_list};

#[test]
fn test_concurrent_creates_get_unique_ranks() {
    let list = Arc::new(new_list());
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..per_thread {
                    list.create(format!("t{t}-{i}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let sorted = list.sorted().unwrap();
    assert_eq!(sorted.len(), threads * per_thread);
    for pair in sorted.windows(2) {
        assert!(
            pair[0].rank < pair[1].rank,
            "{} and {} are not strictly ordered",
            pair[0].rank,
            pair[1].rank
        );
    }

    // Each thread's own items stay in creation order
    for t in 0..threads {
        let mine: Vec<_> = sorted
            .iter()
            .filter(|item| item.id.starts_with(&format!("t{t}-")))
            .map(|item| item.id.clone())
            .collect();
        let expected: Vec<_> = (0..per_thread).map(|i| format!("t{t}-{i}")).collect();
        assert_eq!(mine, expected);
    }
}

#[test]
fn test_concurrent_moves_keep_ranks_unique() {
    let names: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let list = Arc::new(list_with(&refs));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let list = Arc::clone(&list);
            let names = names.clone();
            thread::spawn(move || {
                for step in 0..50 {
                    let item = &names[(t * 3 + step) % names.len()];
                    let target = &names[(t + step * 7) % names.len()];
                    if step % 2 == 0 {
                        list.move_after(item, target).unwrap();
                    } else {
                        list.move_before(item, target).unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let sorted = list.sorted().unwrap();
    assert_eq!(sorted.len(), names.len());
    for pair in sorted.windows(2) {
        assert!(pair[0].rank < pair[1].rank);
    }
}

#[test]
fn test_reset_while_appending() {
    let list = Arc::new(list_with(&["A", "B", "C"]));
    list.move_after(&id("A"), &id("C")).unwrap();

    let appender = {
        let list = Arc::clone(&list);
        thread::spawn(move || {
            for i in 0..50 {
                list.create(format!("new{i}")).unwrap();
            }
        })
    };
    for _ in 0..5 {
        list.reset_all().unwrap();
    }
    appender.join().unwrap();

    let sorted = list.sorted().unwrap();
    assert_eq!(sorted.len(), 53);
    for pair in sorted.windows(2) {
        assert!(pair[0].rank < pair[1].rank);
    }
}
