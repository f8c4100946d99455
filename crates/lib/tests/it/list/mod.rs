//! OrderedList integration tests
//!
//! End-to-end create / move / reset scenarios against the InMemory store,
//! neighbor queries, and concurrent writers.

mod concurrency;
