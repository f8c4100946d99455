/*! Integration tests for lexorank.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - rank: Tests for the RankGenerator (append and midpoint modes, properties)
 * - list: Tests for OrderedList scenarios, neighbor queries and concurrency
 * - store: Tests for the InMemory store and its persistence
 * - config: Tests for loading and saving RankConfig
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("lexorank=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod config;
mod list;
mod rank;
mod store;
