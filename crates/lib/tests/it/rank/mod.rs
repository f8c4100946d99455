//! RankGenerator integration tests
//!
//! Literal rank shapes for both modes, repeated bisection, and
//! property-based checks of the ordering guarantees.
