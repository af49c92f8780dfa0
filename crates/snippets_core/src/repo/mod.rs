//! Repository layer for snippet persistence.
//!
//! # Responsibility
//! - Define the store contract used by the resolver and executor.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths reject empty keys before any SQL mutation.
//! - Absent keys are reported as `None`, never as an empty value.

pub mod snippet_repo;
